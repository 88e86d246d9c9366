// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Service Mapping Description (SMD 2.0) document types.
//!
//! The document lists every exposed method twice, under `services` and under `methods`, with
//! identical content.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use procdoc_model::{ParameterDescriptor, ResultDescriptor};

pub const SMD_VERSION: &str = "2.0";
pub const JSON_RPC_ENVELOPE: &str = "JSON-RPC-2.0";
pub const POST_TRANSPORT: &str = "POST";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// The root SMD document for one route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDescriptorDocument {
    pub transport: String,
    pub envelope: String,
    #[serde(rename = "contentType")]
    pub content_type: String,
    #[serde(rename = "SMDVersion")]
    pub smd_version: String,
    /// Always serialized, as `null` when absent
    pub description: Option<String>,
    /// The external URI of the route
    pub target: String,
    pub services: IndexMap<String, ServiceEntry>,
    pub methods: IndexMap<String, ServiceEntry>,
}

impl ServiceDescriptorDocument {
    /// Create an empty document for the given target
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            transport: POST_TRANSPORT.to_string(),
            envelope: JSON_RPC_ENVELOPE.to_string(),
            content_type: JSON_CONTENT_TYPE.to_string(),
            smd_version: SMD_VERSION.to_string(),
            description: None,
            target: target.into(),
            services: IndexMap::new(),
            methods: IndexMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add an entry under both `services` and `methods`.
    ///
    /// Returns the entry previously registered under the same name, if any. The replacement
    /// keeps the original position.
    pub fn insert(&mut self, entry: ServiceEntry) -> Option<ServiceEntry> {
        self.methods.insert(entry.name.clone(), entry.clone());
        self.services.insert(entry.name.clone(), entry)
    }
}

/// One exposed method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub envelope: String,
    pub transport: String,
    /// The method identifier (`service<delimiter>method`)
    pub name: String,
    pub parameters: Vec<ParameterDescriptor>,
    pub returns: Vec<ResultDescriptor>,
}

impl ServiceEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            envelope: JSON_RPC_ENVELOPE.to_string(),
            transport: POST_TRANSPORT.to_string(),
            name: name.into(),
            parameters: Vec::new(),
            returns: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, parameter: ParameterDescriptor) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_return(mut self, result: ResultDescriptor) -> Self {
        self.returns.push(result);
        self
    }
}
