// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::descriptor::{ParameterDescriptor, ResultDescriptor};

/// Everything known about one exposed method after a scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodMetadata {
    pub service_name: String,
    pub delimiter: String,
    pub method_name: String,
    /// The summary line of the method's documentation comment
    pub description: Option<String>,
    pub parameters: Vec<ParameterDescriptor>,
    pub results: Vec<ResultDescriptor>,
}

impl MethodMetadata {
    /// The externally visible method identifier (`service<delimiter>method`)
    pub fn identifier(&self) -> String {
        format!("{}{}{}", self.service_name, self.delimiter, self.method_name)
    }
}
