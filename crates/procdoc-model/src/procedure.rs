// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use crate::declaration::ServiceDeclaration;

pub const DEFAULT_DELIMITER: &str = "@";

/// The service classes registered for one route, in registration order.
#[derive(Clone)]
pub struct ProcedureSet {
    pub services: Vec<Arc<dyn ServiceDeclaration>>,
    /// Joins the service name and the method name into the external method identifier
    pub delimiter: String,
}

impl ProcedureSet {
    pub fn new(services: Vec<Arc<dyn ServiceDeclaration>>) -> Self {
        Self {
            services,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_service(mut self, service: Arc<dyn ServiceDeclaration>) -> Self {
        self.services.push(service);
        self
    }
}

impl std::fmt::Debug for ProcedureSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcedureSet")
            .field(
                "services",
                &self
                    .services
                    .iter()
                    .map(|service| service.type_name())
                    .collect::<Vec<_>>(),
            )
            .field("delimiter", &self.delimiter)
            .finish()
    }
}

/// What the routing layer supplies for the endpoint being documented.
#[derive(Debug, Clone)]
pub struct Route {
    /// The external URI of the endpoint
    pub target: String,
    pub procedures: ProcedureSet,
}

impl Route {
    pub fn new(target: impl Into<String>, procedures: ProcedureSet) -> Self {
        Self {
            target: target.into(),
            procedures,
        }
    }
}
