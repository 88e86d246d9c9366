// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use procdoc_model::{MethodMetadata, ProcedureSet};

use crate::error::IntrospectionError;
use crate::introspector::introspect;

/// Produce metadata for every public, non-constructor method of the registered services.
///
/// Services are visited in registration order and methods in declaration order. A service
/// without a service name fails the whole scan.
pub fn scan(procedures: &ProcedureSet) -> Result<Vec<MethodMetadata>, IntrospectionError> {
    let mut methods = Vec::new();

    for service in &procedures.services {
        let service_name =
            service
                .service_name()
                .ok_or_else(|| IntrospectionError::MissingServiceName {
                    type_name: service.type_name().to_string(),
                })?;

        let exposed = service
            .methods()
            .iter()
            .filter(|method| method.is_public() && !method.constructor);

        for method in exposed {
            let introspection = introspect(method);

            methods.push(MethodMetadata {
                service_name: service_name.to_string(),
                delimiter: procedures.delimiter.clone(),
                method_name: method.name.clone(),
                description: introspection.description,
                parameters: introspection.parameters,
                results: introspection.results,
            });
        }

        tracing::debug!(
            "Scanned service '{}' ({})",
            service_name,
            service.type_name()
        );
    }

    Ok(methods)
}
