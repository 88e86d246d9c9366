// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Conversion from scanned method metadata to the SMD document.

use procdoc_model::{MethodMetadata, Route};

use crate::error::IntrospectionError;
use crate::scanner::scan;
use crate::smd::{ServiceDescriptorDocument, ServiceEntry};

/// Scan the route's services and build its descriptor document.
pub fn build_service_descriptor(
    route: &Route,
) -> Result<ServiceDescriptorDocument, IntrospectionError> {
    let methods = scan(&route.procedures)?;
    Ok(to_service_descriptor(&methods, &route.target))
}

/// Convert already scanned metadata to a descriptor document.
///
/// Parameters and results are listed flat, one entry per declaration.
pub fn to_service_descriptor(
    methods: &[MethodMetadata],
    target: &str,
) -> ServiceDescriptorDocument {
    let mut doc = ServiceDescriptorDocument::new(target);

    for method in methods {
        if doc.insert(convert_method(method)).is_some() {
            tracing::warn!(
                "Method '{}' is declared more than once; keeping the last declaration",
                method.identifier()
            );
        }
    }

    doc
}

fn convert_method(method: &MethodMetadata) -> ServiceEntry {
    let mut entry = ServiceEntry::new(method.identifier());
    entry.parameters = method.parameters.clone();
    entry.returns = method.results.clone();
    entry
}
