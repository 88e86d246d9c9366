// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use procdoc_introspection::{IntrospectionError, assemble_parameters, assemble_results, scan};
use procdoc_model::{MethodMetadata, Route};

use crate::example::{nested_or_flat, render_example};
use crate::span::RenderedText;

/// What a page shell needs to present one method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodDocumentation {
    /// The service name
    pub name: String,
    pub delimiter: String,
    /// The method name
    pub method: String,
    pub description: Option<String>,
    /// Parameters assembled into their nested shape (name -> type)
    pub parameters: Value,
    /// Results assembled into their nested shape (name or position -> type)
    pub result: Value,
    pub request: RenderedText,
    pub response: RenderedText,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSettings {
    pub title: String,
    /// Prefixed to the route target to form the page's endpoint URI
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentationPage {
    pub title: String,
    pub uri: String,
    pub procedures: Vec<MethodDocumentation>,
}

/// Scan the route's services and document every exposed method.
pub fn build_documentation(
    route: &Route,
    settings: &PageSettings,
) -> Result<DocumentationPage, IntrospectionError> {
    let methods = scan(&route.procedures)?;

    Ok(DocumentationPage {
        title: settings.title.clone(),
        uri: join_uri(&settings.base_url, &route.target),
        procedures: document_methods(&methods),
    })
}

/// Document each method once per identifier.
///
/// A later method with an already documented identifier replaces the earlier one in place.
pub fn document_methods(methods: &[MethodMetadata]) -> Vec<MethodDocumentation> {
    let mut documented: IndexMap<String, MethodDocumentation> = IndexMap::new();

    for method in methods {
        if documented
            .insert(method.identifier(), document_method(method))
            .is_some()
        {
            tracing::warn!(
                "Method '{}' is declared more than once; keeping the last declaration",
                method.identifier()
            );
        }
    }

    documented.into_values().collect()
}

fn document_method(method: &MethodMetadata) -> MethodDocumentation {
    let example = render_example(method);

    let parameters = nested_or_flat(
        method,
        assemble_parameters(&method.parameters),
        method
            .parameters
            .iter()
            .map(|param| (param.name.clone(), Value::String(param.type_name.clone()))),
    );

    let result = nested_or_flat(
        method,
        assemble_results(&method.results),
        method.results.iter().enumerate().map(|(index, result)| {
            (
                result.name.clone().unwrap_or_else(|| index.to_string()),
                Value::String(result.type_name.clone()),
            )
        }),
    );

    MethodDocumentation {
        name: method.service_name.clone(),
        delimiter: method.delimiter.clone(),
        method: method.method_name.clone(),
        description: method.description.clone(),
        parameters,
        result,
        request: example.request,
        response: example.response,
    }
}

fn join_uri(base_url: &str, target: &str) -> String {
    if base_url.is_empty() {
        return target.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        target.trim_start_matches('/')
    )
}
