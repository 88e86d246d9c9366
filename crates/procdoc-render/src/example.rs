// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Canonical JSON-RPC examples for a method.

use serde::Serialize;
use serde_json::{Map, Value};

use procdoc_introspection::{AssembleError, AssembledValue, assemble_parameters};
use procdoc_model::MethodMetadata;

use crate::highlight::highlight;
use crate::span::RenderedText;

const JSON_RPC_VERSION: &str = "2.0";
const EXAMPLE_ID: u64 = 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedExample {
    pub request: RenderedText,
    pub response: RenderedText,
}

/// `{"jsonrpc": "2.0", "id": 1, "method": <identifier>, "params": {<name>: <type>, ...}}`
pub fn request_example(method: &MethodMetadata) -> Value {
    let params = nested_or_flat(
        method,
        assemble_parameters(&method.parameters),
        method
            .parameters
            .iter()
            .map(|param| (param.name.clone(), Value::String(param.type_name.clone()))),
    );

    let mut request = Map::new();
    request.insert("jsonrpc".to_string(), JSON_RPC_VERSION.into());
    request.insert("id".to_string(), EXAMPLE_ID.into());
    request.insert("method".to_string(), method.identifier().into());
    request.insert("params".to_string(), params);
    Value::Object(request)
}

/// `{"jsonrpc": "2.0", "id": 1, "result": <type of the first result>}`
///
/// `result` is left out when the method declares no result.
pub fn response_example(method: &MethodMetadata) -> Value {
    let mut response = Map::new();
    response.insert("jsonrpc".to_string(), JSON_RPC_VERSION.into());
    response.insert("id".to_string(), EXAMPLE_ID.into());
    if let Some(result) = method.results.first() {
        response.insert(
            "result".to_string(),
            Value::String(result.type_name.clone()),
        );
    }
    Value::Object(response)
}

pub fn render_example(method: &MethodMetadata) -> RenderedExample {
    RenderedExample {
        request: highlight(&request_example(method)),
        response: highlight(&response_example(method)),
    }
}

/// The assembled tree, or a flat mapping of the raw declared names when the names cannot be
/// merged consistently. In the flat mapping, values of a repeated name are collected into an
/// array.
pub(crate) fn nested_or_flat(
    method: &MethodMetadata,
    assembled: Result<AssembledValue, AssembleError>,
    flat: impl Iterator<Item = (String, Value)>,
) -> Value {
    match assembled {
        Ok(assembled) => assembled.to_json(),
        Err(e) => {
            tracing::warn!(
                "Showing declared names of '{}' without nesting: {}",
                method.identifier(),
                e
            );

            let mut entries: Map<String, Value> = Map::new();
            for (name, value) in flat {
                match entries.get_mut(&name) {
                    Some(Value::Array(values)) => values.push(value),
                    Some(existing) => {
                        let first = existing.take();
                        *existing = Value::Array(vec![first, value]);
                    }
                    None => {
                        entries.insert(name, value);
                    }
                }
            }
            Value::Object(entries)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use procdoc_model::{ParameterDescriptor, ResultDescriptor};
    use serde_json::json;

    fn method(
        parameters: Vec<ParameterDescriptor>,
        results: Vec<ResultDescriptor>,
    ) -> MethodMetadata {
        MethodMetadata {
            service_name: "Math".to_string(),
            delimiter: "@".to_string(),
            method_name: "sum".to_string(),
            description: Some("Sum two numbers.".to_string()),
            parameters,
            results,
        }
    }

    #[test]
    fn test_math_sum_request() {
        let sum = method(
            vec![
                ParameterDescriptor::new("a", "int"),
                ParameterDescriptor::new("b", "int"),
            ],
            vec![ResultDescriptor::new("int").with_example(5)],
        );

        assert_eq!(
            serde_json::to_string(&request_example(&sum)).unwrap(),
            r#"{"jsonrpc":"2.0","id":1,"method":"Math@sum","params":{"a":"int","b":"int"}}"#
        );
        assert_eq!(
            response_example(&sum),
            json!({"jsonrpc": "2.0", "id": 1, "result": "int"})
        );
    }

    #[test]
    fn test_rendered_text() {
        let sum = method(
            vec![
                ParameterDescriptor::new("a", "int"),
                ParameterDescriptor::new("b", "int"),
            ],
            vec![ResultDescriptor::new("int")],
        );

        let rendered = render_example(&sum);

        insta::assert_snapshot!(rendered.request.plain_text(), @r#"
        {
          "jsonrpc": "2.0",
          "id": 1,
          "method": "Math@sum",
          "params": {
            "a": "int",
            "b": "int"
          }
        }
        "#);
        insta::assert_snapshot!(rendered.response.plain_text(), @r#"
        {
          "jsonrpc": "2.0",
          "id": 1,
          "result": "int"
        }
        "#);
    }

    #[test]
    fn test_no_parameters_no_result() {
        let ping = method(vec![], vec![]);

        assert_eq!(
            request_example(&ping),
            json!({"jsonrpc": "2.0", "id": 1, "method": "Math@sum", "params": {}})
        );
        assert_eq!(response_example(&ping), json!({"jsonrpc": "2.0", "id": 1}));
    }

    #[test]
    fn test_nested_and_repeated_parameters() {
        let search = method(
            vec![
                ParameterDescriptor::new("filter.status", "string"),
                ParameterDescriptor::new("filter.owner", "int"),
                ParameterDescriptor::new("tags.", "string"),
                ParameterDescriptor::new("tags.", "int"),
            ],
            vec![
                ResultDescriptor::new("array"),
                ResultDescriptor::new("int").with_name("total"),
            ],
        );

        assert_eq!(
            request_example(&search)["params"],
            json!({"filter": {"status": "string", "owner": "int"}, "tags": ["string", "int"]})
        );
        assert_eq!(response_example(&search)["result"], json!("array"));
    }

    #[test_log::test]
    fn test_conflicting_names_fall_back_to_flat() {
        let conflicting = method(
            vec![
                ParameterDescriptor::new("tags", "string"),
                ParameterDescriptor::new("tags.", "int"),
                ParameterDescriptor::new("tags.", "float"),
            ],
            vec![],
        );

        assert_eq!(
            request_example(&conflicting)["params"],
            json!({"tags": "string", "tags.": ["int", "float"]})
        );
    }
}
