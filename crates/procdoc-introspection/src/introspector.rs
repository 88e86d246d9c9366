// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use procdoc_model::{Annotation, MethodDeclaration, ParameterDescriptor, ResultDescriptor};

use crate::doc_comment;

/// What a single method declaration says about itself.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodIntrospection {
    pub description: Option<String>,
    pub parameters: Vec<ParameterDescriptor>,
    pub results: Vec<ResultDescriptor>,
}

/// Extract the summary, parameters and results of a method declaration.
///
/// A malformed documentation comment is logged and yields no description.
pub fn introspect(method: &MethodDeclaration) -> MethodIntrospection {
    let description = method
        .doc_comment
        .as_deref()
        .and_then(|comment| match doc_comment::summary(comment) {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!(
                    "Ignoring documentation comment of method '{}': {}",
                    method.name,
                    e
                );
                None
            }
        });

    let parameters = method
        .annotations
        .iter()
        .filter_map(|annotation| match annotation {
            Annotation::Param(param) => Some(param.clone()),
            _ => None,
        })
        .collect();

    let results = method
        .annotations
        .iter()
        .filter_map(|annotation| match annotation {
            Annotation::Result(result) => Some(result.clone()),
            _ => None,
        })
        .collect();

    MethodIntrospection {
        description,
        parameters,
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_annotations_in_declaration_order() {
        let method = MethodDeclaration::new("search")
            .with_doc_comment("/** Search items. */")
            .with_param(ParameterDescriptor::new("query", "string"))
            .with_annotation(Annotation::Other("Deprecated".to_string()))
            .with_result(ResultDescriptor::new("array"))
            .with_param(ParameterDescriptor::new("limit", "int").optional().with_default(10));

        let introspection = introspect(&method);

        assert_eq!(introspection.description.as_deref(), Some("Search items."));
        assert_eq!(
            introspection.parameters,
            vec![
                ParameterDescriptor::new("query", "string"),
                ParameterDescriptor::new("limit", "int").optional().with_default(10),
            ]
        );
        assert_eq!(introspection.results, vec![ResultDescriptor::new("array")]);
    }

    #[test]
    fn test_bare_method() {
        let introspection = introspect(&MethodDeclaration::new("ping"));

        assert_eq!(introspection.description, None);
        assert!(introspection.parameters.is_empty());
        assert!(introspection.results.is_empty());
    }

    #[test]
    fn test_malformed_doc_comment_degrades() {
        let method = MethodDeclaration::new("ping")
            .with_doc_comment("/** unterminated")
            .with_result(ResultDescriptor::new("string").with_example("pong"));

        let introspection = introspect(&method);

        assert_eq!(introspection.description, None);
        assert_eq!(introspection.results.len(), 1);
    }
}
