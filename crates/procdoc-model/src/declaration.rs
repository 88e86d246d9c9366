// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Declaration tables for service classes.
//!
//! A service class is described by a [`ServiceDeclaration`]: its exposed service name and its
//! methods in declaration order, each carrying a documentation comment and a list of
//! annotations. Reading a declaration never instantiates the service.

use serde::{Deserialize, Serialize};

use crate::descriptor::{ParameterDescriptor, ResultDescriptor};

/// A service class whose public methods are exposed as remote procedures.
pub trait ServiceDeclaration: Send + Sync {
    /// The name of the declaring type, used in diagnostics
    fn type_name(&self) -> &str;

    /// The exposed service name (the RPC method-name prefix).
    ///
    /// Returns `None` when the declaration does not define one, which is a configuration error
    /// reported by the scanner.
    fn service_name(&self) -> Option<&str>;

    /// All methods, in declaration order, including constructors and non-public methods
    fn methods(&self) -> &[MethodDeclaration];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// Metadata attached to a method declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    Param(ParameterDescriptor),
    Result(ResultDescriptor),
    /// Any annotation the introspector does not interpret (e.g. `Deprecated`)
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDeclaration {
    pub name: String,
    pub visibility: Visibility,
    pub constructor: bool,
    /// The raw documentation comment, including its delimiters
    pub doc_comment: Option<String>,
    pub annotations: Vec<Annotation>,
}

impl MethodDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            constructor: false,
            doc_comment: None,
            annotations: Vec::new(),
        }
    }

    pub fn constructor(name: impl Into<String>) -> Self {
        Self {
            constructor: true,
            ..Self::new(name)
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_doc_comment(mut self, doc_comment: impl Into<String>) -> Self {
        self.doc_comment = Some(doc_comment.into());
        self
    }

    pub fn with_param(mut self, param: ParameterDescriptor) -> Self {
        self.annotations.push(Annotation::Param(param));
        self
    }

    pub fn with_result(mut self, result: ResultDescriptor) -> Self {
        self.annotations.push(Annotation::Result(result));
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

/// A statically registered service declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceTable {
    pub type_name: String,
    pub service_name: Option<String>,
    pub methods: Vec<MethodDeclaration>,
}

impl ServiceTable {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            service_name: None,
            methods: Vec::new(),
        }
    }

    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = Some(service_name.into());
        self
    }

    pub fn with_method(mut self, method: MethodDeclaration) -> Self {
        self.methods.push(method);
        self
    }
}

impl ServiceDeclaration for ServiceTable {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn service_name(&self) -> Option<&str> {
        self.service_name.as_deref()
    }

    fn methods(&self) -> &[MethodDeclaration] {
        &self.methods
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_table_builder() {
        let table = ServiceTable::new("MathProcedure")
            .with_service_name("Math")
            .with_method(MethodDeclaration::constructor("__construct"))
            .with_method(
                MethodDeclaration::new("sum")
                    .with_doc_comment("/** Sum two numbers. */")
                    .with_param(ParameterDescriptor::new("a", "int"))
                    .with_result(ResultDescriptor::new("int")),
            );

        assert_eq!(table.service_name(), Some("Math"));
        assert_eq!(table.methods().len(), 2);
        assert!(table.methods()[0].constructor);
        assert_eq!(table.methods()[1].annotations.len(), 2);
    }

    #[test]
    fn test_visibility() {
        let method = MethodDeclaration::new("helper").with_visibility(Visibility::Private);
        assert!(!method.is_public());
        assert!(MethodDeclaration::new("sum").is_public());
    }
}
