// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Normalized descriptors for method parameters and results.
//!
//! These records are serialized as-is into the service descriptor document, so the field names
//! and the omission rules here define the wire shape (`optional` only when true, `default` and
//! `example` only when declared).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One declared input parameter of a method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// The parameter name. May be a dotted path (`filter.status`) or end with `.` to declare a
    /// repeated parameter (`tags.`).
    pub name: String,
    /// The declared type, as written by the service author (e.g. "int", "string")
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
    /// The default value. `None` means no default was declared, while `Some(Value::Null)` is an
    /// explicit null default.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Value>,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            optional: false,
            default: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// One declared facet of a method's return value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultDescriptor {
    /// Dotted path of the facet inside the result, when the result is described field by field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub example: Option<Value>,
}

impl ResultDescriptor {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            name: None,
            type_name: type_name.into(),
            example: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_example(mut self, example: impl Into<Value>) -> Self {
        self.example = Some(example.into());
        self
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

// A field that is present maps to `Some`, even when its value is `null`. Combined with
// `#[serde(default)]`, a missing field maps to `None`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
