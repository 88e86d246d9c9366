// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Pretty-print a JSON value into classified spans.
//!
//! The layout matches `serde_json::to_string_pretty` (two-space indentation), so the plain text
//! of the result is byte-identical to it. Tokens are classified from their position in the
//! value tree: a string in key position is a key, a string in value position is a string no
//! matter what it contains.

use serde_json::Value;

use crate::span::{RenderedText, TokenClass};

const INDENT: &str = "  ";

pub fn highlight(value: &Value) -> RenderedText {
    let mut out = RenderedText::new();
    write_value(&mut out, value, 0);
    out
}

fn write_value(out: &mut RenderedText, value: &Value, depth: usize) {
    match value {
        // `Value`'s Display is compact JSON, which for scalars is exactly the token text
        Value::Null => out.push(value.to_string(), TokenClass::Null),
        Value::Bool(_) => out.push(value.to_string(), TokenClass::Boolean),
        Value::Number(_) => out.push(value.to_string(), TokenClass::Number),
        Value::String(_) => out.push(value.to_string(), TokenClass::String),
        Value::Array(items) => {
            if items.is_empty() {
                out.push("[]", TokenClass::Plain);
                return;
            }

            out.push("[", TokenClass::Plain);
            for (index, item) in items.iter().enumerate() {
                start_entry(out, index, depth + 1);
                write_value(out, item, depth + 1);
            }
            out.push(format!("\n{}]", INDENT.repeat(depth)), TokenClass::Plain);
        }
        Value::Object(map) => {
            if map.is_empty() {
                out.push("{}", TokenClass::Plain);
                return;
            }

            out.push("{", TokenClass::Plain);
            for (index, (key, item)) in map.iter().enumerate() {
                start_entry(out, index, depth + 1);
                out.push(Value::String(key.clone()).to_string(), TokenClass::Key);
                out.push(": ", TokenClass::Plain);
                write_value(out, item, depth + 1);
            }
            out.push(format!("\n{}}}", INDENT.repeat(depth)), TokenClass::Plain);
        }
    }
}

fn start_entry(out: &mut RenderedText, index: usize, depth: usize) {
    let separator = if index == 0 { "\n" } else { ",\n" };
    out.push(
        format!("{separator}{}", INDENT.repeat(depth)),
        TokenClass::Plain,
    );
}
