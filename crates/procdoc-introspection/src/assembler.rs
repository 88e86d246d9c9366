// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Merge flat, dotted descriptor names into a nested value.
//!
//! Names are split on `.`:
//! - `filter.status` sets `status` inside the `filter` mapping (last write wins)
//! - `tags.` (trailing dot) appends to the sequence at `tags`
//! - a numeric segment addressing an existing sequence indexes into it (`items.0.name`), and an
//!   index equal to the sequence length appends a new element. Only canonical decimal segments
//!   are indexes: `+1` or `01` under a sequence is a conflict, not element 1.
//!
//! A node only accepts writes of its own kind: scalars are overwritten by scalars, sequences are
//! appended to or indexed, mappings are descended into. Anything else is rejected with
//! [`AssembleError::PathConflict`] rather than silently replacing data.

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde_json::Value;

use procdoc_model::{ParameterDescriptor, ResultDescriptor};

use crate::error::{AssembleError, NodeKind};

#[derive(Debug, Clone, PartialEq)]
pub enum AssembledValue {
    Leaf(Value),
    Sequence(Vec<AssembledValue>),
    Mapping(IndexMap<String, AssembledValue>),
}

impl AssembledValue {
    pub fn mapping() -> Self {
        AssembledValue::Mapping(IndexMap::new())
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            AssembledValue::Leaf(_) => NodeKind::Scalar,
            AssembledValue::Sequence(_) => NodeKind::Sequence,
            AssembledValue::Mapping(_) => NodeKind::Mapping,
        }
    }

    /// Follow a dotted path (without trailing dot) to a node
    pub fn get(&self, path: &str) -> Option<&AssembledValue> {
        path.split('.')
            .try_fold(self, |node, segment| match node {
                AssembledValue::Mapping(map) => map.get(segment),
                AssembledValue::Sequence(items) => {
                    parse_index(segment).and_then(|i| items.get(i))
                }
                AssembledValue::Leaf(_) => None,
            })
    }

    pub fn to_json(&self) -> Value {
        match self {
            AssembledValue::Leaf(value) => value.clone(),
            AssembledValue::Sequence(items) => {
                Value::Array(items.iter().map(AssembledValue::to_json).collect())
            }
            AssembledValue::Mapping(map) => Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

/// Accumulates `(name, value)` entries into a tree rooted at a mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembler {
    root: AssembledValue,
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new()
    }
}

impl Assembler {
    pub fn new() -> Self {
        Self {
            root: AssembledValue::mapping(),
        }
    }

    pub fn insert(&mut self, name: &str, value: Value) -> Result<(), AssembleError> {
        let (path, append) = match name.strip_suffix('.') {
            Some(path) => (path, true),
            None => (name, false),
        };

        let segments: Vec<&str> = path.split('.').collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(AssembleError::EmptySegment {
                name: name.to_string(),
            });
        }

        let Some((last, parents)) = segments.split_last() else {
            return Err(AssembleError::EmptySegment {
                name: name.to_string(),
            });
        };

        let mut node = &mut self.root;
        for (depth, segment) in parents.iter().enumerate() {
            node = descend(node, segment, &segments[..=depth])?;
        }

        place(node, last, value, append, &segments)
    }

    pub fn finish(self) -> AssembledValue {
        self.root
    }
}

/// Assemble `(name, value)` entries in order.
pub fn assemble<'a, I>(entries: I) -> Result<AssembledValue, AssembleError>
where
    I: IntoIterator<Item = (&'a str, Value)>,
{
    let mut assembler = Assembler::new();
    for (name, value) in entries {
        assembler.insert(name, value)?;
    }
    Ok(assembler.finish())
}

/// The request-shaped view of a parameter list: each name maps to its declared type.
pub fn assemble_parameters(
    parameters: &[ParameterDescriptor],
) -> Result<AssembledValue, AssembleError> {
    assemble(
        parameters
            .iter()
            .map(|param| (param.name.as_str(), Value::String(param.type_name.clone()))),
    )
}

/// The response-shaped view of a result list. Unnamed results are keyed by their position.
pub fn assemble_results(results: &[ResultDescriptor]) -> Result<AssembledValue, AssembleError> {
    let names: Vec<String> = results
        .iter()
        .enumerate()
        .map(|(index, result)| result.name.clone().unwrap_or_else(|| index.to_string()))
        .collect();

    assemble(
        names
            .iter()
            .zip(results)
            .map(|(name, result)| (name.as_str(), Value::String(result.type_name.clone()))),
    )
}

fn descend<'a>(
    node: &'a mut AssembledValue,
    segment: &str,
    path: &[&str],
) -> Result<&'a mut AssembledValue, AssembleError> {
    match node {
        AssembledValue::Mapping(map) => Ok(map
            .entry(segment.to_string())
            .or_insert_with(AssembledValue::mapping)),
        AssembledValue::Sequence(items) => {
            let index = sequence_index(segment, path, NodeKind::Mapping)?;
            let len = items.len();
            if index == len {
                items.push(AssembledValue::mapping());
            }
            items
                .get_mut(index)
                .ok_or_else(|| AssembleError::IndexOutOfRange {
                    path: path.join("."),
                    index,
                    len,
                })
        }
        AssembledValue::Leaf(_) => Err(AssembleError::PathConflict {
            path: parent_path(path),
            existing: NodeKind::Scalar,
            incoming: NodeKind::Mapping,
        }),
    }
}

fn place(
    node: &mut AssembledValue,
    segment: &str,
    value: Value,
    append: bool,
    path: &[&str],
) -> Result<(), AssembleError> {
    let incoming = if append {
        NodeKind::Sequence
    } else {
        NodeKind::Scalar
    };

    match node {
        AssembledValue::Mapping(map) => match map.entry(segment.to_string()) {
            Entry::Occupied(mut entry) => merge_into(entry.get_mut(), value, append, path),
            Entry::Vacant(entry) => {
                entry.insert(new_node(value, append));
                Ok(())
            }
        },
        AssembledValue::Sequence(items) => {
            let index = sequence_index(segment, path, incoming)?;
            let len = items.len();
            if index == len {
                items.push(new_node(value, append));
                return Ok(());
            }
            match items.get_mut(index) {
                Some(existing) => merge_into(existing, value, append, path),
                None => Err(AssembleError::IndexOutOfRange {
                    path: path.join("."),
                    index,
                    len,
                }),
            }
        }
        AssembledValue::Leaf(_) => Err(AssembleError::PathConflict {
            path: parent_path(path),
            existing: NodeKind::Scalar,
            incoming: NodeKind::Mapping,
        }),
    }
}

fn merge_into(
    existing: &mut AssembledValue,
    value: Value,
    append: bool,
    path: &[&str],
) -> Result<(), AssembleError> {
    match (existing, append) {
        (AssembledValue::Sequence(items), true) => {
            items.push(AssembledValue::Leaf(value));
            Ok(())
        }
        (AssembledValue::Leaf(current), false) => {
            *current = value;
            Ok(())
        }
        (existing, append) => Err(AssembleError::PathConflict {
            path: path.join("."),
            existing: existing.kind(),
            incoming: if append {
                NodeKind::Sequence
            } else {
                NodeKind::Scalar
            },
        }),
    }
}

fn new_node(value: Value, append: bool) -> AssembledValue {
    if append {
        AssembledValue::Sequence(vec![AssembledValue::Leaf(value)])
    } else {
        AssembledValue::Leaf(value)
    }
}

fn sequence_index(
    segment: &str,
    path: &[&str],
    incoming: NodeKind,
) -> Result<usize, AssembleError> {
    parse_index(segment).ok_or_else(|| AssembleError::PathConflict {
        path: parent_path(path),
        existing: NodeKind::Sequence,
        incoming,
    })
}

// Digits only, without leading zeros
fn parse_index(segment: &str) -> Option<usize> {
    let canonical = segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));

    if canonical { segment.parse().ok() } else { None }
}

// The path of the node that holds the last segment
fn parent_path(path: &[&str]) -> String {
    path[..path.len().saturating_sub(1)].join(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entries(pairs: &[(&'static str, Value)]) -> Vec<(&'static str, Value)> {
        pairs.to_vec()
    }

    #[test]
    fn test_flat_names_keep_order() {
        let assembled = assemble(entries(&[
            ("b", json!("int")),
            ("a", json!("int")),
            ("c", json!("string")),
        ]))
        .unwrap();

        let keys: Vec<String> = match &assembled {
            AssembledValue::Mapping(map) => map.keys().cloned().collect(),
            other => panic!("expected a mapping, got {other:?}"),
        };
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_array_append() {
        let assembled =
            assemble(entries(&[("tags.", json!("a")), ("tags.", json!("b"))])).unwrap();

        assert_eq!(assembled.to_json(), json!({"tags": ["a", "b"]}));
    }

    #[test]
    fn test_scalar_overwrite_keeps_position() {
        let assembled = assemble(entries(&[
            ("x", json!(1)),
            ("y", json!(0)),
            ("x", json!(2)),
        ]))
        .unwrap();

        assert_eq!(
            serde_json::to_string(&assembled.to_json()).unwrap(),
            r#"{"x":2,"y":0}"#
        );
    }

    #[test]
    fn test_dotted_nesting() {
        let assembled = assemble(entries(&[
            ("filter.status", json!("string")),
            ("limit", json!("int")),
            ("filter.owner.id", json!("int")),
            ("filter.labels.", json!("string")),
        ]))
        .unwrap();

        assert_eq!(
            assembled.to_json(),
            json!({
                "filter": {
                    "status": "string",
                    "owner": {"id": "int"},
                    "labels": ["string"]
                },
                "limit": "int"
            })
        );
        assert_eq!(
            assembled.get("filter.owner.id"),
            Some(&AssembledValue::Leaf(json!("int")))
        );
    }

    #[test]
    fn test_indexing_into_sequences() {
        let assembled = assemble(entries(&[
            ("items.0.name", json!("string")),
            ("items.0.price", json!("float")),
            ("items.1.name", json!("string")),
        ]))
        .unwrap();
        // The first segment creates a mapping, so numeric keys stay mapping keys
        assert_eq!(
            assembled.to_json(),
            json!({"items": {"0": {"name": "string", "price": "float"}, "1": {"name": "string"}}})
        );

        let assembled = assemble(entries(&[
            ("rows.", json!("first")),
            ("rows.1", json!("second")),
            ("rows.0", json!("replaced")),
        ]))
        .unwrap();
        assert_eq!(assembled.to_json(), json!({"rows": ["replaced", "second"]}));
        assert_eq!(
            assembled.get("rows.1"),
            Some(&AssembledValue::Leaf(json!("second")))
        );
    }

    #[test]
    fn test_non_canonical_index_segments() {
        for segment in ["+1", "01", "-0", "1e0"] {
            let name = format!("rows.{segment}");
            let mut assembler = Assembler::new();
            assembler.insert("rows.", json!("a")).unwrap();
            assembler.insert("rows.", json!("b")).unwrap();

            assert_eq!(
                assembler.insert(&name, json!("c")),
                Err(AssembleError::PathConflict {
                    path: "rows".to_string(),
                    existing: NodeKind::Sequence,
                    incoming: NodeKind::Scalar
                }),
                "name: {name}"
            );
            assert_eq!(
                assembler.finish().to_json(),
                json!({"rows": ["a", "b"]}),
                "name: {name}"
            );
        }

        let assembled = assemble(entries(&[("rows.", json!("a")), ("rows.0", json!("b"))]));
        assert_eq!(assembled.unwrap().get("rows.00"), None);
    }

    #[test]
    fn test_index_out_of_range() {
        let result = assemble(entries(&[("rows.", json!("a")), ("rows.5", json!("b"))]));

        assert_eq!(
            result,
            Err(AssembleError::IndexOutOfRange {
                path: "rows.5".to_string(),
                index: 5,
                len: 1
            })
        );
    }

    #[test]
    fn test_scalar_then_array_conflict() {
        let result = assemble(entries(&[("tags", json!("string")), ("tags.", json!("a"))]));

        assert_eq!(
            result,
            Err(AssembleError::PathConflict {
                path: "tags".to_string(),
                existing: NodeKind::Scalar,
                incoming: NodeKind::Sequence
            })
        );
    }

    #[test]
    fn test_array_then_scalar_conflict() {
        let result = assemble(entries(&[("tags.", json!("a")), ("tags", json!("string"))]));

        assert_eq!(
            result,
            Err(AssembleError::PathConflict {
                path: "tags".to_string(),
                existing: NodeKind::Sequence,
                incoming: NodeKind::Scalar
            })
        );
    }

    #[test]
    fn test_scalar_then_nested_conflict() {
        let result = assemble(entries(&[
            ("filter", json!("object")),
            ("filter.status", json!("string")),
        ]));

        assert_eq!(
            result,
            Err(AssembleError::PathConflict {
                path: "filter".to_string(),
                existing: NodeKind::Scalar,
                incoming: NodeKind::Mapping
            })
        );

        let result = assemble(entries(&[
            ("filter.status", json!("string")),
            ("filter", json!("object")),
        ]));

        assert_eq!(
            result,
            Err(AssembleError::PathConflict {
                path: "filter".to_string(),
                existing: NodeKind::Mapping,
                incoming: NodeKind::Scalar
            })
        );
    }

    #[test]
    fn test_empty_segments() {
        for name in ["", ".", "a..b", ".a", "a.."] {
            let mut assembler = Assembler::new();
            assert_eq!(
                assembler.insert(name, json!("int")),
                Err(AssembleError::EmptySegment {
                    name: name.to_string()
                }),
                "name: {name:?}"
            );
        }
    }

    #[test]
    fn test_determinism_and_independent_reordering() {
        let forward = entries(&[
            ("user.name", json!("string")),
            ("tags.", json!("a")),
            ("limit", json!("int")),
            ("tags.", json!("b")),
        ]);
        let reordered = entries(&[
            ("limit", json!("int")),
            ("tags.", json!("a")),
            ("user.name", json!("string")),
            ("tags.", json!("b")),
        ]);

        let first = assemble(forward.clone()).unwrap();
        let second = assemble(forward).unwrap();
        assert_eq!(first, second);

        let other = assemble(reordered).unwrap();
        for path in ["user.name", "tags", "limit"] {
            assert_eq!(first.get(path), other.get(path), "path: {path}");
        }
    }

    #[test]
    fn test_assemble_parameters_and_results() {
        let parameters = vec![
            ParameterDescriptor::new("a", "int"),
            ParameterDescriptor::new("b", "int"),
        ];
        assert_eq!(
            assemble_parameters(&parameters).unwrap().to_json(),
            json!({"a": "int", "b": "int"})
        );

        let results = vec![
            ResultDescriptor::new("int").with_name("user.id"),
            ResultDescriptor::new("string").with_name("user.email"),
            ResultDescriptor::new("bool"),
        ];
        assert_eq!(
            assemble_results(&results).unwrap().to_json(),
            json!({"user": {"id": "int", "email": "string"}, "2": "bool"})
        );
    }
}
