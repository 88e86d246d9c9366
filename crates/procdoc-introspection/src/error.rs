// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt::Display;

use thiserror::Error;

/// Errors that abort a scan.
#[derive(Error, Debug, PartialEq)]
pub enum IntrospectionError {
    #[error("Service class '{type_name}' does not declare a service name")]
    MissingServiceName { type_name: String },
}

/// A documentation comment that could not be reduced to a summary.
#[derive(Error, Debug, PartialEq)]
pub enum DocCommentError {
    #[error("Documentation comment is not terminated with '*/'")]
    Unterminated,

    #[error("Block comment is not a documentation comment (expected '/**')")]
    NotADocComment,
}

/// A dotted name that cannot be merged into the tree built so far.
#[derive(Error, Debug, PartialEq)]
pub enum AssembleError {
    #[error("Cannot write {incoming} at '{path}': it already holds {existing}")]
    PathConflict {
        path: String,
        existing: NodeKind,
        incoming: NodeKind,
    },

    #[error("Name '{name}' contains an empty path segment")]
    EmptySegment { name: String },

    #[error("Index {index} at '{path}' is past the end of a sequence of length {len}")]
    IndexOutOfRange {
        path: String,
        index: usize,
        len: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Scalar,
    Sequence,
    Mapping,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Scalar => write!(f, "a scalar"),
            NodeKind::Sequence => write!(f, "a sequence"),
            NodeKind::Mapping => write!(f, "a mapping"),
        }
    }
}
