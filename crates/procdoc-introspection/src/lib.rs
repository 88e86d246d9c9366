// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! RPC introspection for procdoc.
//!
//! This crate provides types and utilities for:
//! - Scanning service declarations into per-method metadata
//! - Assembling dotted parameter names into nested values
//! - Building the SMD service descriptor document for a route
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use procdoc_model::{MethodDeclaration, ParameterDescriptor, ProcedureSet, Route, ServiceTable};
//! use procdoc_introspection::build_service_descriptor;
//!
//! let math = ServiceTable::new("MathProcedure")
//!     .with_service_name("Math")
//!     .with_method(MethodDeclaration::new("sum").with_param(ParameterDescriptor::new("a", "int")));
//!
//! let route = Route::new("api/v1/endpoint", ProcedureSet::new(vec![Arc::new(math)]));
//! let document = build_service_descriptor(&route).unwrap();
//! ```

pub mod assembler;
pub mod conversion;
pub mod doc_comment;
pub mod error;
pub mod introspector;
pub mod scanner;
pub mod smd;

// Re-export commonly used types
pub use assembler::{AssembledValue, Assembler, assemble_parameters, assemble_results};
pub use conversion::{build_service_descriptor, to_service_descriptor};
pub use error::{AssembleError, DocCommentError, IntrospectionError};
pub use introspector::{MethodIntrospection, introspect};
pub use scanner::scan;
pub use smd::ServiceDescriptorDocument;
