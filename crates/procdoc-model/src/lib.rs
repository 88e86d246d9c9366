// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Data model shared by the procdoc crates.
//!
//! This crate provides:
//! - Parameter and result descriptors attached to RPC methods
//! - Declaration tables that describe service classes without instantiating them
//! - The procedure set and route supplied by the routing layer
//! - Per-method metadata produced by a scan

pub mod declaration;
pub mod descriptor;
pub mod metadata;
pub mod procedure;

pub use declaration::{Annotation, MethodDeclaration, ServiceDeclaration, ServiceTable, Visibility};
pub use descriptor::{ParameterDescriptor, ResultDescriptor};
pub use metadata::MethodMetadata;
pub use procedure::{DEFAULT_DELIMITER, ProcedureSet, Route};
