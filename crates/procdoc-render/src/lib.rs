// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Human-readable documentation for procdoc routes.
//!
//! Example requests and responses are serialized into classified spans (key, string, number,
//! boolean, null, plain). Spans carry no color; a [`Palette`] is applied by the output adapters
//! in [`output`].

pub mod documentation;
pub mod example;
pub mod highlight;
pub mod output;
pub mod palette;
pub mod span;

pub use documentation::{
    DocumentationPage, MethodDocumentation, PageSettings, build_documentation, document_methods,
};
pub use example::{RenderedExample, render_example, request_example, response_example};
pub use highlight::highlight;
pub use palette::{Color, Palette, PaletteError};
pub use span::{RenderedText, Span, TokenClass};
