// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// The syntactic role of a token in serialized JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenClass {
    Key,
    String,
    Number,
    Boolean,
    Null,
    /// Punctuation and whitespace
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub class: TokenClass,
}

/// Text as a sequence of classified spans.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderedText {
    spans: Vec<Span>,
}

impl RenderedText {
    pub fn new() -> Self {
        Self { spans: Vec::new() }
    }

    /// Append a token. Consecutive plain text is merged into one span.
    pub fn push(&mut self, text: impl Into<String>, class: TokenClass) {
        let text = text.into();
        if text.is_empty() {
            return;
        }

        if class == TokenClass::Plain
            && let Some(last) = self.spans.last_mut()
            && last.class == TokenClass::Plain
        {
            last.text.push_str(&text);
            return;
        }

        self.spans.push(Span { text, class });
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// The text without any classification
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}
