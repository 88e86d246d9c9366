// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Summary extraction from documentation comments.
//!
//! Accepted forms:
//! - block comments (`/** ... */`), with an optional leading `*` on each line
//! - line comments (`/// ...`)
//! - plain text (already stripped of comment markers)
//!
//! The summary is the text before the first blank line, ending early at a line that ends with
//! a period. Tag lines (`@param ...`) end the summary as well. Lines of a multi-line summary are
//! joined with a single space.

use crate::error::DocCommentError;

pub fn summary(comment: &str) -> Result<Option<String>, DocCommentError> {
    let body = strip_delimiters(comment)?;

    let mut lines: Vec<&str> = Vec::new();
    for line in body.lines().map(strip_line_marker) {
        if line.starts_with('@') {
            break;
        }
        if line.is_empty() {
            if lines.is_empty() {
                continue;
            }
            break;
        }

        lines.push(line);

        if line.ends_with('.') {
            break;
        }
    }

    if lines.is_empty() {
        Ok(None)
    } else {
        Ok(Some(lines.join(" ")))
    }
}

fn strip_delimiters(comment: &str) -> Result<String, DocCommentError> {
    let trimmed = comment.trim();

    if let Some(rest) = trimmed.strip_prefix("/**") {
        // `/**/` is an empty block comment, not a documentation comment
        if rest == "/" {
            return Err(DocCommentError::NotADocComment);
        }
        let inner = rest
            .strip_suffix("*/")
            .ok_or(DocCommentError::Unterminated)?;
        Ok(inner.to_string())
    } else if trimmed.starts_with("/*") {
        Err(DocCommentError::NotADocComment)
    } else if trimmed.starts_with("///") {
        Ok(trimmed
            .lines()
            .map(|line| line.trim_start().trim_start_matches('/'))
            .collect::<Vec<_>>()
            .join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}

fn strip_line_marker(line: &str) -> &str {
    let line = line.trim();
    match line.strip_prefix('*') {
        Some(rest) => rest.trim(),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_block() {
        assert_eq!(
            summary("/** Sum two numbers. */").unwrap(),
            Some("Sum two numbers.".to_string())
        );
    }

    #[test]
    fn test_multi_line_block_with_tags() {
        let comment = r#"
            /**
             * Execute the procedure.
             *
             * Adds both operands and returns the total.
             *
             * @param int $a
             * @return int
             */"#;

        assert_eq!(
            summary(comment).unwrap(),
            Some("Execute the procedure.".to_string())
        );
    }

    #[test]
    fn test_summary_spanning_lines() {
        let comment = "/**\n * Returns the list of\n * active users\n *\n * More text.\n */";
        assert_eq!(
            summary(comment).unwrap(),
            Some("Returns the list of active users".to_string())
        );
    }

    #[test]
    fn test_period_ends_summary() {
        let comment = "/**\n * First sentence.\n * Second sentence on the next line.\n */";
        assert_eq!(
            summary(comment).unwrap(),
            Some("First sentence.".to_string())
        );
    }

    #[test]
    fn test_only_tags() {
        assert_eq!(summary("/**\n * @return int\n */").unwrap(), None);
    }

    #[test]
    fn test_line_comments_and_plain_text() {
        assert_eq!(
            summary("/// Lists users.\n/// Paginated.").unwrap(),
            Some("Lists users.".to_string())
        );
        assert_eq!(
            summary("Plain description").unwrap(),
            Some("Plain description".to_string())
        );
        assert_eq!(summary("   ").unwrap(), None);
    }

    #[test]
    fn test_malformed_comments() {
        assert_eq!(
            summary("/** never closed"),
            Err(DocCommentError::Unterminated)
        );
        assert_eq!(
            summary("/* regular comment */"),
            Err(DocCommentError::NotADocComment)
        );
        assert_eq!(summary("/**/"), Err(DocCommentError::NotADocComment));
    }
}
