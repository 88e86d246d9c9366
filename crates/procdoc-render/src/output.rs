// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Display adapters for [`RenderedText`].

use crate::palette::{Color, Palette};
use crate::span::{RenderedText, TokenClass};

/// HTML fragment with one colored `<span>` per token.
///
/// Whitespace is kept as-is, so the fragment should be placed in an element that preserves it
/// (such as `<pre>`). Plain text takes the palette's plain color from the enclosing `<code>`.
pub fn to_html(text: &RenderedText, palette: &Palette) -> String {
    let mut html = format!("<code style=\"color: {}\">", palette.plain);

    for span in text.spans() {
        let escaped = escape_html(&span.text);
        match span.class {
            TokenClass::Plain => html.push_str(&escaped),
            class => html.push_str(&format!(
                "<span style=\"color: {}\">{}</span>",
                palette.color(class),
                escaped
            )),
        }
    }

    html.push_str("</code>");
    html
}

/// Terminal text using color escapes. Plain text keeps the terminal's own color.
///
/// With `color` off the result is the plain text.
pub fn to_ansi(text: &RenderedText, palette: &Palette, color: bool) -> String {
    text.spans()
        .iter()
        .map(|span| match span.class {
            TokenClass::Plain => span.text.clone(),
            class => paint(&span.text, palette.color(class), color),
        })
        .collect()
}

/// Wrap `text` in a true-color foreground escape, or return it unchanged when `enabled` is off.
///
/// Unlike `colored`'s `Display`, this ignores the global `colored::control` switches. Colors are
/// 24-bit when `COLORTERM` advertises true color, and the closest basic color otherwise.
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if !enabled || text.is_empty() {
        return text.to_string();
    }

    let fg = colored::Color::TrueColor {
        r: color.r,
        g: color.g,
        b: color.b,
    };
    format!("\x1b[{}m{}\x1b[0m", fg.to_fg_str(), text)
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::highlight;
    use serde_json::json;

    #[test]
    fn test_html() {
        let text = highlight(&json!({"a": "<b>", "n": 1}));

        insta::assert_snapshot!(to_html(&text, &Palette::default()), @r#"
        <code style="color: #000000">{
          <span style="color: #333333">&quot;a&quot;</span>: <span style="color: #dd1144">&quot;&lt;b&gt;&quot;</span>,
          <span style="color: #333333">&quot;n&quot;</span>: <span style="color: #009999">1</span>
        }</code>
        "#);
    }

    #[test]
    fn test_html_uses_palette() {
        let palette =
            Palette::default().with_color(TokenClass::Null, Color::rgb(0xab, 0xcd, 0xef));
        let html = to_html(&highlight(&json!(null)), &palette);

        assert_eq!(
            html,
            "<code style=\"color: #000000\"><span style=\"color: #abcdef\">null</span></code>"
        );
    }

    // Removes `ESC [ ... m` sequences
    fn strip_ansi(text: &str) -> String {
        let mut stripped = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                stripped.push(c);
            }
        }
        stripped
    }

    #[test]
    fn test_ansi() {
        let text = highlight(&json!({"ok": true, "n": null}));
        let ansi = to_ansi(&text, &Palette::default(), true);

        assert!(ansi.starts_with("{\n  \u{1b}["));
        assert!(ansi.contains("\"ok\"\u{1b}[0m"));
        assert_eq!(strip_ansi(&ansi), text.plain_text());
    }

    #[test]
    fn test_ansi_without_color() {
        let text = highlight(&json!({"ok": true}));

        assert_eq!(to_ansi(&text, &Palette::default(), false), text.plain_text());
        assert_eq!(paint("x", Color::rgb(1, 2, 3), false), "x");
        let painted = paint("x", Color::rgb(1, 2, 3), true);
        assert!(painted.starts_with('\u{1b}'));
        assert_eq!(strip_ansi(&painted), "x");
    }
}
