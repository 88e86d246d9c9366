// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Colors per token class.
//!
//! | class   | default   |
//! |---------|-----------|
//! | key     | `#333333` |
//! | string  | `#dd1144` |
//! | number  | `#009999` |
//! | boolean | `#999988` |
//! | null    | `#808080` |
//! | plain   | `#000000` |

use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

use crate::span::TokenClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum PaletteError {
    #[error("Invalid color '{0}'. Expected '#rgb' or '#rrggbb'")]
    InvalidColor(String),
}

/// Accepts `#rgb` and `#rrggbb`
impl FromStr for Color {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PaletteError::InvalidColor(s.to_string());

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());

        match hex.len() {
            3 => {
                let expand = |i: usize| channel(&hex[i..i + 1].repeat(2));
                Ok(Color::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Color::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub key: Color,
    pub string: Color,
    pub number: Color,
    pub boolean: Color,
    pub null: Color,
    pub plain: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            key: Color::rgb(0x33, 0x33, 0x33),
            string: Color::rgb(0xdd, 0x11, 0x44),
            number: Color::rgb(0x00, 0x99, 0x99),
            boolean: Color::rgb(0x99, 0x99, 0x88),
            null: Color::rgb(0x80, 0x80, 0x80),
            plain: Color::rgb(0x00, 0x00, 0x00),
        }
    }
}

impl Palette {
    pub fn color(&self, class: TokenClass) -> Color {
        match class {
            TokenClass::Key => self.key,
            TokenClass::String => self.string,
            TokenClass::Number => self.number,
            TokenClass::Boolean => self.boolean,
            TokenClass::Null => self.null,
            TokenClass::Plain => self.plain,
        }
    }

    pub fn with_color(mut self, class: TokenClass, color: Color) -> Self {
        let slot = match class {
            TokenClass::Key => &mut self.key,
            TokenClass::String => &mut self.string,
            TokenClass::Number => &mut self.number,
            TokenClass::Boolean => &mut self.boolean,
            TokenClass::Null => &mut self.null,
            TokenClass::Plain => &mut self.plain,
        };
        *slot = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_colors() {
        assert_eq!("#d14".parse::<Color>(), Ok(Color::rgb(0xdd, 0x11, 0x44)));
        assert_eq!("#009999".parse::<Color>(), Ok(Color::rgb(0x00, 0x99, 0x99)));
        assert_eq!("#FFFFFF".parse::<Color>(), Ok(Color::rgb(0xff, 0xff, 0xff)));
    }

    #[test]
    fn test_invalid_colors() {
        for input in ["333", "#33", "#3333", "#ggg", "#+1+1+1", "#ééé"] {
            assert_eq!(
                input.parse::<Color>(),
                Err(PaletteError::InvalidColor(input.to_string())),
                "input: {input}"
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::rgb(0xdd, 0x11, 0x44).to_string(), "#dd1144");
    }

    #[test]
    fn test_override_one_class() {
        let palette = Palette::default().with_color(TokenClass::Key, Color::rgb(1, 2, 3));

        assert_eq!(palette.color(TokenClass::Key), Color::rgb(1, 2, 3));
        assert_eq!(
            palette.color(TokenClass::String),
            Palette::default().string
        );
    }
}
