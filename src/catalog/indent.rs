// SPDX-License-Identifier: PMPL-1.0-or-later

//! Indentation settings for written catalogs.
//!
//! Mirrors the usual JSON pretty-printer contract: a number means that many
//! spaces (capped at 10), a string is used verbatim (first 10 characters),
//! and an empty indent produces compact output.

use serde::Deserialize;
use std::fmt;

const MAX_INDENT: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawIndent")]
pub enum Indent {
    #[default]
    Tab,
    Spaces(usize),
    Literal(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIndent {
    Width(f64),
    Text(String),
}

impl From<RawIndent> for Indent {
    fn from(raw: RawIndent) -> Self {
        match raw {
            RawIndent::Width(width) => Indent::from_width(width),
            RawIndent::Text(text) => Indent::from_literal(&text),
        }
    }
}

impl Indent {
    /// Parse an indent given on the command line.
    ///
    /// Accepts `tab`, an escaped `\t`, a space count, or any literal string.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("tab") || value == "\\t" {
            return Indent::Tab;
        }
        match value.trim().parse::<i64>() {
            Ok(width) => Indent::Spaces(width.clamp(0, MAX_INDENT as i64) as usize),
            _ => Indent::from_literal(value),
        }
    }

    /// Fractions are floored; anything below one space is compact.
    fn from_width(width: f64) -> Self {
        if width.is_nan() || width < 1.0 {
            return Indent::Spaces(0);
        }
        Indent::Spaces(width.floor().min(MAX_INDENT as f64) as usize)
    }

    fn from_literal(text: &str) -> Self {
        if text == "\t" {
            return Indent::Tab;
        }
        Indent::Literal(text.chars().take(MAX_INDENT).collect())
    }

    /// The bytes emitted once per nesting level.
    pub fn as_bytes(&self) -> Vec<u8> {
        match self {
            Indent::Tab => b"\t".to_vec(),
            Indent::Spaces(width) => vec![b' '; *width],
            Indent::Literal(text) => text.as_bytes().to_vec(),
        }
    }

    /// An empty indent means compact, single-line output.
    pub fn is_compact(&self) -> bool {
        match self {
            Indent::Tab => false,
            Indent::Spaces(width) => *width == 0,
            Indent::Literal(text) => text.is_empty(),
        }
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indent::Tab => write!(f, "tab"),
            Indent::Spaces(width) => write!(f, "{} space(s)", width),
            Indent::Literal(text) => write!(f, "{:?}", text),
        }
    }
}
