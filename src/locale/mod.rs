// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale identifiers.
//!
//! Identifiers are opaque tokens (`fr`, `de-CH`, `pt_BR`, `zh-Hant-TW`) that
//! end up inside file names, so the only hard rule is that they must be a
//! single path component. Whether the primary subtag is a registered
//! language is advisory and only ever produces a warning.

mod iso639;

pub use iso639::{english_name, is_iso639_1};

use crate::error::ValidationError;

/// Reject identifiers that cannot safely be embedded in a file name.
pub fn validate(locale: &str) -> Result<(), ValidationError> {
    let reason = if locale.trim().is_empty() {
        Some("empty")
    } else if locale != locale.trim() {
        Some("surrounding whitespace")
    } else if locale.contains(['/', '\\']) {
        Some("contains a path separator")
    } else if locale.contains("..") || locale.starts_with('.') || locale.ends_with('.') {
        Some("contains a misplaced '.'")
    } else if locale.chars().any(char::is_control) {
        Some("contains control characters")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(ValidationError::InvalidLocale(locale.to_string(), reason)),
        None => Ok(()),
    }
}

/// The language part of an identifier: `de` for `de-CH`, `pt` for `pt_BR`.
pub fn primary_subtag(locale: &str) -> &str {
    locale.split(['-', '_']).next().unwrap_or(locale)
}

/// Whether the identifier names a registered two-letter language.
pub fn is_known_language(locale: &str) -> bool {
    is_iso639_1(&primary_subtag(locale).to_ascii_lowercase())
}

/// Human-readable label, e.g. `de-CH (German)`.
pub fn describe(locale: &str) -> String {
    match english_name(&primary_subtag(locale).to_ascii_lowercase()) {
        Some(name) => format!("{} ({})", locale, name),
        None => locale.to_string(),
    }
}

/// Split identifiers into the ones to process and the repeats to ignore.
///
/// Repeats are compared case-insensitively: `fr` and `FR` name the same
/// file on case-insensitive filesystems. The first spelling wins.
pub fn dedup(locales: &[String]) -> (Vec<String>, Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    let (kept, repeated): (Vec<String>, Vec<String>) = locales
        .iter()
        .cloned()
        .partition(|locale| seen.insert(locale.to_lowercase()));
    (kept, repeated)
}
