// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run-level validation errors.
//!
//! These are detected before any catalog is written and abort the whole
//! run. Per-locale I/O faults are carried as `anyhow::Error` instead, since
//! they only ever surface as a message in the final [`RunOutcome`].
//!
//! [`RunOutcome`]: crate::types::RunOutcome

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a run before reconciliation begins.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The source directory does not exist or is a file.
    #[error("Source {} doesn't exist or isn't a folder", .0.display())]
    SourceNotDirectory(PathBuf),

    /// The resolved source catalog is missing.
    #[error("Source file {} doesn't exist", .0.display())]
    SourceFileMissing(PathBuf),

    /// The destination path exists but is not a directory.
    #[error("Destination {} isn't a folder", .0.display())]
    DestinationNotDirectory(PathBuf),

    /// No target locales were requested.
    #[error("No locales specified")]
    NoLocales,

    /// A locale identifier cannot be used as part of a file name.
    #[error("Invalid locale identifier {0:?}: {1}")]
    InvalidLocale(String, &'static str),

    /// The source catalog could not be read or parsed.
    #[error("Failed to read JSON from {}: {reason}", .path.display())]
    SourceUnreadable { path: PathBuf, reason: String },

    /// The source catalog has no `locale` field.
    #[error("No locale found in {}", .0.display())]
    SourceMissingLocale(PathBuf),

    /// The source catalog has no `translations` object.
    #[error("No translations found in {}", .0.display())]
    SourceMissingTranslations(PathBuf),
}
