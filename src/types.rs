// SPDX-License-Identifier: PMPL-1.0-or-later

//! Shared result types for catalog reconciliation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Keys that differ between a source and a destination translation map.
///
/// `added` follows source order, `removed` follows destination order. The
/// two lists are disjoint by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDiff {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl KeyDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// How a run treats destination files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Create and rewrite destination catalogs.
    #[default]
    Write,
    /// Compute every outcome but leave the filesystem untouched.
    Check,
}

/// Terminal state of one locale's reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum OutcomeKind {
    /// No destination existed; it was cloned from the source.
    Created,
    /// The destination existed and its key set was aligned.
    Merged { added: Vec<String>, removed: Vec<String> },
    /// The destination could not be compared and was left untouched.
    Skipped { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleOutcome {
    pub locale: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub kind: OutcomeKind,
}

impl LocaleOutcome {
    /// True when the destination file's key set was (or would be) changed.
    pub fn has_changes(&self) -> bool {
        match &self.kind {
            OutcomeKind::Created => true,
            OutcomeKind::Merged { added, removed } => !added.is_empty() || !removed.is_empty(),
            OutcomeKind::Skipped { .. } => false,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.kind, OutcomeKind::Skipped { .. })
    }
}

/// Final pass/fail result of a run, as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Per-locale outcomes; empty when the run failed before reconciling.
    #[serde(default)]
    pub outcomes: Vec<LocaleOutcome>,
}

impl RunOutcome {
    pub fn succeeded(outcomes: Vec<LocaleOutcome>) -> Self {
        Self {
            success: true,
            error: None,
            outcomes,
        }
    }

    pub fn failed(error: impl Into<String>, outcomes: Vec<LocaleOutcome>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            outcomes,
        }
    }
}
