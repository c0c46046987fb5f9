// SPDX-License-Identifier: PMPL-1.0-or-later

//! Machine-readable run summaries and the terminal table.

use crate::config::SyncConfig;
use crate::locale;
use crate::types::{LocaleOutcome, OutcomeKind, RunOutcome, WriteMode};
use anyhow::Result;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub created_at: String,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub mode: WriteMode,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub created: usize,
    pub merged: usize,
    pub skipped: usize,
    pub locales: Vec<LocaleOutcome>,
}

impl RunSummary {
    pub fn new(config: &SyncConfig, outcome: &RunOutcome) -> Self {
        let count = |wanted: fn(&OutcomeKind) -> bool| {
            outcome
                .outcomes
                .iter()
                .filter(|entry| wanted(&entry.kind))
                .count()
        };
        let mut locales = outcome.outcomes.clone();
        locales.sort_by(|a, b| a.locale.cmp(&b.locale));

        Self {
            created_at: chrono::Utc::now().to_rfc3339(),
            source: config.source_path(),
            destination: config.destination.clone(),
            mode: config.mode,
            success: outcome.success,
            error: outcome.error.clone(),
            created: count(|kind| matches!(kind, OutcomeKind::Created)),
            merged: count(|kind| matches!(kind, OutcomeKind::Merged { .. })),
            skipped: count(|kind| matches!(kind, OutcomeKind::Skipped { .. })),
            locales,
        }
    }
}

/// Write the summary as JSON, or YAML for `.yaml`/`.yml` paths.
pub fn write_summary(summary: &RunSummary, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let content = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::to_string(summary)?,
        _ => serde_json::to_string_pretty(summary)?,
    };
    fs::write(path, content)?;
    Ok(())
}

pub fn print_summary(summary: &RunSummary, quiet: bool) {
    if quiet || summary.locales.is_empty() {
        return;
    }

    println!();
    println!(
        "  {:<24} {:<9} {:>6} {:>8}  {}",
        "Locale", "Status", "Added", "Removed", "File"
    );
    println!("  {}", "-".repeat(72));
    for entry in &summary.locales {
        let label = locale::describe(&entry.locale);
        let file = entry.path.display();
        match &entry.kind {
            OutcomeKind::Created => println!(
                "  {:<24} {:<9} {:>6} {:>8}  {}",
                label,
                "created".green(),
                "-",
                "-",
                file
            ),
            OutcomeKind::Merged { added, removed } => println!(
                "  {:<24} {:<9} {:>6} {:>8}  {}",
                label,
                "merged",
                added.len(),
                removed.len(),
                file
            ),
            OutcomeKind::Skipped { .. } => println!(
                "  {:<24} {:<9} {:>6} {:>8}  {}",
                label,
                "skipped".red(),
                "-",
                "-",
                file
            ),
        }
    }
    println!();
}
