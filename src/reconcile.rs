// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog reconciliation.
//!
//! For every requested locale the destination catalog is either created as
//! a clone of the source (with its locale tag rewritten) or merged: keys
//! missing from the destination are appended with the source's values, keys
//! the source no longer has are dropped, and every other entry is left
//! exactly as a translator wrote it.
//!
//! Locales are processed in parallel over one read-only source catalog.
//! A destination that cannot be compared is skipped with an error notice;
//! an I/O fault while writing fails the run once every locale has finished.

use crate::catalog::{self, Catalog};
use crate::config::SyncConfig;
use crate::diff::{self, CompareError};
use crate::error::ValidationError;
use crate::locale;
use crate::merge;
use crate::reporter::Reporter;
use crate::types::{KeyDiff, LocaleOutcome, OutcomeKind, RunOutcome, WriteMode};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::Path;

/// Reconcile every configured locale and report a single pass/fail result.
pub fn run(config: &SyncConfig, reporter: &dyn Reporter) -> RunOutcome {
    Reconciler::new(config, reporter).run()
}

pub struct Reconciler<'a> {
    config: &'a SyncConfig,
    reporter: &'a dyn Reporter,
}

impl<'a> Reconciler<'a> {
    pub fn new(config: &'a SyncConfig, reporter: &'a dyn Reporter) -> Self {
        Self { config, reporter }
    }

    pub fn run(&self) -> RunOutcome {
        let (source, locales) = match self.prepare() {
            Ok(prepared) => prepared,
            Err(err) => {
                let message = format!("{:#}", err);
                self.reporter.error(&message);
                return RunOutcome::failed(message, Vec::new());
            }
        };

        let results: Vec<(String, Result<LocaleOutcome>)> = locales
            .par_iter()
            .map(|locale| (locale.clone(), self.reconcile_locale(&source, locale)))
            .collect();

        let mut outcomes = Vec::with_capacity(results.len());
        let mut faults = Vec::new();
        for (locale, result) in results {
            match result {
                Ok(outcome) => outcomes.push(outcome),
                Err(err) => faults.push(format!("{}: {:#}", locale, err)),
            }
        }

        if !faults.is_empty() {
            for fault in &faults {
                self.reporter.error(fault);
            }
            self.reporter.error("Failed to convert files.");
            return RunOutcome::failed(faults.join("; "), outcomes);
        }

        if self.config.strict {
            let skipped: Vec<&str> = outcomes
                .iter()
                .filter(|outcome| outcome.is_skipped())
                .map(|outcome| outcome.locale.as_str())
                .collect();
            if !skipped.is_empty() {
                let message = format!(
                    "{} locale(s) could not be compared: {}",
                    skipped.len(),
                    skipped.join(", ")
                );
                self.reporter.error(&message);
                return RunOutcome::failed(message, outcomes);
            }
        }

        if self.config.mode == WriteMode::Check {
            let stale: Vec<&str> = outcomes
                .iter()
                .filter(|outcome| outcome.has_changes())
                .map(|outcome| outcome.locale.as_str())
                .collect();
            if !stale.is_empty() {
                let message = format!(
                    "{} catalog(s) out of date: {}",
                    stale.len(),
                    stale.join(", ")
                );
                self.reporter.error(&message);
                return RunOutcome::failed(message, outcomes);
            }
        }

        self.reporter.notice("Done!");
        RunOutcome::succeeded(outcomes)
    }

    /// Run-level checks. Nothing is written unless all of them pass.
    fn prepare(&self) -> Result<(Catalog, Vec<String>)> {
        let config = self.config;
        let source_path = config.source_path();

        if !config.source.is_dir() {
            return Err(ValidationError::SourceNotDirectory(config.source.clone()).into());
        }
        if !source_path.is_file() {
            return Err(ValidationError::SourceFileMissing(source_path).into());
        }
        if config.destination.exists() && !config.destination.is_dir() {
            return Err(ValidationError::DestinationNotDirectory(config.destination.clone()).into());
        }

        let (locales, duplicates) = locale::dedup(&config.locales);
        if locales.is_empty() {
            return Err(ValidationError::NoLocales.into());
        }
        for id in &duplicates {
            self.reporter.warn(&format!(
                "ignoring {}: another locale already targets the same file",
                id
            ));
        }
        for id in &locales {
            locale::validate(id)?;
            if !locale::is_known_language(id) {
                self.reporter.warn(&format!(
                    "{} does not start with a known ISO 639-1 language code",
                    id
                ));
            }
        }

        let source = catalog::load(&source_path).map_err(|err| ValidationError::SourceUnreadable {
            path: source_path.clone(),
            reason: format!("{:#}", err),
        })?;
        if source.locale().is_none() {
            return Err(ValidationError::SourceMissingLocale(source_path).into());
        }
        if source.translations().is_none() {
            return Err(ValidationError::SourceMissingTranslations(source_path).into());
        }

        if config.mode == WriteMode::Write && !config.destination.exists() {
            fs::create_dir_all(&config.destination).with_context(|| {
                format!("creating destination {}", config.destination.display())
            })?;
        }

        Ok((source, locales))
    }

    /// Bring one locale's catalog in line with `source`.
    ///
    /// Comparison failures become [`OutcomeKind::Skipped`]; only write
    /// faults are returned as errors.
    pub fn reconcile_locale(&self, source: &Catalog, locale: &str) -> Result<LocaleOutcome> {
        let path = self.config.destination_path(locale);
        let outcome = |kind: OutcomeKind| LocaleOutcome {
            locale: locale.to_string(),
            path: path.clone(),
            kind,
        };

        if !path.exists() {
            self.notice(&format!(
                "New locale found - creating a new file {}",
                path.display()
            ));
            let mut created = source.clone();
            created.set_locale(locale);
            self.write(&path, &created)?;
            return Ok(outcome(OutcomeKind::Created));
        }

        let mut destination = match catalog::load(&path) {
            Ok(destination) => destination,
            Err(err) => return Ok(outcome(self.skip(&path, &format!("{:#}", err)))),
        };
        let diff = match merge_catalog(source, &mut destination) {
            Ok(diff) => diff,
            Err(err) => return Ok(outcome(self.skip(&path, &err.to_string()))),
        };

        if diff.added.is_empty() {
            self.notice(&format!("No keys to add to {}", path.display()));
        } else {
            self.notice(&format!(
                "Added {} key(s) to {}",
                diff.added.len(),
                path.display()
            ));
        }
        if diff.removed.is_empty() {
            self.notice(&format!("No keys to remove from {}", path.display()));
        } else {
            self.notice(&format!(
                "Removed {} key(s) from {}",
                diff.removed.len(),
                path.display()
            ));
        }

        self.write(&path, &destination)?;
        Ok(outcome(OutcomeKind::Merged {
            added: diff.added,
            removed: diff.removed,
        }))
    }

    fn write(&self, path: &Path, catalog: &Catalog) -> Result<()> {
        match self.config.mode {
            WriteMode::Write => catalog::save(path, catalog, &self.config.indent),
            WriteMode::Check => Ok(()),
        }
    }

    fn skip(&self, path: &Path, reason: &str) -> OutcomeKind {
        self.reporter.error(&format!(
            "Couldn't compare the files, please check the paths or file contents. ({}: {})",
            path.display(),
            reason
        ));
        OutcomeKind::Skipped {
            reason: reason.to_string(),
        }
    }

    fn notice(&self, message: &str) {
        match self.config.mode {
            WriteMode::Write => self.reporter.notice(message),
            WriteMode::Check => self.reporter.notice(&format!("(check) {}", message)),
        }
    }
}

/// Diff `destination` against `source` and apply the result in place.
///
/// Added keys are appended in source order with source values, removed
/// keys are purged. Returns the diff that was applied.
pub fn merge_catalog(source: &Catalog, destination: &mut Catalog) -> Result<KeyDiff, CompareError> {
    let diff = diff::compare(source, destination)?;
    let source_translations = source
        .translations()
        .ok_or(CompareError::SourceTranslations)?;
    let translations = destination
        .translations_mut()
        .ok_or(CompareError::DestinationTranslations)?;
    merge::merge_added(translations, source_translations, &diff.added);
    merge::purge_removed(translations, &diff.removed);
    Ok(diff)
}
