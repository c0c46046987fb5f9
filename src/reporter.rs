// SPDX-License-Identifier: PMPL-1.0-or-later

//! Progress and error reporting.
//!
//! The reconciler never prints directly; it talks to a [`Reporter`]. Locale
//! tasks run on a thread pool, so implementations must be `Send + Sync`.

use colored::*;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Notice,
    Warning,
    Error,
}

pub trait Reporter: Send + Sync {
    fn notice(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Coloured terminal output. Notices go to stdout, the rest to stderr.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Reporter for ConsoleReporter {
    fn notice(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "•".cyan(), message);
        }
    }

    fn warn(&self, message: &str) {
        eprintln!("{} {}", "warning:".yellow().bold(), message);
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "error:".red().bold(), message);
    }
}

/// Keeps every message in memory. Used as a spy in tests.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    entries: Mutex<Vec<(Level, String)>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Messages recorded at `level`, in arrival order.
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(entry_level, _)| *entry_level == level)
            .map(|(_, message)| message)
            .collect()
    }

    fn record(&self, level: Level, message: &str) {
        let mut entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.push((level, message.to_string()));
    }
}

impl Reporter for MemoryReporter {
    fn notice(&self, message: &str) {
        self.record(Level::Notice, message);
    }

    fn warn(&self, message: &str) {
        self.record(Level::Warning, message);
    }

    fn error(&self, message: &str) {
        self.record(Level::Error, message);
    }
}
