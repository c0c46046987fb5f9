// SPDX-License-Identifier: PMPL-1.0-or-later

//! locale-sync — keep per-locale JSON translation catalogs in step with a
//! single source catalog.
//!
//! Each target locale gets `<destination>/<stem>.<locale>.json`. A missing
//! file is created as a copy of the source with its `locale` tag rewritten;
//! an existing file keeps every translation it already has, gains the keys
//! the source added (appended in source order) and loses the keys the
//! source dropped.
//!
//! ```no_run
//! use locale_sync::{config::SyncConfig, reconcile, reporter::ConsoleReporter};
//!
//! let config = SyncConfig::with_locales(["fr", "de-CH"]);
//! let outcome = reconcile::run(&config, &ConsoleReporter::default());
//! assert!(outcome.success, "{:?}", outcome.error);
//! ```

pub mod catalog;
pub mod config;
pub mod diff;
pub mod error;
pub mod locale;
pub mod merge;
pub mod reconcile;
pub mod reporter;
pub mod summary;
pub mod types;
