// SPDX-License-Identifier: PMPL-1.0-or-later

//! Invocation options.
//!
//! Options come from an optional JSON/YAML file and from command-line flags
//! (flags win). They are resolved once into a [`SyncConfig`] that is passed
//! by reference to every reconciliation; nothing is read from global state.

use crate::catalog::Indent;
use crate::types::WriteMode;
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_json;
use serde_yaml;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE: &str = "src/i18n";
pub const DEFAULT_SOURCE_FILE: &str = "messages.json";

/// Partially specified options, as read from a file or the command line.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SyncOptions {
    #[serde(default)]
    pub source: Option<PathBuf>,
    #[serde(default, alias = "source_file")]
    pub source_file: Option<String>,
    #[serde(default)]
    pub destination: Option<PathBuf>,
    #[serde(default)]
    pub locales: Option<Vec<String>>,
    #[serde(default)]
    pub indent: Option<Indent>,
    #[serde(default)]
    pub strict: Option<bool>,
}

impl SyncOptions {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading options file {}", path.display()))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json options {}", path.display())),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml options {}", path.display())),
            _ => Err(anyhow!(
                "options file {} must be json/yaml/yml",
                path.display()
            )),
        }
    }

    /// Layer `other` on top of `self`; set fields in `other` win.
    pub fn overlay(self, other: SyncOptions) -> SyncOptions {
        SyncOptions {
            source: other.source.or(self.source),
            source_file: other.source_file.or(self.source_file),
            destination: other.destination.or(self.destination),
            locales: other.locales.or(self.locales),
            indent: other.indent.or(self.indent),
            strict: other.strict.or(self.strict),
        }
    }

    /// Fill in defaults. The destination falls back to the source directory.
    pub fn resolve(self, mode: WriteMode) -> SyncConfig {
        let source = self.source.unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE));
        SyncConfig {
            destination: self.destination.unwrap_or_else(|| source.clone()),
            source,
            source_file: self
                .source_file
                .unwrap_or_else(|| DEFAULT_SOURCE_FILE.to_string()),
            locales: self.locales.unwrap_or_default(),
            indent: self.indent.unwrap_or_default(),
            mode,
            strict: self.strict.unwrap_or(false),
        }
    }
}

/// Fully resolved options for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncConfig {
    /// Directory holding the source catalog.
    pub source: PathBuf,
    /// File name of the source catalog inside `source`.
    pub source_file: String,
    /// Directory receiving `<stem>.<locale>.json` files.
    pub destination: PathBuf,
    pub locales: Vec<String>,
    pub indent: Indent,
    pub mode: WriteMode,
    /// Fail the run when any locale had to be skipped.
    pub strict: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        SyncOptions::default().resolve(WriteMode::Write)
    }
}

impl SyncConfig {
    /// Defaults for everything except the target locales.
    pub fn with_locales<I, S>(locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            locales: locales.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// `source_file` without its last extension.
    pub fn file_stem(&self) -> String {
        Path::new(&self.source_file)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source_file.clone())
    }

    pub fn source_path(&self) -> PathBuf {
        self.source.join(&self.source_file)
    }

    /// `<destination>/<stem>.<locale>.json`
    pub fn destination_path(&self, locale: &str) -> PathBuf {
        self.destination
            .join(format!("{}.{}.json", self.file_stem(), locale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_follow_source_directory() {
        let config = SyncConfig::with_locales(["fr"]);
        assert_eq!(config.source, PathBuf::from("src/i18n"));
        assert_eq!(config.destination, config.source);
        assert_eq!(config.source_file, "messages.json");
        assert_eq!(config.indent, Indent::Tab);
        assert_eq!(config.mode, WriteMode::Write);
        assert!(!config.strict);
    }

    #[test]
    fn destination_path_uses_stem_and_locale() {
        let config = SyncConfig::with_locales(["fr"]);
        assert_eq!(
            config.destination_path("fr"),
            PathBuf::from("src/i18n/messages.fr.json")
        );
    }

    #[test]
    fn stem_drops_only_the_last_extension() {
        let mut config = SyncConfig::default();
        config.source_file = "app.messages.json".to_string();
        assert_eq!(config.file_stem(), "app.messages");
        config.source_file = "strings".to_string();
        assert_eq!(config.file_stem(), "strings");
    }

    #[test]
    fn overlay_prefers_later_values() {
        let file = SyncOptions {
            source: Some(PathBuf::from("i18n")),
            locales: Some(vec!["fr".to_string()]),
            indent: Some(Indent::Spaces(2)),
            ..SyncOptions::default()
        };
        let flags = SyncOptions {
            locales: Some(vec!["de".to_string(), "it".to_string()]),
            ..SyncOptions::default()
        };
        let config = file.overlay(flags).resolve(WriteMode::Check);
        assert_eq!(config.source, PathBuf::from("i18n"));
        assert_eq!(config.destination, PathBuf::from("i18n"));
        assert_eq!(config.locales, ["de", "it"]);
        assert_eq!(config.indent, Indent::Spaces(2));
        assert_eq!(config.mode, WriteMode::Check);
    }

    #[test]
    fn loads_json_options_with_builder_style_keys() {
        let dir = TempDir::new().expect("tempdir should create");
        let path = dir.path().join("locale-sync.json");
        fs::write(
            &path,
            r#"{"source": "web/i18n", "sourceFile": "strings.json", "locales": ["fr", "de"], "indent": 2}"#,
        )
        .expect("options should write");

        let options = SyncOptions::load(&path).expect("json options should load");
        assert_eq!(options.source_file.as_deref(), Some("strings.json"));
        assert_eq!(options.indent, Some(Indent::Spaces(2)));
        assert_eq!(options.locales, Some(vec!["fr".to_string(), "de".to_string()]));
    }

    #[test]
    fn options_accept_negative_and_fractional_indent() {
        let dir = TempDir::new().expect("tempdir should create");
        let path = dir.path().join("locale-sync.json");
        fs::write(&path, r#"{"locales": ["fr"], "indent": -1}"#).expect("options should write");
        let options = SyncOptions::load(&path).expect("negative indent should load");
        assert_eq!(options.indent, Some(Indent::Spaces(0)));

        fs::write(&path, r#"{"indent": 2.5}"#).expect("options should write");
        let options = SyncOptions::load(&path).expect("fractional indent should load");
        assert_eq!(options.indent, Some(Indent::Spaces(2)));
    }

    #[test]
    fn loads_yaml_options() {
        let dir = TempDir::new().expect("tempdir should create");
        let path = dir.path().join("locale-sync.yaml");
        fs::write(
            &path,
            "destination: out/i18n\nlocales:\n  - fr\nindent: \"  \"\nstrict: true\n",
        )
        .expect("options should write");

        let options = SyncOptions::load(&path).expect("yaml options should load");
        assert_eq!(options.destination, Some(PathBuf::from("out/i18n")));
        assert_eq!(options.indent, Some(Indent::Literal("  ".to_string())));
        assert_eq!(options.strict, Some(true));
    }

    #[test]
    fn rejects_unknown_extension_and_fields() {
        let dir = TempDir::new().expect("tempdir should create");
        let toml = dir.path().join("options.toml");
        fs::write(&toml, "locales = []").expect("options should write");
        assert!(SyncOptions::load(&toml).is_err());

        let typo = dir.path().join("options.json");
        fs::write(&typo, r#"{"locale": ["fr"]}"#).expect("options should write");
        assert!(SyncOptions::load(&typo).is_err());
    }
}
