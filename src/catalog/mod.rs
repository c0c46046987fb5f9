// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalogs on disk.
//!
//! A catalog is a JSON object carrying at least a `locale` tag and a
//! `translations` object. Every other top-level field is kept as-is, and
//! field order survives a load/save round trip (`serde_json` is built with
//! `preserve_order`).

mod indent;

pub use indent::Indent;

use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

pub const LOCALE_FIELD: &str = "locale";
pub const TRANSLATIONS_FIELD: &str = "translations";

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    fields: Map<String, Value>,
}

impl Catalog {
    /// Wrap a parsed JSON document. Only objects are catalogs.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(anyhow!(
                "catalog must be a JSON object, found {}",
                json_kind(&other)
            )),
        }
    }

    /// Parse catalog text, tolerating a leading byte order mark.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let value: Value = serde_json::from_str(text).context("parsing catalog json")?;
        Self::from_value(value)
    }

    pub fn locale(&self) -> Option<&Value> {
        self.fields.get(LOCALE_FIELD)
    }

    /// The translation map, if present and an object.
    pub fn translations(&self) -> Option<&Map<String, Value>> {
        self.fields.get(TRANSLATIONS_FIELD).and_then(Value::as_object)
    }

    pub fn translations_mut(&mut self) -> Option<&mut Map<String, Value>> {
        self.fields
            .get_mut(TRANSLATIONS_FIELD)
            .and_then(Value::as_object_mut)
    }

    /// Rewrite the locale tag. An existing field keeps its position.
    pub fn set_locale(&mut self, locale: &str) {
        self.fields
            .insert(LOCALE_FIELD.to_string(), Value::String(locale.to_string()));
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

/// Read and parse a catalog.
///
/// Any failure (missing file, bad encoding, bad JSON, wrong shape) comes
/// back as an error with the path attached; nothing is written.
pub fn load(path: &Path) -> Result<Catalog> {
    let raw = fs::read(path).with_context(|| format!("reading catalog {}", path.display()))?;
    let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(&raw);
    if had_errors {
        bail!("catalog {} is not valid UTF-8", path.display());
    }
    Catalog::parse(&text).with_context(|| format!("loading catalog {}", path.display()))
}

/// Serialize a catalog with the given indentation.
pub fn render(catalog: &Catalog, indent: &Indent) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    if indent.is_compact() {
        serde_json::to_writer(&mut out, catalog.as_map()).context("serializing catalog")?;
    } else {
        let unit = indent.as_bytes();
        let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&unit));
        catalog
            .as_map()
            .serialize(&mut serializer)
            .context("serializing catalog")?;
    }
    Ok(out)
}

/// Replace the file at `path` with the rendered catalog.
///
/// The content goes to a temporary file in the same directory first and is
/// renamed over the target, so a crash never leaves a half-written catalog.
pub fn save(path: &Path, catalog: &Catalog, indent: &Indent) -> Result<()> {
    let bytes = render(catalog, indent)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)
        .with_context(|| format!("staging catalog in {}", dir.display()))?;
    staged
        .write_all(&bytes)
        .with_context(|| format!("writing catalog {}", path.display()))?;
    staged
        .as_file()
        .sync_all()
        .with_context(|| format!("flushing catalog {}", path.display()))?;
    staged
        .persist(path)
        .with_context(|| format!("replacing catalog {}", path.display()))?;
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
