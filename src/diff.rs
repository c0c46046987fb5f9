// SPDX-License-Identifier: PMPL-1.0-or-later

//! Key-set comparison between a source and a destination catalog.

use crate::catalog::Catalog;
use crate::types::KeyDiff;
use serde_json::{Map, Value};
use std::collections::HashSet;
use thiserror::Error;

/// The two catalogs cannot be compared. Distinct from an empty diff.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    #[error("source catalog has no translations object")]
    SourceTranslations,
    #[error("destination catalog has no translations object")]
    DestinationTranslations,
}

/// Symmetric difference of two translation maps' key sets.
pub fn diff_keys(source: &Map<String, Value>, destination: &Map<String, Value>) -> KeyDiff {
    let source_keys: HashSet<&str> = source.keys().map(String::as_str).collect();
    let destination_keys: HashSet<&str> = destination.keys().map(String::as_str).collect();

    let added = source
        .keys()
        .filter(|key| !destination_keys.contains(key.as_str()))
        .cloned()
        .collect();
    let removed = destination
        .keys()
        .filter(|key| !source_keys.contains(key.as_str()))
        .cloned()
        .collect();

    KeyDiff { added, removed }
}

pub fn compare(source: &Catalog, destination: &Catalog) -> Result<KeyDiff, CompareError> {
    let source = source
        .translations()
        .ok_or(CompareError::SourceTranslations)?;
    let destination = destination
        .translations()
        .ok_or(CompareError::DestinationTranslations)?;
    Ok(diff_keys(source, destination))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog(value: Value) -> Catalog {
        Catalog::from_value(value).expect("object catalog")
    }

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn added_follows_source_order_and_removed_follows_destination_order() {
        let source = map(json!({"c": 1, "a": 1, "x": 1, "b": 1}));
        let destination = map(json!({"z": 0, "a": 0, "y": 0}));
        let diff = diff_keys(&source, &destination);
        assert_eq!(diff.added, ["c", "x", "b"]);
        assert_eq!(diff.removed, ["z", "y"]);
    }

    #[test]
    fn identical_key_sets_give_an_empty_diff() {
        let source = map(json!({"a": "A", "b": "B"}));
        let destination = map(json!({"b": "other", "a": "values"}));
        let diff = diff_keys(&source, &destination);
        assert!(diff.is_empty());
    }

    #[test]
    fn empty_maps_compare_cleanly() {
        let diff = diff_keys(&Map::new(), &map(json!({"gone": 1})));
        assert!(diff.added.is_empty());
        assert_eq!(diff.removed, ["gone"]);
    }

    #[test]
    fn missing_translations_cannot_be_compared() {
        let good = catalog(json!({"locale": "en", "translations": {"a": "A"}}));
        let missing = catalog(json!({"locale": "fr"}));
        let malformed = catalog(json!({"locale": "fr", "translations": ["a"]}));

        assert_eq!(
            compare(&good, &missing),
            Err(CompareError::DestinationTranslations)
        );
        assert_eq!(
            compare(&good, &malformed),
            Err(CompareError::DestinationTranslations)
        );
        assert_eq!(compare(&missing, &good), Err(CompareError::SourceTranslations));
    }

    #[test]
    fn compare_uses_translation_keys_only() {
        let source = catalog(json!({"locale": "en", "meta": 1, "translations": {"a": "A"}}));
        let destination = catalog(json!({"locale": "fr", "translations": {"a": "A-fr"}}));
        assert_eq!(compare(&source, &destination), Ok(KeyDiff::default()));
    }
}
