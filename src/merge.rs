// SPDX-License-Identifier: PMPL-1.0-or-later

//! In-place application of a [`KeyDiff`](crate::types::KeyDiff).

use serde_json::{Map, Value};
use std::collections::HashSet;

/// Append `added` keys to `destination` with the source's values.
///
/// Existing destination entries keep their position and value. New keys
/// land after them, in the order they appear in `source`. Returns the
/// number of keys inserted.
pub fn merge_added(
    destination: &mut Map<String, Value>,
    source: &Map<String, Value>,
    added: &[String],
) -> usize {
    if added.is_empty() {
        return 0;
    }
    let wanted: HashSet<&str> = added.iter().map(String::as_str).collect();
    let mut inserted = 0;
    for (key, value) in source {
        if wanted.contains(key.as_str()) && !destination.contains_key(key) {
            destination.insert(key.clone(), value.clone());
            inserted += 1;
        }
    }
    inserted
}

/// Delete `removed` keys; survivors keep their relative order.
pub fn purge_removed(destination: &mut Map<String, Value>, removed: &[String]) -> usize {
    if removed.is_empty() {
        return 0;
    }
    let doomed: HashSet<&str> = removed.iter().map(String::as_str).collect();
    let before = destination.len();
    destination.retain(|key, _| !doomed.contains(key.as_str()));
    before - destination.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    fn keys(map: &Map<String, Value>) -> Vec<&str> {
        map.keys().map(String::as_str).collect()
    }

    #[test]
    fn added_keys_append_in_source_order() {
        let source = map(json!({"n2": "N2", "a": "A", "n1": "N1", "b": "B"}));
        let mut destination = map(json!({"b": "B-old", "a": "A-old"}));
        let added = vec!["n2".to_string(), "n1".to_string()];

        assert_eq!(merge_added(&mut destination, &source, &added), 2);
        assert_eq!(keys(&destination), ["b", "a", "n2", "n1"]);
        assert_eq!(destination["a"], json!("A-old"));
        assert_eq!(destination["n1"], json!("N1"));
    }

    #[test]
    fn nested_values_copy_whole() {
        let source = map(json!({"plural": {"one": "1 item", "other": "{n} items"}}));
        let mut destination = Map::new();
        merge_added(&mut destination, &source, &["plural".to_string()]);
        assert_eq!(destination["plural"], source["plural"]);
    }

    #[test]
    fn nothing_to_add_is_a_no_op() {
        let source = map(json!({"a": "A"}));
        let mut destination = map(json!({"a": "A-old"}));
        assert_eq!(merge_added(&mut destination, &source, &[]), 0);
        assert_eq!(destination, map(json!({"a": "A-old"})));
    }

    #[test]
    fn purge_keeps_survivor_order() {
        let mut destination = map(json!({"a": 1, "z": 2, "b": 3, "y": 4, "c": 5}));
        let removed = vec!["z".to_string(), "y".to_string()];
        assert_eq!(purge_removed(&mut destination, &removed), 2);
        assert_eq!(keys(&destination), ["a", "b", "c"]);
    }

    #[test]
    fn purge_of_unknown_keys_removes_nothing() {
        let mut destination = map(json!({"a": 1}));
        assert_eq!(purge_removed(&mut destination, &["nope".to_string()]), 0);
        assert_eq!(purge_removed(&mut destination, &[]), 0);
        assert_eq!(keys(&destination), ["a"]);
    }
}
