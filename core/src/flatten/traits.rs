#![deny(missing_docs)]

//! # Trait Resolution
//!
//! Turns the document's list of single-entry trait mappings into one lookup.

use crate::model::TraitMap;
use indexmap::IndexMap;
use serde_json::Value;

/// Builds a `name -> definition` map from single-entry trait mappings.
///
/// Later definitions replace earlier ones with the same name. Only the first
/// entry of each element is read; empty elements are skipped.
pub fn resolve_traits(traits: &[IndexMap<String, Value>]) -> TraitMap {
    let mut resolved = TraitMap::new();
    for named in traits {
        if let Some((name, definition)) = named.first() {
            resolved.insert(name.clone(), definition.clone());
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn named(name: &str, definition: Value) -> IndexMap<String, Value> {
        let mut map = IndexMap::new();
        map.insert(name.to_string(), definition);
        map
    }

    #[test]
    fn test_empty_input() {
        assert!(resolve_traits(&[]).is_empty());
    }

    #[test]
    fn test_resolves_each_trait() {
        let traits = vec![
            named("secured", json!({"headers": {"Token": {}}})),
            named("paged", json!({"queryParameters": {"page": {}}})),
        ];
        let resolved = resolve_traits(&traits);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved["paged"], json!({"queryParameters": {"page": {}}}));
        assert_eq!(resolve_traits(&traits), resolved);
    }

    #[test]
    fn test_duplicate_name_last_wins() {
        let traits = vec![
            named("paged", json!({"v": 1})),
            named("paged", json!({"v": 2})),
        ];
        let resolved = resolve_traits(&traits);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved["paged"], json!({"v": 2}));
    }

    #[test]
    fn test_empty_element_skipped() {
        let traits = vec![IndexMap::new(), named("a", json!(null))];
        let resolved = resolve_traits(&traits);
        assert_eq!(resolved.keys().collect::<Vec<_>>(), vec!["a"]);
    }
}
