use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::normalize_value;

/// One entry of the ingredient catalog.
///
/// Catalog entries describe where and when an ingredient can be obtained;
/// the `owned` flag is only the seed value shipped with the data, the live
/// owned state lives in [`OwnedStore`](crate::OwnedStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogIngredient {
    /// Stable id assigned from the entry's position in the data file.
    pub id: String,
    pub name: String,
    pub big_category: String,
    pub small_category: String,
    pub seasons: Vec<String>,
    pub obtain_methods: Vec<String>,
    pub obtain_locations: Vec<String>,
    pub owned: bool,
}

impl CatalogIngredient {
    /// Builds a catalog entry from a raw JSON value.
    ///
    /// `index` is the entry's zero-based position in the source array; ids
    /// come out as `ingredient-001`, `ingredient-002`, … Entries that are
    /// not objects or have no name are dropped.
    pub(super) fn from_value(index: usize, value: &Value) -> Option<Self> {
        let name = normalize_value(value.get("name"));
        if name.is_empty() {
            return None;
        }

        Some(CatalogIngredient {
            id: format!("ingredient-{:03}", index + 1),
            name,
            big_category: normalize_value(value.get("big_category")),
            small_category: normalize_value(value.get("small_category")),
            seasons: split_multi_value(value.get("seasons")),
            obtain_methods: split_multi_value(value.get("obtain_methods")),
            obtain_locations: split_multi_value(value.get("obtain_locations")),
            owned: value.get("owned").and_then(Value::as_bool).unwrap_or(false),
        })
    }
}

/// Splits a multi-valued catalog field into its parts.
///
/// The data carries these either as a JSON array or as one delimited string;
/// exported strings use the ideographic comma, hand-edited ones a plain
/// comma, so both delimiters are accepted. Blank parts are dropped.
fn split_multi_value(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| normalize_value(Some(item)))
            .filter(|item| !item.is_empty())
            .collect(),
        _ => {
            let text = normalize_value(value);
            text.split(['、', ','])
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(String::from)
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_full_entry() {
        let entry = CatalogIngredient::from_value(
            0,
            &json!({
                "name": " Potato ",
                "big_category": "Crops",
                "small_category": "Root Vegetables",
                "seasons": "Spring、Autumn",
                "obtain_methods": ["Farming", "Shop"],
                "obtain_locations": "Field,Town Market",
                "owned": true,
            }),
        )
        .unwrap();

        assert_eq!(entry.id, "ingredient-001");
        assert_eq!(entry.name, "Potato");
        assert_eq!(entry.big_category, "Crops");
        assert_eq!(entry.seasons, vec!["Spring", "Autumn"]);
        assert_eq!(entry.obtain_methods, vec!["Farming", "Shop"]);
        assert_eq!(entry.obtain_locations, vec!["Field", "Town Market"]);
        assert!(entry.owned);
    }

    #[test]
    fn test_from_value_defaults() {
        let entry = CatalogIngredient::from_value(11, &json!({ "name": "Egg" })).unwrap();

        assert_eq!(entry.id, "ingredient-012");
        assert_eq!(entry.big_category, "");
        assert!(entry.seasons.is_empty());
        assert!(!entry.owned);
    }

    #[test]
    fn test_from_value_rejects_unnamed_entries() {
        assert!(CatalogIngredient::from_value(0, &json!({ "name": "  " })).is_none());
        assert!(CatalogIngredient::from_value(0, &json!({})).is_none());
        assert!(CatalogIngredient::from_value(0, &json!("Potato")).is_none());
    }

    #[test]
    fn test_split_multi_value_mixed_delimiters() {
        assert_eq!(
            split_multi_value(Some(&json!("Spring、Summer, Autumn"))),
            vec!["Spring", "Summer", "Autumn"]
        );
    }

    #[test]
    fn test_split_multi_value_drops_blanks() {
        assert_eq!(
            split_multi_value(Some(&json!("、Fishing、 、"))),
            vec!["Fishing"]
        );
        assert_eq!(
            split_multi_value(Some(&json!(["", "  ", "Shop"]))),
            vec!["Shop"]
        );
    }

    #[test]
    fn test_split_multi_value_absent() {
        assert!(split_multi_value(None).is_empty());
        assert!(split_multi_value(Some(&Value::Null)).is_empty());
    }
}
