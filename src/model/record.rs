use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::normalize::normalize_value;

/// Accepted key spellings for the five positional ingredient slots of the
/// flat recipe shape. Exported data has used both spellings over time.
pub(crate) const INGREDIENT_FIELDS: [[&str; 2]; 5] = [
    ["ingredient1", "ingredient 1"],
    ["ingredient2", "ingredient 2"],
    ["ingredient3", "ingredient 3"],
    ["ingredient4", "ingredient 4"],
    ["ingredient5", "ingredient 5"],
];

const NAME_FIELDS: [&str; 1] = ["name"];
// "utensil" is the legacy header the old exports used for the tool column.
const TOOL_FIELDS: [&str; 2] = ["tool", "utensil"];
const RECOVERY_FIELDS: [&str; 1] = ["recovery"];
const BONUS_FIELDS: [&str; 1] = ["bonus"];
const NUMBER_FIELDS: [&str; 1] = ["number"];
const IMAGE_FIELDS: [&str; 1] = ["image"];

/// Star levels that carry a listed sale price, lowest to highest.
pub const STAR_LEVELS: [&str; 10] = [
    "0.5", "1.0", "1.5", "2.0", "2.5", "3.0", "3.5", "4.0", "4.5", "5.0",
];

/// The sale price of a recipe at one star level.
///
/// `value` is the raw listed price text; it is empty when the source data
/// has no price for that level, and the presentation layer decides how to
/// render the gap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarPrice {
    pub star: String,
    pub value: String,
}

/// A raw recipe record as loaded from a data file.
///
/// Records keep their fields as a flat JSON object map rather than a fixed
/// struct: the source data comes in two shapes (a structured ingredient
/// list, or five positional ingredient fields) and has gone through several
/// header renames. Accessors normalize on the way out, so a missing or
/// malformed field reads as empty rather than failing.
///
/// # Examples
///
/// ```
/// use pantry_craft::RecipeRecord;
/// use serde_json::json;
///
/// let record = RecipeRecord::from_value(json!({
///     "name": "Baked Potato",
///     "ingredient1": "Potato",
///     "bonus": "Butter",
/// }));
/// assert_eq!(record.name(), "Baked Potato");
/// assert_eq!(record.bonus(), "Butter");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    #[serde(flatten)]
    data: HashMap<String, Value>,
}

impl RecipeRecord {
    /// Creates a record from a raw JSON value.
    ///
    /// Anything other than a JSON object yields an empty record, which
    /// downstream reads as a recipe with no requirements.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => RecipeRecord {
                data: map.into_iter().collect(),
            },
            _ => RecipeRecord::default(),
        }
    }

    /// Returns the first raw value present under any of the given keys.
    pub(crate) fn field(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter().find_map(|key| self.data.get(*key))
    }

    /// Returns the normalized text of the first field present under the
    /// given keys; empty when none is present.
    pub(crate) fn text(&self, keys: &[&str]) -> String {
        normalize_value(self.field(keys))
    }

    /// Returns a raw field value by key.
    ///
    /// This provides access to any record field, including ones not covered
    /// by the convenience accessors.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// The recipe's display name; empty when the record has none.
    pub fn name(&self) -> String {
        self.text(&NAME_FIELDS)
    }

    /// The cooking tool the recipe needs.
    pub fn tool(&self) -> String {
        self.text(&TOOL_FIELDS)
    }

    /// The recovery amount the dish restores.
    pub fn recovery(&self) -> String {
        self.text(&RECOVERY_FIELDS)
    }

    /// The display-only bonus entry; empty when the record has none.
    pub fn bonus(&self) -> String {
        self.text(&BONUS_FIELDS)
    }

    /// The record's catalogue number.
    pub fn number(&self) -> String {
        self.text(&NUMBER_FIELDS)
    }

    /// The recipe's image reference.
    pub fn image(&self) -> String {
        self.text(&IMAGE_FIELDS)
    }

    /// The structured ingredient list, if this record carries one.
    ///
    /// Returns `None` when the field is absent or not an array, in which
    /// case extraction falls back to the flat positional fields.
    pub(crate) fn structured_ingredients(&self) -> Option<&Vec<Value>> {
        self.data.get("ingredients").and_then(Value::as_array)
    }

    /// The sale price at every star level, lowest to highest.
    ///
    /// Prices live under a `prices` object keyed by star level; levels the
    /// record does not list come back with an empty value so the list always
    /// has one entry per level.
    pub fn star_prices(&self) -> Vec<StarPrice> {
        let prices = self.data.get("prices");
        STAR_LEVELS
            .iter()
            .map(|star| StarPrice {
                star: (*star).to_string(),
                value: normalize_value(prices.and_then(|p| p.get(*star))),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_from_object() {
        let record = RecipeRecord::from_value(json!({
            "name": " Baked Potato ",
            "tool": "Oven",
            "recovery": 55,
            "bonus": "Butter",
        }));

        assert_eq!(record.name(), "Baked Potato");
        assert_eq!(record.tool(), "Oven");
        assert_eq!(record.recovery(), "55");
        assert_eq!(record.bonus(), "Butter");
    }

    #[test]
    fn test_record_from_non_object_is_empty() {
        let record = RecipeRecord::from_value(json!("not a record"));
        assert_eq!(record.name(), "");
        assert!(record.structured_ingredients().is_none());
    }

    #[test]
    fn test_legacy_tool_key() {
        let record = RecipeRecord::from_value(json!({ "utensil": "Frying Pan" }));
        assert_eq!(record.tool(), "Frying Pan");
    }

    #[test]
    fn test_tool_key_priority() {
        let record = RecipeRecord::from_value(json!({
            "tool": "Pot",
            "utensil": "Frying Pan",
        }));
        assert_eq!(record.tool(), "Pot");
    }

    #[test]
    fn test_missing_fields_read_as_empty() {
        let record = RecipeRecord::from_value(json!({}));
        assert_eq!(record.name(), "");
        assert_eq!(record.tool(), "");
        assert_eq!(record.bonus(), "");
        assert_eq!(record.number(), "");
    }

    #[test]
    fn test_structured_ingredients_requires_array() {
        let record = RecipeRecord::from_value(json!({ "ingredients": "Potato" }));
        assert!(record.structured_ingredients().is_none());

        let record = RecipeRecord::from_value(json!({ "ingredients": [] }));
        assert_eq!(record.structured_ingredients().unwrap().len(), 0);
    }

    #[test]
    fn test_star_prices_cover_every_level() {
        let record = RecipeRecord::from_value(json!({
            "prices": { "0.5": "90", "3.0": 410 },
        }));

        let prices = record.star_prices();
        assert_eq!(prices.len(), STAR_LEVELS.len());
        assert_eq!(prices[0].star, "0.5");
        assert_eq!(prices[0].value, "90");
        assert_eq!(prices[5].star, "3.0");
        assert_eq!(prices[5].value, "410");
        assert_eq!(prices[9].value, "");
    }

    #[test]
    fn test_star_prices_without_prices_field() {
        let record = RecipeRecord::from_value(json!({ "name": "Salad" }));
        let prices = record.star_prices();
        assert_eq!(prices.len(), STAR_LEVELS.len());
        assert!(prices.iter().all(|p| p.value.is_empty()));
    }

    #[test]
    fn test_get_exposes_raw_fields() {
        let record = RecipeRecord::from_value(json!({ "name": "Stew", "extra": [1, 2] }));
        assert_eq!(record.get("extra"), Some(&json!([1, 2])));
        assert_eq!(record.get("absent"), None);
    }
}
