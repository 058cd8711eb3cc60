use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::record::{RecipeRecord, INGREDIENT_FIELDS};
use crate::normalize::normalize_value;

/// One ingredient slot a recipe needs filled.
///
/// `main` is the preferred ingredient and is never empty; `alternatives`
/// lists acceptable stand-ins in substitution-preference order (the first
/// owned alternative is the one used).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientRequirement {
    pub main: String,
    #[serde(default)]
    pub alternatives: Vec<String>,
}

/// The ordered ingredient requirements of a single recipe, plus the
/// display-only bonus entry.
///
/// A profile is the one canonical shape the rest of the engine sees: both
/// raw record shapes normalize into it, and downstream code never learns
/// which shape a record used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredientProfile {
    pub requirements: Vec<IngredientRequirement>,
    /// Free-form display string; never participates in craftability or
    /// filtering.
    pub bonus: Option<String>,
}

impl RecipeIngredientProfile {
    /// Derives a profile from a raw recipe record.
    ///
    /// A record with a structured `ingredients` array is read directly:
    /// entries whose main name is empty are dropped, and a malformed
    /// alternatives field degrades to no alternatives. Without a structured
    /// array, the five positional ingredient fields are read in order; that
    /// path never produces alternatives. A record with neither shape yields
    /// an empty profile.
    ///
    /// Extraction depends only on the record: the same record always yields
    /// the same profile.
    pub fn extract(record: &RecipeRecord) -> Self {
        let requirements = match record.structured_ingredients() {
            Some(entries) => structured_requirements(entries),
            None => flat_requirements(record),
        };

        let bonus_text = record.bonus();
        let bonus = (!bonus_text.is_empty()).then_some(bonus_text);

        RecipeIngredientProfile { requirements, bonus }
    }

    /// Number of requirement slots.
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    /// True when the recipe has no extractable requirements.
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

fn structured_requirements(entries: &[Value]) -> Vec<IngredientRequirement> {
    entries.iter().filter_map(requirement_from_entry).collect()
}

fn requirement_from_entry(entry: &Value) -> Option<IngredientRequirement> {
    let main = normalize_value(entry.get("main"));
    if main.is_empty() {
        return None;
    }

    let alternatives = entry
        .get("alternatives")
        .and_then(Value::as_array)
        .map(|alts| {
            alts.iter()
                .map(|alt| normalize_value(Some(alt)))
                .filter(|alt| !alt.is_empty())
                .collect()
        })
        .unwrap_or_default();

    Some(IngredientRequirement { main, alternatives })
}

fn flat_requirements(record: &RecipeRecord) -> Vec<IngredientRequirement> {
    INGREDIENT_FIELDS
        .iter()
        .filter_map(|keys| {
            let main = record.text(keys);
            (!main.is_empty()).then_some(IngredientRequirement {
                main,
                alternatives: Vec::new(),
            })
        })
        .collect()
}
