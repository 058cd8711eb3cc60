//! Craftability resolution.
//!
//! Given a recipe's ingredient profile and the player's owned set, classify
//! every requirement slot and aggregate the result. Resolution is a pure
//! function: nothing is cached, so callers re-resolve whenever the owned
//! set may have changed.

use serde::{Deserialize, Serialize};

use crate::model::RecipeIngredientProfile;
use crate::owned::OwnedIngredientSet;

/// One requirement slot satisfied by a non-main ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    /// The slot's preferred ingredient, which the player does not own.
    pub main: String,
    /// The owned alternative that filled the slot, as listed in the recipe.
    pub used: String,
}

/// The aggregated craftability of one recipe against one owned set.
///
/// Immutable once produced; recompute instead of mutating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftabilityStatus {
    /// Requirement slots with neither main nor any alternative owned.
    pub missing_count: u32,
    /// Substitutions used, in profile order.
    pub used_substitutions: Vec<Substitution>,
}

/// The three-way label the presentation layer displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Craftability {
    /// Every slot satisfied by its main ingredient.
    Craftable,
    /// Every slot satisfied, at least one via an alternative.
    CraftableBySubstitution,
    /// At least one slot unmet.
    NotCraftable { missing: u32 },
}

impl CraftabilityStatus {
    /// Derives the display classification from the raw counts.
    pub fn classification(&self) -> Craftability {
        if self.missing_count > 0 {
            Craftability::NotCraftable {
                missing: self.missing_count,
            }
        } else if !self.used_substitutions.is_empty() {
            Craftability::CraftableBySubstitution
        } else {
            Craftability::Craftable
        }
    }
}

/// Resolves one recipe profile against the owned set.
///
/// Per requirement, in profile order: an owned main satisfies the slot
/// outright; otherwise the first owned alternative (in listed order)
/// satisfies it via substitution; otherwise the slot counts as missing. An
/// empty profile resolves to zero missing, so a recipe with no extractable
/// requirements is trivially craftable.
pub fn resolve(
    profile: &RecipeIngredientProfile,
    owned: &OwnedIngredientSet,
) -> CraftabilityStatus {
    let mut status = CraftabilityStatus::default();

    for requirement in &profile.requirements {
        if owned.contains(&requirement.main) {
            continue;
        }

        match requirement
            .alternatives
            .iter()
            .find(|alt| owned.contains(alt))
        {
            Some(alt) => status.used_substitutions.push(Substitution {
                main: requirement.main.clone(),
                used: alt.clone(),
            }),
            None => status.missing_count += 1,
        }
    }

    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IngredientRequirement;

    fn profile(slots: &[(&str, &[&str])]) -> RecipeIngredientProfile {
        RecipeIngredientProfile {
            requirements: slots
                .iter()
                .map(|(main, alternatives)| IngredientRequirement {
                    main: main.to_string(),
                    alternatives: alternatives.iter().map(|a| a.to_string()).collect(),
                })
                .collect(),
            bonus: None,
        }
    }

    fn owned(names: &[&str]) -> OwnedIngredientSet {
        OwnedIngredientSet::from_names(names.iter().copied())
    }

    #[test]
    fn test_substitution_with_one_slot_missing() {
        let profile = profile(&[("Potato", &["Carrot"]), ("Egg", &[])]);
        let status = resolve(&profile, &owned(&["carrot"]));

        assert_eq!(status.missing_count, 1);
        assert_eq!(
            status.used_substitutions,
            vec![Substitution {
                main: "Potato".to_string(),
                used: "Carrot".to_string(),
            }]
        );
        assert_eq!(
            status.classification(),
            Craftability::NotCraftable { missing: 1 }
        );
    }

    #[test]
    fn test_all_mains_owned_is_craftable() {
        let profile = profile(&[("Potato", &["Carrot"]), ("Egg", &[])]);
        let status = resolve(&profile, &owned(&["potato", "egg"]));

        assert_eq!(status.missing_count, 0);
        assert!(status.used_substitutions.is_empty());
        assert_eq!(status.classification(), Craftability::Craftable);
    }

    #[test]
    fn test_substitution_completes_the_recipe() {
        let profile = profile(&[("Potato", &["Carrot"]), ("Egg", &[])]);
        let status = resolve(&profile, &owned(&["carrot", "egg"]));

        assert_eq!(status.missing_count, 0);
        assert_eq!(
            status.used_substitutions,
            vec![Substitution {
                main: "Potato".to_string(),
                used: "Carrot".to_string(),
            }]
        );
        assert_eq!(
            status.classification(),
            Craftability::CraftableBySubstitution
        );
    }

    #[test]
    fn test_owned_main_records_no_substitution() {
        let profile = profile(&[("Potato", &["Carrot"])]);
        let status = resolve(&profile, &owned(&["potato", "carrot"]));

        assert_eq!(status.missing_count, 0);
        assert!(status.used_substitutions.is_empty());
    }

    #[test]
    fn test_first_owned_alternative_wins() {
        let profile = profile(&[("Potato", &["Carrot", "Pumpkin", "Turnip"])]);
        let status = resolve(&profile, &owned(&["turnip", "pumpkin"]));

        assert_eq!(
            status.used_substitutions,
            vec![Substitution {
                main: "Potato".to_string(),
                used: "Pumpkin".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_profile_is_trivially_craftable() {
        let profile = profile(&[]);
        let status = resolve(&profile, &owned(&["potato"]));

        assert_eq!(status.missing_count, 0);
        assert!(status.used_substitutions.is_empty());
        assert_eq!(status.classification(), Craftability::Craftable);
    }

    #[test]
    fn test_missing_plus_satisfied_equals_total() {
        let profile = profile(&[
            ("Potato", &["Carrot"]),
            ("Egg", &[]),
            ("Milk", &["Soy Milk"]),
            ("Flour", &[]),
        ]);
        let status = resolve(&profile, &owned(&["carrot", "flour"]));

        let satisfied = profile.len() as u32 - status.missing_count;
        assert_eq!(status.missing_count + satisfied, profile.len() as u32);
        assert_eq!(status.missing_count, 2);
        assert_eq!(status.used_substitutions.len(), 1);
    }

    #[test]
    fn test_resolve_is_pure() {
        let profile = profile(&[("Potato", &["Carrot"]), ("Egg", &[])]);
        let owned = owned(&["carrot"]);

        assert_eq!(resolve(&profile, &owned), resolve(&profile, &owned));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let profile = profile(&[("POTATO", &[])]);
        let status = resolve(&profile, &owned(&["Potato"]));
        assert_eq!(status.missing_count, 0);
    }
}
