//! Recipe filtering.
//!
//! Two independent predicates (an ingredient-name query and a missing-count
//! filter) plus the aggregate that runs both over a recipe collection. The
//! query contract is exact equality, not substring containment: searching
//! "pot" does not match "Potato".

use crate::craft::{resolve, CraftabilityStatus};
use crate::model::{RecipeIngredientProfile, RecipeRecord};
use crate::normalize::{equals_fold, normalize};
use crate::owned::OwnedIngredientSet;

mod model;

pub use model::{MissingFilter, RecipeMatch};

/// Whether a profile matches a free-text ingredient query.
///
/// The query is normalized first; an empty query matches everything.
/// Otherwise the profile matches iff some requirement's main or one of its
/// alternatives equals the query, case-insensitively. The bonus entry never
/// participates.
pub fn matches_ingredient_query(profile: &RecipeIngredientProfile, query: &str) -> bool {
    let query = normalize(query);
    if query.is_empty() {
        return true;
    }

    profile.requirements.iter().any(|requirement| {
        equals_fold(&requirement.main, &query)
            || requirement
                .alternatives
                .iter()
                .any(|alt| equals_fold(alt, &query))
    })
}

/// Whether a resolved status passes the missing-count filter.
pub fn matches_missing_count(status: &CraftabilityStatus, filter: MissingFilter) -> bool {
    match filter {
        MissingFilter::Any => true,
        MissingFilter::Exactly(count) => status.missing_count == count,
    }
}

/// Filters a recipe collection against both predicates.
///
/// Each record is extracted and resolved fresh against `owned`; a record is
/// kept iff it matches the ingredient query and the missing-count filter.
/// Input order is preserved among kept records. Malformed records degrade to
/// empty profiles: they are vacuously craftable, so they pass
/// `MissingFilter::Exactly(0)` and fail any non-empty query.
pub fn filter_recipes<'a>(
    records: &'a [RecipeRecord],
    owned: &OwnedIngredientSet,
    query: &str,
    missing: MissingFilter,
) -> Vec<RecipeMatch<'a>> {
    records
        .iter()
        .filter_map(|record| {
            let profile = RecipeIngredientProfile::extract(record);
            if !matches_ingredient_query(&profile, query) {
                return None;
            }

            let status = resolve(&profile, owned);
            if !matches_missing_count(&status, missing) {
                return None;
            }

            Some(RecipeMatch {
                record,
                profile,
                status,
            })
        })
        .collect()
}
