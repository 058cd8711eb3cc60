use crate::craft::CraftabilityStatus;
use crate::model::{RecipeIngredientProfile, RecipeRecord};

/// Missing-count filter selection.
///
/// `Any` keeps every recipe; `Exactly(n)` keeps recipes whose resolution is
/// short exactly `n` ingredients (`Exactly(0)` means cookable right now,
/// with or without substitutions).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingFilter {
    #[default]
    Any,
    Exactly(u32),
}

/// A recipe kept by the filter, with the derived state the presentation
/// layer renders alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeMatch<'a> {
    pub record: &'a RecipeRecord,
    pub profile: RecipeIngredientProfile,
    pub status: CraftabilityStatus,
}
