pub mod catalog;
pub mod craft;
pub mod ffi;
pub mod filter;
pub mod model;
pub mod normalize;
pub mod owned;

pub use catalog::{
    big_categories, category_slug, load_ingredients, load_recipes, load_recipes_dir, CatalogError,
    CatalogIngredient,
};
pub use craft::{resolve, Craftability, CraftabilityStatus, Substitution};
pub use filter::{
    filter_recipes, matches_ingredient_query, matches_missing_count, MissingFilter, RecipeMatch,
};
pub use model::{IngredientRequirement, RecipeIngredientProfile, RecipeRecord, StarPrice};
pub use owned::{OwnedIngredientSet, OwnedStore, StoreError};

uniffi::setup_scaffolding!();
