mod profile;
mod record;

pub use profile::{IngredientRequirement, RecipeIngredientProfile};
pub use record::{RecipeRecord, StarPrice, STAR_LEVELS};
