//! UniFFI bindings for cross-platform presentation layers.
//!
//! The engine itself is a plain Rust library; this module provides FFI-safe
//! mirrors of its types and exported entry points so non-Rust UIs can load
//! data, resolve craftability, and filter recipes without re-deriving any of
//! it.

use std::sync::{Arc, Mutex, PoisonError};

use crate::catalog::{self, CatalogError, CatalogIngredient};
use crate::craft::{resolve, Craftability, CraftabilityStatus, Substitution};
use crate::filter::{self, MissingFilter};
use crate::model::{IngredientRequirement, RecipeIngredientProfile, RecipeRecord, StarPrice};
use crate::owned::{OwnedIngredientSet, OwnedStore, StoreError};
use camino::{Utf8Path, Utf8PathBuf};

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum CraftError {
    #[error("IO error: {message}")]
    IoError { message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Invalid data: {message}")]
    InvalidData { message: String },

    #[error("Store error: {message}")]
    StoreError { message: String },
}

impl From<CatalogError> for CraftError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::IoError(e) => CraftError::IoError {
                message: e.to_string(),
            },
            CatalogError::ParseError(e) => CraftError::ParseError {
                message: e.to_string(),
            },
            CatalogError::UnexpectedShape(path) => CraftError::InvalidData {
                message: format!("Expected a top-level array in {path}"),
            },
            CatalogError::GlobError(e) => CraftError::IoError {
                message: e.to_string(),
            },
            CatalogError::PatternError(e) => CraftError::IoError {
                message: e.to_string(),
            },
        }
    }
}

impl From<StoreError> for CraftError {
    fn from(e: StoreError) -> Self {
        CraftError::StoreError {
            message: e.to_string(),
        }
    }
}

/// One ingredient requirement slot.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRequirement {
    pub main: String,
    pub alternatives: Vec<String>,
}

impl From<&IngredientRequirement> for FfiRequirement {
    fn from(r: &IngredientRequirement) -> Self {
        FfiRequirement {
            main: r.main.clone(),
            alternatives: r.alternatives.clone(),
        }
    }
}

/// A recipe's extracted ingredient profile.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiProfile {
    pub requirements: Vec<FfiRequirement>,
    /// Display-only bonus entry; never part of craftability or filtering.
    pub bonus: Option<String>,
}

impl From<&RecipeIngredientProfile> for FfiProfile {
    fn from(p: &RecipeIngredientProfile) -> Self {
        FfiProfile {
            requirements: p.requirements.iter().map(FfiRequirement::from).collect(),
            bonus: p.bonus.clone(),
        }
    }
}

/// A requirement slot satisfied by a non-main ingredient.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSubstitution {
    pub main: String,
    pub used: String,
}

impl From<&Substitution> for FfiSubstitution {
    fn from(s: &Substitution) -> Self {
        FfiSubstitution {
            main: s.main.clone(),
            used: s.used.clone(),
        }
    }
}

/// The resolved craftability of one recipe.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCraftabilityStatus {
    pub missing_count: u32,
    pub used_substitutions: Vec<FfiSubstitution>,
}

impl From<&CraftabilityStatus> for FfiCraftabilityStatus {
    fn from(s: &CraftabilityStatus) -> Self {
        FfiCraftabilityStatus {
            missing_count: s.missing_count,
            used_substitutions: s.used_substitutions.iter().map(FfiSubstitution::from).collect(),
        }
    }
}

/// The three-way label the presentation layer displays.
#[derive(Debug, Clone, uniffi::Enum)]
pub enum FfiCraftability {
    Craftable,
    CraftableBySubstitution,
    NotCraftable { missing: u32 },
}

impl From<Craftability> for FfiCraftability {
    fn from(c: Craftability) -> Self {
        match c {
            Craftability::Craftable => FfiCraftability::Craftable,
            Craftability::CraftableBySubstitution => FfiCraftability::CraftableBySubstitution,
            Craftability::NotCraftable { missing } => FfiCraftability::NotCraftable { missing },
        }
    }
}

/// The sale price at one star level.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiStarPrice {
    pub star: String,
    pub value: String,
}

impl From<StarPrice> for FfiStarPrice {
    fn from(p: StarPrice) -> Self {
        FfiStarPrice {
            star: p.star,
            value: p.value,
        }
    }
}

/// One entry of the ingredient catalog.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCatalogIngredient {
    pub id: String,
    pub name: String,
    pub big_category: String,
    pub small_category: String,
    pub seasons: Vec<String>,
    pub obtain_methods: Vec<String>,
    pub obtain_locations: Vec<String>,
    pub owned: bool,
}

impl From<CatalogIngredient> for FfiCatalogIngredient {
    fn from(i: CatalogIngredient) -> Self {
        FfiCatalogIngredient {
            id: i.id,
            name: i.name,
            big_category: i.big_category,
            small_category: i.small_category,
            seasons: i.seasons,
            obtain_methods: i.obtain_methods,
            obtain_locations: i.obtain_locations,
            owned: i.owned,
        }
    }
}

/// Missing-count filter selection.
#[derive(Debug, Clone, uniffi::Enum)]
pub enum FfiMissingFilter {
    Any,
    Exactly { count: u32 },
}

impl From<FfiMissingFilter> for MissingFilter {
    fn from(f: FfiMissingFilter) -> Self {
        match f {
            FfiMissingFilter::Any => MissingFilter::Any,
            FfiMissingFilter::Exactly { count } => MissingFilter::Exactly(count),
        }
    }
}

/// FFI-safe representation of a loaded recipe record.
#[derive(uniffi::Object)]
pub struct FfiRecipe {
    inner: RecipeRecord,
}

#[uniffi::export]
impl FfiRecipe {
    /// The recipe's display name; empty when the record has none.
    pub fn name(&self) -> String {
        self.inner.name()
    }

    /// The cooking tool the recipe needs.
    pub fn tool(&self) -> String {
        self.inner.tool()
    }

    /// The recovery amount the dish restores.
    pub fn recovery(&self) -> String {
        self.inner.recovery()
    }

    /// The record's catalogue number.
    pub fn number(&self) -> String {
        self.inner.number()
    }

    /// The recipe's image reference.
    pub fn image(&self) -> String {
        self.inner.image()
    }

    /// The sale price at every star level, lowest to highest.
    pub fn star_prices(&self) -> Vec<FfiStarPrice> {
        self.inner
            .star_prices()
            .into_iter()
            .map(FfiStarPrice::from)
            .collect()
    }

    /// The extracted ingredient profile, including the bonus entry.
    pub fn profile(&self) -> FfiProfile {
        FfiProfile::from(&RecipeIngredientProfile::extract(&self.inner))
    }

    /// Resolves craftability against the given owned-ingredient names.
    pub fn resolve(&self, owned_names: Vec<String>) -> FfiCraftabilityStatus {
        let owned = OwnedIngredientSet::from_names(owned_names);
        let profile = RecipeIngredientProfile::extract(&self.inner);
        FfiCraftabilityStatus::from(&resolve(&profile, &owned))
    }

    /// The three-way classification against the given owned names.
    pub fn craftability(&self, owned_names: Vec<String>) -> FfiCraftability {
        let owned = OwnedIngredientSet::from_names(owned_names);
        let profile = RecipeIngredientProfile::extract(&self.inner);
        resolve(&profile, &owned).classification().into()
    }

    /// Whether the recipe matches an exact ingredient-name query.
    pub fn matches_query(&self, query: String) -> bool {
        let profile = RecipeIngredientProfile::extract(&self.inner);
        filter::matches_ingredient_query(&profile, &query)
    }
}

impl FfiRecipe {
    fn new(inner: RecipeRecord) -> Self {
        FfiRecipe { inner }
    }
}

/// FFI-safe handle on a durable owned-ingredient store.
///
/// UniFFI hands out shared references, so the store sits behind a mutex;
/// the engine itself stays lock-free and consumes plain name lists.
#[derive(uniffi::Object)]
pub struct FfiOwnedStore {
    inner: Mutex<OwnedStore>,
}

impl FfiOwnedStore {
    fn lock(&self) -> std::sync::MutexGuard<'_, OwnedStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[uniffi::export]
impl FfiOwnedStore {
    /// Whether the named ingredient is marked owned.
    pub fn get(&self, name: String) -> bool {
        self.lock().get(&name)
    }

    /// Marks an ingredient owned or not; persists immediately.
    pub fn set(&self, name: String, owned: bool) -> Result<(), CraftError> {
        self.lock().set(&name, owned).map_err(CraftError::from)
    }

    /// All names currently marked owned, in sorted order.
    ///
    /// Pass this list to [`filter_recipes`] or [`FfiRecipe::resolve`].
    pub fn owned_names(&self) -> Vec<String> {
        self.lock().owned_names()
    }

    /// Drops all owned state and removes the backing file.
    pub fn clear(&self) -> Result<(), CraftError> {
        self.lock().clear().map_err(CraftError::from)
    }
}

// ============================================================================
// Exported FFI Functions
// ============================================================================

/// Opens the owned-ingredient store at the given path.
///
/// A missing or corrupt file opens as an empty store.
#[uniffi::export]
pub fn open_owned_store(path: String) -> Arc<FfiOwnedStore> {
    Arc::new(FfiOwnedStore {
        inner: Mutex::new(OwnedStore::load(Utf8PathBuf::from(path))),
    })
}

/// Loads recipe records from one JSON data file.
#[uniffi::export]
pub fn load_recipes(path: String) -> Result<Vec<Arc<FfiRecipe>>, CraftError> {
    let records = catalog::load_recipes(Utf8Path::new(&path))?;
    Ok(records
        .into_iter()
        .map(|record| Arc::new(FfiRecipe::new(record)))
        .collect())
}

/// Loads recipe records from every `*.json` file directly under `dir`.
#[uniffi::export]
pub fn load_recipes_dir(dir: String) -> Result<Vec<Arc<FfiRecipe>>, CraftError> {
    let records = catalog::load_recipes_dir(Utf8Path::new(&dir))?;
    Ok(records
        .into_iter()
        .map(|record| Arc::new(FfiRecipe::new(record)))
        .collect())
}

/// Creates a recipe record from a JSON object string.
///
/// Useful for records obtained from sources other than data files, such as
/// network responses or programmatically generated content.
#[uniffi::export]
pub fn recipe_from_json(json: String) -> Result<Arc<FfiRecipe>, CraftError> {
    let value: serde_json::Value =
        serde_json::from_str(&json).map_err(|e| CraftError::ParseError {
            message: e.to_string(),
        })?;
    if !value.is_object() {
        return Err(CraftError::InvalidData {
            message: "Expected a JSON object".to_string(),
        });
    }
    Ok(Arc::new(FfiRecipe::new(RecipeRecord::from_value(value))))
}

/// Loads the ingredient catalog from one JSON data file.
#[uniffi::export]
pub fn load_ingredients(path: String) -> Result<Vec<FfiCatalogIngredient>, CraftError> {
    let ingredients = catalog::load_ingredients(Utf8Path::new(&path))?;
    Ok(ingredients
        .into_iter()
        .map(FfiCatalogIngredient::from)
        .collect())
}

/// Filters recipes by ingredient query and missing count.
///
/// Both predicates resolve against the given owned names; kept recipes come
/// back in their input order.
#[uniffi::export]
pub fn filter_recipes(
    recipes: Vec<Arc<FfiRecipe>>,
    owned_names: Vec<String>,
    query: String,
    missing: FfiMissingFilter,
) -> Vec<Arc<FfiRecipe>> {
    let owned = OwnedIngredientSet::from_names(owned_names);
    let missing = MissingFilter::from(missing);

    recipes
        .into_iter()
        .filter(|recipe| {
            let profile = RecipeIngredientProfile::extract(&recipe.inner);
            filter::matches_ingredient_query(&profile, &query)
                && filter::matches_missing_count(&resolve(&profile, &owned), missing)
        })
        .collect()
}

/// Turns a category name into a slug safe for page and file names.
#[uniffi::export]
pub fn category_slug(category: String) -> String {
    catalog::category_slug(&category)
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
