//! Static data loading.
//!
//! Recipe records and the ingredient catalog ship as JSON data files (one
//! top-level array per file). Loading is tolerant at the record level:
//! non-object entries are skipped and field problems degrade inside the
//! record accessors. File-level problems (unreadable file, invalid JSON,
//! wrong top-level shape) are real errors for the caller to surface.

use camino::{Utf8Path, Utf8PathBuf};
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::io;
use thiserror::Error;

use crate::model::RecipeRecord;

mod model;

pub use model::CatalogIngredient;

/// Errors that can occur when loading data files.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read data file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse data file: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Expected a top-level array in {0}")]
    UnexpectedShape(Utf8PathBuf),

    #[error("Failed to read data directory: {0}")]
    GlobError(#[from] glob::GlobError),

    #[error("Failed to create glob pattern: {0}")]
    PatternError(#[from] glob::PatternError),
}

fn load_array(path: &Utf8Path) -> Result<Vec<Value>, CatalogError> {
    let contents = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&contents)?;
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(CatalogError::UnexpectedShape(path.to_path_buf())),
    }
}

/// Loads recipe records from one JSON data file.
///
/// The file must hold a top-level array; elements that are not objects are
/// skipped rather than failing the load.
pub fn load_recipes(path: &Utf8Path) -> Result<Vec<RecipeRecord>, CatalogError> {
    Ok(load_array(path)?
        .into_iter()
        .filter(Value::is_object)
        .map(RecipeRecord::from_value)
        .collect())
}

/// Loads recipe records from every `*.json` file directly under `dir`.
///
/// Files are read in lexicographic name order and their records
/// concatenated, so a split data set (`recipes.json`, `recipes-dlc.json`)
/// loads deterministically.
pub fn load_recipes_dir(dir: &Utf8Path) -> Result<Vec<RecipeRecord>, CatalogError> {
    let pattern = dir.join("*.json");

    let mut paths = Vec::new();
    for entry in glob::glob(pattern.as_str())? {
        let path = entry?;
        let path = Utf8PathBuf::from_path_buf(path).map_err(|_| {
            CatalogError::IoError(io::Error::new(
                io::ErrorKind::InvalidData,
                "Path contains invalid UTF-8",
            ))
        })?;
        paths.push(path);
    }
    paths.sort();

    let mut records = Vec::new();
    for path in &paths {
        records.extend(load_recipes(path)?);
    }
    Ok(records)
}

/// Loads the ingredient catalog from one JSON data file.
///
/// Ids are assigned from each entry's position in the array; entries that
/// are not objects or carry no name are dropped without shifting the ids of
/// later entries.
pub fn load_ingredients(path: &Utf8Path) -> Result<Vec<CatalogIngredient>, CatalogError> {
    Ok(load_array(path)?
        .iter()
        .enumerate()
        .filter_map(|(index, value)| CatalogIngredient::from_value(index, value))
        .collect())
}

/// The distinct big categories of a catalog, in first-appearance order.
///
/// Entries without a big category are skipped.
pub fn big_categories(ingredients: &[CatalogIngredient]) -> Vec<String> {
    let mut seen = HashSet::new();
    ingredients
        .iter()
        .map(|ingredient| ingredient.big_category.clone())
        .filter(|category| !category.is_empty() && seen.insert(category.clone()))
        .collect()
}

/// Turns a category name into a slug safe for page and file names.
///
/// Whitespace runs and filesystem-reserved characters become `-`; an empty
/// or whitespace-only category slugs to the empty string.
pub fn category_slug(category: &str) -> String {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let whitespace = Regex::new(r"\s+").unwrap();
    let reserved = Regex::new(r#"[\\/?%*:|"<>]"#).unwrap();

    let slug = whitespace.replace_all(trimmed, "-");
    reserved.replace_all(&slug, "-").into_owned()
}
