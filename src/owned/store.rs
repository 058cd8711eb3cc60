use camino::{Utf8Path, Utf8PathBuf};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use thiserror::Error;

use super::OwnedIngredientSet;
use crate::normalize::normalize;

/// Errors that can occur when persisting owned state.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to write owned-state file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to serialize owned state: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Durable name → owned map backed by a JSON file.
///
/// The store is an explicit value the caller owns and passes around; the
/// resolution engine never reads it directly. Before resolving, take a
/// [`snapshot`](OwnedStore::snapshot) and hand that to the engine; retake it
/// after every change.
///
/// Loading is tolerant: a missing or unreadable file and malformed JSON all
/// load as an empty map. Writes persist immediately and are the only
/// operations that can fail.
///
/// # Examples
///
/// ```no_run
/// use pantry_craft::OwnedStore;
///
/// let mut store = OwnedStore::load("owned.json");
/// store.set("Potato", true)?;
/// let owned = store.snapshot();
/// assert!(owned.contains("potato"));
/// # Ok::<(), pantry_craft::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct OwnedStore {
    path: Utf8PathBuf,
    owned: BTreeMap<String, bool>,
}

impl OwnedStore {
    /// Loads the store from the given path.
    ///
    /// A missing file or invalid document yields an empty store rather than
    /// an error; corrupted owned state is recoverable by re-marking.
    pub fn load(path: impl Into<Utf8PathBuf>) -> Self {
        let path = path.into();
        let owned = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => BTreeMap::new(),
        };
        OwnedStore { path, owned }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Whether the named ingredient is marked owned.
    ///
    /// Names that normalize to empty are never owned.
    pub fn get(&self, name: &str) -> bool {
        let key = normalize(name);
        if key.is_empty() {
            return false;
        }
        self.owned.get(&key).copied().unwrap_or(false)
    }

    /// Marks an ingredient owned or not and persists immediately.
    ///
    /// Names that normalize to empty are ignored.
    pub fn set(&mut self, name: &str, owned: bool) -> Result<(), StoreError> {
        let key = normalize(name);
        if key.is_empty() {
            return Ok(());
        }
        self.owned.insert(key, owned);
        self.persist()
    }

    /// All names currently marked owned, in sorted order.
    ///
    /// This is the raw-name list handed to
    /// [`OwnedIngredientSet::from_names`].
    pub fn owned_names(&self) -> Vec<String> {
        self.owned
            .iter()
            .filter(|(_, &owned)| owned)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Builds the normalized membership set from the current owned names.
    pub fn snapshot(&self) -> OwnedIngredientSet {
        OwnedIngredientSet::from_names(self.owned_names())
    }

    /// Drops all owned state and removes the backing file.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.owned.clear();
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::IoError(e)),
        }
    }

    fn persist(&self) -> Result<(), StoreError> {
        let payload = serde_json::to_string_pretty(&self.owned)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}
