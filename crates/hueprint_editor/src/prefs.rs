//! Persisted user preferences
//!
//! Preferences are plain string pairs. The editor stores the selected
//! preset under [`SELECTED_THEME_KEY`] and the generation API key under
//! [`API_KEY_PREFERENCE`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::error::PreferenceError;

/// Key holding the id of the last preset the user picked
pub const SELECTED_THEME_KEY: &str = "selected-theme";

/// Key holding the API key passed to theme generation
pub const API_KEY_PREFERENCE: &str = "openai_api_key";

/// String key/value store that outlives the session
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;

    /// Forget `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<(), PreferenceError>;

    /// Saved API key; blank values read as unset
    fn api_key(&self) -> Result<Option<String>, PreferenceError> {
        Ok(self
            .get(API_KEY_PREFERENCE)?
            .filter(|key| !key.trim().is_empty()))
    }

    fn set_api_key(&mut self, key: &str) -> Result<(), PreferenceError> {
        self.set(API_KEY_PREFERENCE, key.trim())
    }

    fn clear_api_key(&mut self) -> Result<(), PreferenceError> {
        self.remove(API_KEY_PREFERENCE)
    }
}

/// In-memory store, for tests and ephemeral sessions
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferences {
    values: FxHashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PreferenceError> {
        self.values.remove(key);
        Ok(())
    }
}

/// Store backed by a TOML file of string pairs.
///
/// The file is read on every `get` and rewritten on every `set`; a missing
/// file reads as empty.
#[derive(Clone, Debug)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, values: &BTreeMap<String, String>) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, toml::to_string(values)?)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self.read()?;
        values.insert(key.to_string(), value.to_string());
        self.write(&values)?;
        tracing::debug!(key, path = %self.path.display(), "saved preference");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PreferenceError> {
        let mut values = self.read()?;
        if values.remove(key).is_some() {
            self.write(&values)?;
            tracing::debug!(key, path = %self.path.display(), "removed preference");
        }
        Ok(())
    }
}
