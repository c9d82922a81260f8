//! Key-value preference persistence.
//!
//! The page persists a single preference (the theme) but the store is a
//! plain string map so nothing here knows about themes.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::PortfolioResult;

/// File name used by [`FilePreferences`] inside its data directory
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Persistent string preferences
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> PortfolioResult<()>;
}

/// Volatile store, used in tests and when no data directory is available
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store
    pub fn with(key: &str, value: &str) -> Self {
        let mut values = BTreeMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> PortfolioResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON-file backed store.
///
/// The whole map is rewritten on every `set`. A missing file starts empty;
/// an unreadable one is logged and also starts empty so a corrupt file can
/// never keep the page from loading.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Open (or lazily create) `preferences.json` inside `data_dir`
    pub fn open(data_dir: impl AsRef<Path>) -> Self {
        let path = data_dir.as_ref().join(PREFERENCES_FILE);

        let values = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(values) => values,
                Err(e) => {
                    tracing::warn!("Ignoring unreadable preferences at {:?}: {}", path, e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!("Failed to read preferences at {:?}: {}", path, e);
                BTreeMap::new()
            }
        };

        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> PortfolioResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> PortfolioResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }
}
