//! Loading, saving, and mutating the persisted configuration mapping.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::value::{coerce, ConfigValue};

/// In-memory form of the configuration file: a flat mapping from key to
/// scalar value. The B-tree keeps iteration sorted by key, which is the
/// order the `list` table presents.
pub type ConfigMap = BTreeMap<String, ConfigValue>;

/// Built-in default configuration.
///
/// Returned as a fresh map on every call so callers can never mutate a
/// shared instance. This is both the state of a store whose file does not
/// exist yet and the target of `reset`.
pub fn default_config() -> ConfigMap {
    let mut config = ConfigMap::new();
    config.insert(
        "theme".to_string(),
        ConfigValue::Str("default".to_string()),
    );
    config.insert(
        "output_format".to_string(),
        ConfigValue::Str("table".to_string()),
    );
    config.insert("auto_save".to_string(), ConfigValue::Bool(true));
    config.insert("debug".to_string(), ConfigValue::Bool(false));
    config
}

/// Reads and writes the key/value mapping at a fixed path.
///
/// The store is stateless apart from the file it manages: every operation
/// loads the full mapping and mutating operations rewrite it in full.
/// There is no locking; concurrent writers resolve as last writer wins.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store over the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the mapping, or a fresh copy of the defaults if the file does
    /// not exist yet.
    ///
    /// A file that exists but does not parse as a flat object of scalars
    /// is reported as corrupted, never silently replaced by defaults.
    pub fn load(&self) -> Result<ConfigMap, ConfigError> {
        if !self.path.exists() {
            return Ok(default_config());
        }

        let contents =
            fs::read_to_string(&self.path).map_err(|source| ConfigError::Unreadable {
                path: self.path.clone(),
                source,
            })?;

        serde_json::from_str(&contents).map_err(|_| ConfigError::Corrupted {
            path: self.path.clone(),
        })
    }

    /// Serialize the full mapping as indented JSON and overwrite the file,
    /// creating any missing parent directories first.
    pub fn save(&self, config: &ConfigMap) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::WriteFailed {
                path: self.path.clone(),
                source,
            })?;
        }

        let contents =
            serde_json::to_string_pretty(config).map_err(|e| ConfigError::WriteFailed {
                path: self.path.clone(),
                source: io::Error::new(io::ErrorKind::InvalidData, e),
            })?;

        fs::write(&self.path, contents).map_err(|source| ConfigError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }

    /// Coerce `raw`, insert it under `key`, and persist the result.
    ///
    /// Returns the coerced value for display. Prompting for a missing
    /// value is the caller's job; the store always receives raw text.
    pub fn set(&self, key: &str, raw: &str) -> Result<ConfigValue, ConfigError> {
        let mut config = self.load()?;
        let value = coerce(raw);
        config.insert(key.to_string(), value.clone());
        self.save(&config)?;
        Ok(value)
    }

    /// Look up a single key.
    pub fn get(&self, key: &str) -> Result<ConfigValue, ConfigError> {
        let config = self.load()?;
        config
            .get(key)
            .cloned()
            .ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))
    }

    /// Load the full mapping for display.
    pub fn list(&self) -> Result<ConfigMap, ConfigError> {
        self.load()
    }

    /// Discard whatever is persisted and write a fresh copy of the
    /// defaults. Confirmation before calling this is the caller's
    /// responsibility.
    pub fn reset(&self) -> Result<(), ConfigError> {
        self.save(&default_config())
    }
}
