//! Key-value persistence seam and implementations.
//!
//! Mirrors a browser-style string store: string keys, string values, one
//! flat JSON object on disk. Reads are tolerant (missing or corrupt data
//! degrades to empty) and writes are best-effort; callers treat
//! persistence as a convenience, not a guarantee.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::{MarqueeError, MarqueeResult};

/// String-keyed value store.
pub trait KeyValueStore {
    /// Fetch the value for `key`, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`. The in-memory value is updated even when
    /// persistence fails; the error is reported so the caller can log it.
    fn set(&mut self, key: &str, value: String) -> MarqueeResult<()>;
}

/// Store backed by a single JSON object file.
pub struct JsonFileStore {
    entries: HashMap<String, String>,
    path: Option<PathBuf>,
}

impl JsonFileStore {
    /// Open the store at the default per-user location.
    ///
    /// Without a resolvable config directory the store still works, it just
    /// never persists.
    pub fn open_default() -> Self {
        match Self::default_path() {
            Some(path) => Self::open(path),
            None => {
                tracing::warn!("no config directory; store will not persist");
                Self {
                    entries: HashMap::new(),
                    path: None,
                }
            }
        }
    }

    /// Open a store file, tolerating a missing or corrupt file.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = if path.exists() {
            match fs::read_to_string(&path) {
                Ok(contents) => match serde_json::from_str::<HashMap<String, String>>(&contents) {
                    Ok(entries) => entries,
                    Err(e) => {
                        tracing::warn!("corrupt store file {}: {}", path.display(), e);
                        HashMap::new()
                    }
                },
                Err(e) => {
                    tracing::warn!("failed to read store file {}: {}", path.display(), e);
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        Self {
            entries,
            path: Some(path),
        }
    }

    /// Default path under the user config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("marquee").join("store.json"))
    }

    fn persist(&self) -> MarqueeResult<()> {
        let Some(ref path) = self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| MarqueeError::Storage(format!("failed to encode store: {}", e)))?;
        fs::write(path, json)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> MarqueeResult<()> {
        self.entries.insert(key.to_string(), value);
        self.persist()
    }
}

/// In-memory store for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> MarqueeResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
