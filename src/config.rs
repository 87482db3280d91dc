use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::MarqueeResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub history: HistoryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet time after the last keystroke before a pass runs, in ms.
    pub debounce_ms: u64,
    /// Grace period after focus loss before the panel hides, in ms.
    /// Long enough for a click on a result row to land first.
    pub blur_grace_ms: u64,
    /// Display cap: matches beyond this are counted but not rendered.
    pub max_results: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of recent searches kept.
    pub max_entries: u32,
    /// Store file override; defaults to the per-user store location.
    pub store_file: Option<PathBuf>,
}

#[allow(clippy::derivable_impls)]
impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            history: HistoryConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            blur_grace_ms: 200,
            max_results: 10,
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: 5,
            store_file: None,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                // Fallback: ~ is not expanded by PathBuf, so use dirs::home_dir
                dirs::home_dir()
                    .map(|h| h.join(".config"))
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
            })
            .join("marquee")
            .join("config.toml")
    }

    /// Load config from the default location, or return defaults if missing
    /// or unreadable
    pub fn load() -> Self {
        let path = Self::config_path();

        if path.exists() {
            match Self::load_path(&path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to load config: {}", e);
                    Self::default()
                }
            }
        } else {
            Self::default()
        }
    }

    /// Load config from a specific file, propagating read and parse errors
    pub fn load_path(path: &Path) -> MarqueeResult<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.validate();
        Ok(config)
    }

    /// Validate and clamp config values to acceptable ranges.
    ///
    /// Applied to every file load; callers that override fields afterwards
    /// (CLI flags) re-apply it so all paths accept the same ranges.
    pub fn validate(&mut self) {
        // Clamp debounce to at most 5 seconds
        self.search.debounce_ms = self.search.debounce_ms.clamp(0, 5000);

        // Clamp blur grace to at most 2 seconds
        self.search.blur_grace_ms = self.search.blur_grace_ms.clamp(0, 2000);

        // Clamp max_results to reasonable range (1 - 50)
        self.search.max_results = self.search.max_results.clamp(1, 50);

        // Clamp max_entries to reasonable range (1 - 20)
        self.history.max_entries = self.history.max_entries.clamp(1, 20);
    }

    /// Save config to file
    pub fn save(&self) -> MarqueeResult<()> {
        let path = Self::config_path();

        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::error::MarqueeError::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(&path, content)?;

        Ok(())
    }
}
