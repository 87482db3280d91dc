//! Error types for Marquee
//!
//! Provides standardized error handling across the library.

use thiserror::Error;

/// Errors that can occur in Marquee
#[derive(Debug, Error)]
pub enum MarqueeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Key-value store encode/persist errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON encode/decode errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Marquee operations
pub type MarqueeResult<T> = Result<T, MarqueeError>;
