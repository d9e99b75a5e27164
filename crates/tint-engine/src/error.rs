//! Error types for tint.
//!
//! The color pipeline itself never fails. These errors only surface at the
//! boundaries: parsing override assignments, loading configuration, and
//! serializing exports.

use thiserror::Error;
use tint_color::ParseColorError;

/// Main error type for tint operations.
#[derive(Error, Debug)]
pub enum TintError {
    /// A token name outside the fixed eleven
    #[error("unknown token name: {0:?}")]
    UnknownToken(String),

    /// An override assignment that is not `name=color`
    #[error("invalid override {0:?}: expected name=#rrggbb")]
    InvalidOverride(String),

    /// Strict color parsing rejected the input
    #[error(transparent)]
    InvalidColor(#[from] ParseColorError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for the expected shape
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using [`TintError`].
pub type Result<T> = std::result::Result<T, TintError>;
