//! Error types for Marquee.
//!
//! This module defines the centralized error type [`MarqueeError`] and a type alias
//! [`Result`] used across the crate. Store operations themselves never fail; these
//! errors cover the boundaries around the store (configuration, catalog and theme
//! loading, and the session context).

use thiserror::Error;

/// The main error type for Marquee operations.
///
/// # Examples
///
/// ```
/// use marquee::MarqueeError;
///
/// fn validate_width(width: usize) -> Result<(), MarqueeError> {
///     if width == 0 {
///         return Err(MarqueeError::Config("width must be positive".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_width(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum MarqueeError {
    /// The session store was requested before a session was provided.
    ///
    /// This is a programming-contract violation. Callers should treat it as fatal
    /// rather than attempt recovery.
    #[error("Uninitialized context: the session store was accessed outside of an active session")]
    UninitializedContext,

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The catalog failed validation (duplicate ids within a row, duplicate row ids).
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML document could not be deserialized.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Session state could not be serialized for display.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for Marquee operations.
pub type Result<T> = std::result::Result<T, MarqueeError>;
