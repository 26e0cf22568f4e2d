//! Error types for the doctor locator.
//!
//! This module defines the centralized error type [`LocatorError`] and a type alias
//! [`Result`] used throughout the crate. Errors are implemented with `thiserror`.
//!
//! Most of these never reach the page: the block controller catches search
//! failures and degrades to an empty result set. They surface from the
//! loading paths (configuration, labels, directory files) where the caller
//! decides how to fall back.

use thiserror::Error;

/// The main error type for doctor locator operations.
///
/// # Examples
///
/// ```
/// use doctor_locator::LocatorError;
///
/// fn read_directory() -> Result<(), LocatorError> {
///     Err(LocatorError::Storage("directory file is truncated".to_string()))
/// }
///
/// assert!(read_directory().is_err());
/// ```
#[derive(Debug, Error)]
pub enum LocatorError {
    /// Reading or writing the doctor directory failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A directory or configuration payload was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A label set could not be read or parsed.
    #[error("Labels error: {0}")]
    Labels(String),

    /// The search provider rejected a query.
    ///
    /// Raised by [`SearchProvider`](crate::search::SearchProvider)
    /// implementations; the block controller logs it and renders the empty state.
    #[error("Search error: {0}")]
    Search(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for doctor locator operations.
pub type Result<T> = std::result::Result<T, LocatorError>;
