//! Error types for the catalog crate.

use thiserror::Error;

/// Errors raised while loading or validating the dish catalog.
///
/// These belong to the boundary: the filter engine itself never errors, so a
/// failure here means the catalog source is unavailable or corrupt and should
/// surface to callers as such.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be found
    #[error("Failed to open catalog file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the catalog file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Catalog file is not a valid JSON array of dish records
    #[error("Invalid catalog JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Two catalog entries share a name
    #[error("Duplicate dish name: {name}")]
    DuplicateDish { name: String },

    /// A dish field had an invalid value
    #[error("Invalid value for {field} on dish {dish}: {value}")]
    InvalidValue {
        dish: String,
        field: String,
        value: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
