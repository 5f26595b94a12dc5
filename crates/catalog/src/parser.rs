//! Parser for the dish catalog file.
//!
//! The catalog is a single JSON array of dish records. Missing fields fall
//! back to neutral defaults (empty ingredient list, empty description, zero
//! calories and price) instead of erroring; only a missing file or malformed
//! JSON is a failure.

use crate::error::{CatalogError, Result};
use crate::types::Dish;
use std::fs;
use std::path::Path;

/// Decode a JSON array of dish records, preserving their order.
pub fn parse_dishes(json: &str) -> Result<Vec<Dish>> {
    let dishes = serde_json::from_str(json)?;
    Ok(dishes)
}

/// Read and decode a catalog file.
pub fn read_dishes(path: &Path) -> Result<Vec<Dish>> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let contents = fs::read_to_string(path)?;
    parse_dishes(&contents)
}
