//! Core traits for the filtering pipeline.
//!
//! This module defines the DishFilter trait that allows composable,
//! extensible filters to be applied to the dish catalog.

use anyhow::Result;
use catalog::Dish;
use prefs::DietProfile;

/// Core trait for filtering dishes.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the Vec of borrowed dishes and return the
///   surviving subset in the same relative order
/// - Dishes are passed by reference throughout: the engine never clones or
///   mutates a catalog record
pub trait DishFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of dishes.
    ///
    /// # Arguments
    /// * `dishes` - The dishes to filter (takes ownership of the Vec)
    /// * `profile` - Resolved preferences for this invocation
    ///
    /// # Returns
    /// * `Ok(Vec<&Dish>)` - The dishes that survive this filter
    /// * `Err` - If filtering fails
    fn apply<'a>(&self, dishes: Vec<&'a Dish>, profile: &DietProfile) -> Result<Vec<&'a Dish>>;
}
