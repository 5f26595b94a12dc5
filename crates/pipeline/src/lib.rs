//! Filtering pipeline for dish recommendations.
//!
//! This crate provides:
//! - DishFilter trait and implementations for the three rule families
//! - FilterPipeline for composing filters
//! - `recommend_dishes`, the one-call entry point used by the boundary
//!
//! ## Architecture
//! The pipeline processes the catalog in stages:
//! 1. Cultural/religious exclusion (reject on any forbidden ingredient)
//! 2. Nutritional tag inclusion (every requested tag must hold)
//! 3. Budget ceiling (inclusive price cap, default 100)
//!
//! Each stage is an independent pure predicate over a single dish, so stage
//! order only affects how early a dish drops out, never which dishes
//! survive. The engine performs no I/O, holds no state, and never mutates
//! the catalog; a single immutable snapshot may be filtered concurrently by
//! any number of callers.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::recommend_dishes;
//!
//! let matches = recommend_dishes(catalog.dishes(), &request)?;
//! for dish in matches {
//!     println!("{} (S/ {})", dish.name, dish.price);
//! }
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;

// Re-export main types
pub use filter_pipeline::FilterPipeline;
pub use traits::DishFilter;

use anyhow::Result;
use catalog::Dish;
use filters::{BudgetCeilingFilter, CulturalExclusionFilter, NutritionTagFilter};
use prefs::{DietProfile, PreferenceRequest};

/// The production pipeline: cultural exclusion, nutritional tags, budget.
pub fn standard_pipeline() -> FilterPipeline {
    FilterPipeline::new()
        .add_filter(CulturalExclusionFilter)
        .add_filter(NutritionTagFilter)
        .add_filter(BudgetCeilingFilter)
}

/// Filter `dishes` against `request`.
///
/// Returns references into `dishes`, preserving their relative order. An
/// empty request means no cultural or nutritional rule applies and the
/// default budget ceiling of 100 is used.
pub fn recommend_dishes<'a>(
    dishes: &'a [Dish],
    request: &PreferenceRequest,
) -> Result<Vec<&'a Dish>> {
    let profile = DietProfile::from_request(request);
    standard_pipeline().apply(dishes.iter().collect(), &profile)
}
