//! Filter implementations for the dish pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline, one per rule family.

pub mod budget;
pub mod cultural;
pub mod nutrition;

// Re-export for convenience
pub use budget::BudgetCeilingFilter;
pub use cultural::CulturalExclusionFilter;
pub use nutrition::NutritionTagFilter;

use catalog::Dish;

/// Exact-token membership: does the dish list any ingredient from `set`?
///
/// Matching is whole-token, never substring, so "pan" does not match
/// "panceta".
pub(crate) fn contains_any(dish: &Dish, set: &[&str]) -> bool {
    dish.ingredients
        .iter()
        .any(|ingredient| set.contains(&ingredient.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_any_is_whole_token() {
        let dish = Dish {
            name: "Sandwich".to_string(),
            ingredients: vec!["panceta".to_string()],
            ..Dish::default()
        };

        assert!(!contains_any(&dish, &["pan"]));
        assert!(contains_any(&dish, &["panceta"]));
    }
}
