//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::traits::DishFilter;
use anyhow::Result;
use catalog::Dish;
use prefs::DietProfile;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(CulturalExclusionFilter)
///     .add_filter(NutritionTagFilter)
///     .add_filter(BudgetCeilingFilter);
///
/// let filtered = pipeline.apply(catalog.dishes().iter().collect(), &profile)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn DishFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the DishFilter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl DishFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the dishes.
    ///
    /// ## Algorithm
    /// 1. Start with the input dishes
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set
    ///
    /// The output is always a subsequence of the input: filters only drop
    /// dishes, never reorder, duplicate, or insert them.
    ///
    /// # Arguments
    /// * `dishes` - The dishes to filter
    /// * `profile` - Resolved preferences for filtering decisions
    ///
    /// # Returns
    /// * `Ok(Vec<&Dish>)` - The dishes surviving all filters
    /// * `Err` - If any filter fails
    pub fn apply<'a>(
        &self,
        dishes: Vec<&'a Dish>,
        profile: &DietProfile,
    ) -> Result<Vec<&'a Dish>> {
        let mut current = dishes;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, profile)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::CulturalExclusionFilter;
    use prefs::PreferenceRequest;

    fn dish(name: &str, ingredients: &[&str]) -> Dish {
        Dish {
            name: name.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            ..Dish::default()
        }
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let profile = DietProfile::unrestricted();

        let ceviche = dish("Ceviche", &["pescado"]);
        let falafel = dish("Falafel", &["garbanzos"]);

        let filtered = pipeline.apply(vec![&ceviche, &falafel], &profile).unwrap();
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_single_filter() {
        let profile = DietProfile::from_request(&PreferenceRequest {
            cultural: vec!["sin_mariscos".to_string()],
            ..PreferenceRequest::default()
        });

        let pipeline = FilterPipeline::new().add_filter(CulturalExclusionFilter);

        let ceviche = dish("Ceviche", &["pescado"]);
        let falafel = dish("Falafel", &["garbanzos"]);

        let filtered = pipeline.apply(vec![&ceviche, &falafel], &profile).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Falafel");
    }
}
