//! Budget ceiling rule.
//!
//! This is typically the last filter in the pipeline, though stage order
//! never changes which dishes survive.

use crate::traits::DishFilter;
use anyhow::Result;
use catalog::Dish;
use prefs::DietProfile;

/// Removes dishes priced above the profile's budget ceiling.
///
/// The ceiling is inclusive: a dish priced exactly at the budget passes.
/// Prices missing from the catalog default to 0 at parse time, so such
/// dishes always pass.
pub struct BudgetCeilingFilter;

impl DishFilter for BudgetCeilingFilter {
    fn name(&self) -> &str {
        "BudgetCeilingFilter"
    }

    fn apply<'a>(&self, dishes: Vec<&'a Dish>, profile: &DietProfile) -> Result<Vec<&'a Dish>> {
        let filtered: Vec<&Dish> = dishes
            .into_iter()
            .filter(|dish| dish.price <= profile.budget)
            .collect();
        Ok(filtered)
    }
}
