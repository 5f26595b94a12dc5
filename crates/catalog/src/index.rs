//! Catalog construction: validation, category index, aggregate stats.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::{Catalog, CatalogStats, Dish};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load the catalog from a JSON file.
    ///
    /// This is the main entry point for loading data.
    ///
    /// Steps:
    /// 1. Parse the file into dish records
    /// 2. Validate the records
    /// 3. Build the category index
    /// 4. Compute aggregate statistics
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let dishes = parser::read_dishes(path)?;
        info!("Loaded {} dishes from {}", dishes.len(), path.display());
        Self::from_dishes(dishes)
    }

    /// Build a catalog from already-parsed dishes, preserving their order.
    pub fn from_dishes(dishes: Vec<Dish>) -> Result<Self> {
        validate(&dishes)?;

        let category_index = build_category_index(&dishes);
        let stats = compute_stats(&dishes);

        Ok(Self {
            dishes,
            category_index,
            stats,
        })
    }
}

/// Validate catalog integrity.
///
/// Checks that:
/// - Dish names are unique (the filter engine assumes unique entries)
/// - Prices are finite and non-negative
fn validate(dishes: &[Dish]) -> Result<()> {
    let mut seen = HashSet::new();

    for dish in dishes {
        if !seen.insert(dish.name.as_str()) {
            return Err(CatalogError::DuplicateDish {
                name: dish.name.clone(),
            });
        }
        if !dish.price.is_finite() || dish.price < 0.0 {
            return Err(CatalogError::InvalidValue {
                dish: dish.name.clone(),
                field: "precio".to_string(),
                value: dish.price.to_string(),
            });
        }
    }
    Ok(())
}

/// Map each category to the positions of its dishes, in catalog order.
fn build_category_index(dishes: &[Dish]) -> HashMap<String, Vec<usize>> {
    let mut index: HashMap<String, Vec<usize>> = HashMap::new();
    for (position, dish) in dishes.iter().enumerate() {
        if let Some(category) = &dish.category {
            index.entry(category.clone()).or_default().push(position);
        }
    }
    index
}

fn compute_stats(dishes: &[Dish]) -> CatalogStats {
    let dish_count = dishes.len();
    let (avg_price, avg_calories) = if dish_count > 0 {
        let total_price: f64 = dishes.iter().map(|d| d.price).sum();
        let total_calories: f64 = dishes.iter().map(|d| f64::from(d.calories)).sum();
        (
            total_price / dish_count as f64,
            total_calories / dish_count as f64,
        )
    } else {
        (0.0, 0.0)
    };

    CatalogStats {
        dish_count,
        avg_price,
        avg_calories,
    }
}
