//! Core domain types for the dish catalog.
//!
//! Defines the Dish record as it appears in the catalog file and on the
//! wire, plus the Catalog container with its derived index and stats.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Dish
// =============================================================================

/// One food item in the catalog.
///
/// Field names follow the catalog file's JSON keys; every field is optional
/// on the wire and falls back to a neutral default when absent. Records are
/// immutable once loaded and pass through the API unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    /// Display name, also the catalog identifier. Older catalog exports
    /// used the key `nombre`, still accepted on input.
    #[serde(default, alias = "nombre")]
    pub name: String,

    /// Ordered ingredient tokens, matched exactly (not by substring) by the
    /// filter rules.
    #[serde(rename = "ingredientes", default)]
    pub ingredients: Vec<String>,

    #[serde(rename = "descripcion", default)]
    pub description: String,

    #[serde(rename = "calorias", default)]
    pub calories: u32,

    #[serde(rename = "precio", default)]
    pub price: f64,

    /// Menu category (e.g. "criollo", "marino"); free-form.
    #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(rename = "imagen", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(
        rename = "tiempo_preparacion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub prep_minutes: Option<u32>,
}

// =============================================================================
// Catalog
// =============================================================================

/// Aggregate statistics computed once when the catalog is built.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CatalogStats {
    pub dish_count: usize,
    pub avg_price: f64,
    pub avg_calories: f64,
}

/// The in-memory dish catalog.
///
/// Owns the dishes in file order and never reorders them; both the filter
/// engine and the API rely on that ordering. A catalog is loaded once and
/// only ever replaced wholesale, never mutated in place.
#[derive(Debug)]
pub struct Catalog {
    pub(crate) dishes: Vec<Dish>,
    /// Dish positions per category, each list in catalog order.
    pub(crate) category_index: HashMap<String, Vec<usize>>,
    pub(crate) stats: CatalogStats,
}

impl Catalog {
    /// All dishes in catalog order.
    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// Look up a dish by name.
    pub fn get(&self, name: &str) -> Option<&Dish> {
        self.dishes.iter().find(|dish| dish.name == name)
    }

    /// All dishes in a category, in catalog order.
    pub fn by_category(&self, category: &str) -> Vec<&Dish> {
        self.category_index
            .get(category)
            .map(|positions| positions.iter().map(|&i| &self.dishes[i]).collect())
            .unwrap_or_default()
    }

    /// Distinct categories present in the catalog.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self.category_index.keys().map(String::as_str).collect();
        categories.sort_unstable();
        categories
    }

    pub fn stats(&self) -> &CatalogStats {
        &self.stats
    }
}
