//! # Catalog Crate
//!
//! This crate handles loading and indexing the dish catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Dish, Catalog, CatalogStats)
//! - **parser**: Parse the JSON catalog file into Rust structs
//! - **index**: Validate and build the catalog with its lookups
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! // Load the entire catalog
//! let catalog = Catalog::load_from_file(Path::new("data/platillos.json"))?;
//!
//! // Query data
//! let dish = catalog.get("Ceviche clásico").unwrap();
//! let marino = catalog.by_category("marino");
//!
//! println!("{} costs S/ {}", dish.name, dish.price);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Catalog, CatalogStats, Dish};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup_by_name() {
        let catalog = Catalog::from_dishes(vec![
            Dish {
                name: "Ceviche clásico".to_string(),
                ingredients: vec!["pescado".to_string(), "limón".to_string()],
                price: 35.0,
                ..Dish::default()
            },
            Dish {
                name: "Causa limeña".to_string(),
                price: 25.0,
                ..Dish::default()
            },
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        let dish = catalog.get("Causa limeña").unwrap();
        assert_eq!(dish.price, 25.0);
        assert!(catalog.get("Ajiaco").is_none());
    }

    #[test]
    fn test_dishes_keep_file_order() {
        let catalog = Catalog::from_dishes(vec![
            Dish {
                name: "B".to_string(),
                ..Dish::default()
            },
            Dish {
                name: "A".to_string(),
                ..Dish::default()
            },
        ])
        .unwrap();

        let names: Vec<&str> = catalog.dishes().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_dish_serializes_with_wire_keys() {
        let dish = Dish {
            name: "Falafel".to_string(),
            ingredients: vec!["garbanzos".to_string()],
            description: "Croquetas de garbanzo".to_string(),
            calories: 290,
            price: 24.0,
            ..Dish::default()
        };

        let json = serde_json::to_value(&dish).unwrap();
        assert_eq!(json["name"], "Falafel");
        assert_eq!(json["ingredientes"][0], "garbanzos");
        assert_eq!(json["descripcion"], "Croquetas de garbanzo");
        assert_eq!(json["calorias"], 290);
        assert_eq!(json["precio"], 24.0);
        // Absent optional metadata stays off the wire entirely
        assert!(json.get("categoria").is_none());
    }
}
