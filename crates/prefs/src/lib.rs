//! # Prefs Crate
//!
//! Preference handling for the dish recommendation engine.
//!
//! ## Components
//!
//! - **types**: The `PreferenceRequest` wire object and the typed tag
//!   vocabulary (`CulturalTag`, `NutritionTag`)
//! - **profile**: `DietProfile`, the resolved per-call context handed to
//!   the filter pipeline
//!
//! ## Example Usage
//!
//! ```ignore
//! use prefs::{DietProfile, PreferenceRequest};
//!
//! let request: PreferenceRequest = serde_json::from_str(body)?;
//! let profile = DietProfile::from_request(&request);
//!
//! assert_eq!(profile.budget, 100.0); // default when presupuesto is absent
//! ```

// Public modules
pub mod types;
pub mod profile;

// Re-export commonly used types
pub use profile::{DietProfile, DEFAULT_BUDGET};
pub use types::{CulturalTag, NutritionTag, PreferenceRequest};
