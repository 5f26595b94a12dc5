//! Nutritional inclusion rules.
//!
//! Unlike the cultural rules, these are positive conditions: every requested
//! tag must hold for the dish to survive.

use crate::filters::contains_any;
use crate::filters::cultural::VEGAN_FORBIDDEN;
use crate::traits::DishFilter;
use anyhow::Result;
use catalog::Dish;
use prefs::{DietProfile, NutritionTag};

/// Calorie ceiling for the low-fat tag.
const LOW_FAT_MAX_CALORIES: u32 = 300;

/// Description marker that disqualifies a dish from the low-fat tag,
/// matched case-insensitively as a substring.
const FRIED_MARKER: &str = "frito";

/// Ingredient tokens that satisfy the high-protein tag.
const HIGH_PROTEIN_SOURCES: &[&str] = &[
    "carne",
    "pollo",
    "res",
    "pato",
    "huevo",
    "queso",
    "lentejas",
    "garbanzos",
    "pescado",
];

/// Ingredient tokens that carry gluten.
const GLUTEN_SOURCES: &[&str] = &["trigo", "pan", "fideos", "pasta", "harina"];

/// Does the dish satisfy a single nutritional tag's condition?
fn satisfies(dish: &Dish, tag: NutritionTag) -> bool {
    match tag {
        NutritionTag::LowFat => {
            dish.calories <= LOW_FAT_MAX_CALORIES
                && !dish.description.to_lowercase().contains(FRIED_MARKER)
        }
        NutritionTag::HighProtein => contains_any(dish, HIGH_PROTEIN_SOURCES),
        NutritionTag::GlutenFree => !contains_any(dish, GLUTEN_SOURCES),
        NutritionTag::Vegan => !contains_any(dish, VEGAN_FORBIDDEN),
    }
}

/// Keeps only dishes satisfying every requested nutritional tag.
///
/// ## Algorithm
/// For each dish, evaluate every requested tag and AND the verdicts. All
/// tags are checked even after one has failed; the checks are pure, so this
/// accumulate-then-check evaluation is observably identical to
/// short-circuiting.
pub struct NutritionTagFilter;

impl DishFilter for NutritionTagFilter {
    fn name(&self) -> &str {
        "NutritionTagFilter"
    }

    fn apply<'a>(&self, dishes: Vec<&'a Dish>, profile: &DietProfile) -> Result<Vec<&'a Dish>> {
        if profile.nutrition.is_empty() {
            return Ok(dishes);
        }

        let filtered: Vec<&Dish> = dishes
            .into_iter()
            .filter(|dish| {
                profile
                    .nutrition
                    .iter()
                    .fold(true, |all_pass, &tag| satisfies(dish, tag) && all_pass)
            })
            .collect();
        Ok(filtered)
    }
}
