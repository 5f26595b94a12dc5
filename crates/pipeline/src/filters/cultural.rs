//! Cultural and religious exclusion rules.
//!
//! Each tag owns a declarative forbidden-ingredient set; keeping the sets as
//! plain constants makes the rules auditable against the menu vocabulary.

use crate::filters::contains_any;
use crate::traits::DishFilter;
use anyhow::Result;
use catalog::Dish;
use prefs::{CulturalTag, DietProfile};

/// Ingredient tokens a vegetarian dish must not contain.
pub(crate) const VEGETARIAN_FORBIDDEN: &[&str] = &[
    "pollo",
    "carne",
    "res",
    "cerdo",
    "pato",
    "chicharrón",
    "huevo",
    "pescado",
    "mariscos",
];

/// The vegetarian set plus animal-derived products.
///
/// Shared with the nutritional "vegano" tag, which applies the same set
/// through an independent rule entry.
pub(crate) const VEGAN_FORBIDDEN: &[&str] = &[
    "pollo",
    "carne",
    "res",
    "cerdo",
    "pato",
    "chicharrón",
    "huevo",
    "pescado",
    "mariscos",
    "mayonesa",
    "leche",
    "queso",
    "mantequilla",
];

pub(crate) const PORK_FORBIDDEN: &[&str] = &["cerdo", "chicharrón"];

pub(crate) const SEAFOOD_FORBIDDEN: &[&str] =
    &["mariscos", "pescado", "calamar", "pulpo", "conchas"];

fn forbidden_for(tag: CulturalTag) -> &'static [&'static str] {
    match tag {
        CulturalTag::Vegetarian => VEGETARIAN_FORBIDDEN,
        CulturalTag::Vegan => VEGAN_FORBIDDEN,
        CulturalTag::NoPork => PORK_FORBIDDEN,
        CulturalTag::NoSeafood => SEAFOOD_FORBIDDEN,
    }
}

/// Removes dishes containing ingredients forbidden by any active cultural tag.
///
/// ## Algorithm
/// For each dish, evaluate every tag in the profile independently; one
/// forbidden ingredient under one active tag is enough to reject the dish
/// (logical OR across tags). With no active tags this filter is a no-op.
pub struct CulturalExclusionFilter;

impl DishFilter for CulturalExclusionFilter {
    fn name(&self) -> &str {
        "CulturalExclusionFilter"
    }

    fn apply<'a>(&self, dishes: Vec<&'a Dish>, profile: &DietProfile) -> Result<Vec<&'a Dish>> {
        if profile.cultural.is_empty() {
            return Ok(dishes);
        }

        let filtered: Vec<&Dish> = dishes
            .into_iter()
            .filter(|dish| {
                !profile
                    .cultural
                    .iter()
                    .any(|&tag| contains_any(dish, forbidden_for(tag)))
            })
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prefs::PreferenceRequest;

    fn dish(name: &str, ingredients: &[&str]) -> Dish {
        Dish {
            name: name.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            ..Dish::default()
        }
    }

    fn profile(cultural: &[&str]) -> DietProfile {
        DietProfile::from_request(&PreferenceRequest {
            cultural: cultural.iter().map(|s| s.to_string()).collect(),
            ..PreferenceRequest::default()
        })
    }

    #[test]
    fn test_vegetarian_excludes_meat_dishes() {
        let pollo = dish("Aji de gallina", &["pollo", "ají", "pan"]);
        let lentejas = dish("Ensalada de lentejas", &["lentejas", "tomate"]);

        let filter = CulturalExclusionFilter;
        let filtered = filter
            .apply(vec![&pollo, &lentejas], &profile(&["vegetariano"]))
            .unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Ensalada de lentejas");
    }

    #[test]
    fn test_vegan_also_excludes_dairy() {
        let causa = dish("Causa limeña", &["papa", "palta", "mayonesa"]);
        let quinua = dish("Quinua con verduras", &["quinua", "verduras"]);

        let filter = CulturalExclusionFilter;

        // Vegetarian lets mayonnaise through; vegan does not.
        let vegetarian = filter
            .apply(vec![&causa, &quinua], &profile(&["vegetariano"]))
            .unwrap();
        assert_eq!(vegetarian.len(), 2);

        let vegan = filter
            .apply(vec![&causa, &quinua], &profile(&["vegano"]))
            .unwrap();
        assert_eq!(vegan.len(), 1);
        assert_eq!(vegan[0].name, "Quinua con verduras");
    }

    #[test]
    fn test_no_pork_targets_pork_tokens_only() {
        let chicharron = dish("Pan con chicharrón", &["chicharrón", "camote"]);
        let pollo = dish("Pollo a la brasa", &["pollo", "papas"]);

        let filter = CulturalExclusionFilter;
        let filtered = filter
            .apply(vec![&chicharron, &pollo], &profile(&["sin_cerdo"]))
            .unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Pollo a la brasa");
    }

    #[test]
    fn test_no_seafood_covers_squid_and_octopus() {
        let chaufa = dish("Chaufa de mariscos", &["arroz", "calamar", "pulpo"]);
        let tallarin = dish("Tallarín verde", &["fideos", "albahaca"]);

        let filter = CulturalExclusionFilter;
        let filtered = filter
            .apply(vec![&chaufa, &tallarin], &profile(&["sin_mariscos"]))
            .unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Tallarín verde");
    }

    #[test]
    fn test_tags_combine_with_or() {
        let cerdo = dish("Lechón", &["cerdo"]);
        let ceviche = dish("Ceviche", &["pescado", "limón"]);
        let falafel = dish("Falafel", &["garbanzos"]);

        let filter = CulturalExclusionFilter;
        let filtered = filter
            .apply(
                vec![&cerdo, &ceviche, &falafel],
                &profile(&["sin_cerdo", "sin_mariscos"]),
            )
            .unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Falafel");
    }

    #[test]
    fn test_no_active_tags_is_passthrough() {
        let cerdo = dish("Lechón", &["cerdo"]);

        let filter = CulturalExclusionFilter;
        let filtered = filter.apply(vec![&cerdo], &profile(&[])).unwrap();

        assert_eq!(filtered.len(), 1);
    }
}
