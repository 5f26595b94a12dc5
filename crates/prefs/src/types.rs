//! Preference wire types and the tag vocabulary.

use serde::Deserialize;

/// Dietary and budget preferences as submitted by a caller.
///
/// One per filter invocation, with no identity beyond the call. Every field
/// is optional; unknown fields (the menu frontend also sends a mood
/// selector) are accepted and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreferenceRequest {
    /// Cultural/religious restriction tags, e.g. "vegetariano".
    #[serde(rename = "preferencias_culturales", default)]
    pub cultural: Vec<String>,

    /// Nutritional tags, e.g. "bajo_grasa".
    #[serde(rename = "etiquetas_nutricionales", default)]
    pub nutritional: Vec<String>,

    /// Price ceiling; absent means the default of 100.
    #[serde(rename = "presupuesto", default)]
    pub budget: Option<f64>,
}

/// Cultural/religious exclusion tags.
///
/// Each tag carries a forbidden-ingredient rule in the filter pipeline; a
/// dish matching any active tag's rule is excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CulturalTag {
    Vegetarian,
    Vegan,
    NoPork,
    NoSeafood,
}

impl CulturalTag {
    /// Parse a wire tag value.
    ///
    /// Unrecognized tags map to `None` and are skipped by the profile
    /// builder rather than rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "vegetariano" => Some(Self::Vegetarian),
            "vegano" => Some(Self::Vegan),
            "sin_cerdo" => Some(Self::NoPork),
            "sin_mariscos" => Some(Self::NoSeafood),
            _ => None,
        }
    }

    /// The wire spelling of this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vegetarian => "vegetariano",
            Self::Vegan => "vegano",
            Self::NoPork => "sin_cerdo",
            Self::NoSeafood => "sin_mariscos",
        }
    }
}

/// Nutritional inclusion tags.
///
/// A requested tag is a condition the dish must satisfy; all requested tags
/// must hold for a dish to survive.
///
/// "vegano" exists both here and as a [`CulturalTag`], with identical
/// semantics. They stay separate rule entries on purpose: either path can
/// independently disqualify a dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NutritionTag {
    LowFat,
    HighProtein,
    GlutenFree,
    Vegan,
}

impl NutritionTag {
    /// Parse a wire tag value; unrecognized tags map to `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "bajo_grasa" => Some(Self::LowFat),
            "alto_proteina" => Some(Self::HighProtein),
            "sin_gluten" => Some(Self::GlutenFree),
            "vegano" => Some(Self::Vegan),
            _ => None,
        }
    }

    /// The wire spelling of this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LowFat => "bajo_grasa",
            Self::HighProtein => "alto_proteina",
            Self::GlutenFree => "sin_gluten",
            Self::Vegan => "vegano",
        }
    }
}
