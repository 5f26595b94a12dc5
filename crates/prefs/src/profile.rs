//! Build a DietProfile from a wire PreferenceRequest.
//!
//! The profile is the filter engine's per-call context: tag strings resolved
//! into typed sets once up front, and the budget default applied, so the
//! rules never re-parse anything.

use crate::types::{CulturalTag, NutritionTag, PreferenceRequest};
use std::collections::HashSet;
use tracing::debug;

/// Budget ceiling applied when a request carries no `presupuesto`.
pub const DEFAULT_BUDGET: f64 = 100.0;

/// Resolved filtering context for one engine invocation.
#[derive(Debug, Clone)]
pub struct DietProfile {
    /// Active cultural exclusions; empty means no cultural rule applies.
    pub cultural: HashSet<CulturalTag>,
    /// Requested nutritional conditions; empty means no nutritional rule applies.
    pub nutrition: HashSet<NutritionTag>,
    /// Inclusive price ceiling.
    pub budget: f64,
}

impl DietProfile {
    /// Resolve a wire request into a profile.
    ///
    /// Unrecognized tags are skipped (permissive-default policy): no rule
    /// branch fires for them, so they can never exclude a dish.
    pub fn from_request(request: &PreferenceRequest) -> Self {
        let mut cultural = HashSet::new();
        for tag in &request.cultural {
            match CulturalTag::parse(tag) {
                Some(parsed) => {
                    cultural.insert(parsed);
                }
                None => debug!("Ignoring unknown cultural tag: {tag}"),
            }
        }

        let mut nutrition = HashSet::new();
        for tag in &request.nutritional {
            match NutritionTag::parse(tag) {
                Some(parsed) => {
                    nutrition.insert(parsed);
                }
                None => debug!("Ignoring unknown nutritional tag: {tag}"),
            }
        }

        Self {
            cultural,
            nutrition,
            budget: request.budget.unwrap_or(DEFAULT_BUDGET),
        }
    }

    /// Profile with no restrictions and the default budget.
    pub fn unrestricted() -> Self {
        Self::from_request(&PreferenceRequest::default())
    }
}
