//! # Recommendation Service
//!
//! This module coordinates one filter invocation:
//! 1. Resolve the wire request into a DietProfile
//! 2. Run the filter pipeline over the catalog snapshot
//! 3. Log counts and timing
//!
//! The service only ever reads its catalog snapshot and the per-call
//! profile, so any number of invocations may run concurrently without
//! coordination.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use catalog::{Catalog, Dish};
use pipeline::{standard_pipeline, FilterPipeline};
use prefs::{DietProfile, PreferenceRequest};

/// Applies the standard filter pipeline to a shared catalog snapshot.
#[derive(Clone)]
pub struct RecommendationService {
    catalog: Arc<Catalog>,
    filter_pipeline: Arc<FilterPipeline>,
}

impl RecommendationService {
    /// Create a service over a loaded catalog snapshot.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            filter_pipeline: Arc::new(standard_pipeline()),
        }
    }

    /// The catalog snapshot this service filters.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Main entry point: filter the catalog against a preference request.
    ///
    /// # Returns
    /// References into the snapshot, in catalog order.
    pub fn recommend(&self, request: &PreferenceRequest) -> Result<Vec<&Dish>> {
        let start_time = Instant::now();

        let profile = DietProfile::from_request(request);
        let matches = self
            .filter_pipeline
            .apply(self.catalog.dishes().iter().collect(), &profile)
            .context("Failed to apply filters")?;

        info!(
            "Recommended {} of {} dishes (budget: {}) in {:.2?}",
            matches.len(),
            self.catalog.len(),
            profile.budget,
            start_time.elapsed()
        );
        Ok(matches)
    }
}
