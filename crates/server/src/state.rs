//! Shared application state.

use std::sync::Arc;

use anyhow::{Context, Result};
use catalog::Catalog;
use tracing::info;

use super::{config::Config, service::RecommendationService};

/// State shared across handlers.
///
/// Holds the startup catalog snapshot (filtered by the recommendation
/// endpoint) and the catalog path (re-read by the raw listing endpoint on
/// every call). The snapshot is immutable; replacing the catalog means
/// restarting with a new file.
pub struct AppState {
    pub config: Config,
    pub service: RecommendationService,
}

impl AppState {
    pub fn new() -> Result<Arc<Self>> {
        let config = Config::load();

        let catalog = Arc::new(
            Catalog::load_from_file(&config.catalog_path)
                .context("Failed to load the dish catalog at startup")?,
        );
        info!(
            "Catalog ready: {} dishes, {} categories",
            catalog.len(),
            catalog.categories().len()
        );

        let service = RecommendationService::new(catalog);

        Ok(Arc::new(Self { config, service }))
    }
}
