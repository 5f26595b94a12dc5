//! Errors surfaced to HTTP callers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failure categories at the HTTP boundary.
///
/// The filter engine itself never errors; the only real failure mode is the
/// catalog source being unavailable or corrupt, which callers see as a
/// distinct 503.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(#[from] catalog::CatalogError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::CatalogUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_failures_map_to_503() {
        let error = AppError::CatalogUnavailable(catalog::CatalogError::FileNotFound {
            path: "data/platillos.json".to_string(),
        });
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
