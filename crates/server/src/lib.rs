//! HTTP front end for the dish recommendation engine.
//!
//! ## Components
//!
//! - **service**: RecommendationService, the bridge between the wire types
//!   and the filter pipeline
//! - **routes**: axum handlers for the catalog, recommendation, tip, and
//!   health endpoints
//! - **state**: shared application state (config + catalog snapshot)
//! - **config**: environment-driven configuration
//! - **error**: error-to-status mapping
//!
//! The engine itself lives in the `pipeline` crate; this crate only feeds it
//! decoded requests and serializes its results.

use std::time::Duration;

use anyhow::Result;
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub mod config;
pub mod error;
pub mod routes;
pub mod service;
pub mod state;

pub use service::RecommendationService;

use routes::{health_handler, list_dishes_handler, recommend_handler, tip_handler};
use state::AppState;

pub async fn start_server() -> Result<()> {
    info!("Initializing state...");
    let state = AppState::new()?;

    info!("Starting server...");

    // Permissive CORS for development; the frontend is served separately.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/api/platillos", get(list_dishes_handler))
        .route("/api/recomendar", post(recommend_handler))
        .route("/api/tip", get(tip_handler))
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
