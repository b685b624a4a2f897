//! JSON API over the field evaluators.

mod error;
mod handlers;
mod schema;

pub use error::ApiError;
pub use handlers::{grid_response, point_response};
pub use schema::{Bounds, GridRequest, GridResponse, Point, PointRequest, PointResponse};

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Network and asset settings for [`serve`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind: SocketAddr,
    /// Frontend assets served for every path outside the API.
    pub static_dir: Option<PathBuf>,
}

/// Builds the application router.
pub fn create_router(static_dir: Option<PathBuf>) -> Router {
    let api = Router::new()
        .route("/api/calculate", post(handlers::calculate))
        .route("/api/calculate_point", post(handlers::calculate_point))
        .route("/health", get(handlers::health));

    let app = match static_dir {
        Some(dir) => {
            info!("Serving static files from: {}", dir.display());
            api.fallback_service(ServeDir::new(dir))
        }
        None => api,
    };

    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Serves the API until Ctrl-C.
///
/// # Errors
///
/// Fails if the listener cannot bind or the server stops abnormally.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let app = create_router(config.static_dir);

    let listener = TcpListener::bind(config.bind).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
}
