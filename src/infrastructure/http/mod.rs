use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{health, news::NewsController};
use crate::infrastructure::config::Config;

/// Build the application router. Exposed separately from the server startup
/// so the e2e suite can serve the same routes on an ephemeral port.
pub fn build_router(news_controller: Arc<NewsController>) -> Router {
    let news_routes = Router::new()
        .route("/news/search", post(NewsController::search))
        .with_state(news_controller);

    Router::new()
        .route("/news/health", get(health::health))
        .merge(news_routes)
        // The browser frontend is served from a different origin.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    news_controller: Arc<NewsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(news_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
