use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use infoflow_api::controllers::news::NewsController;
use infoflow_api::domain::news::NewsService;
use infoflow_api::infrastructure::config::{Config, LogFormat};
use infoflow_api::infrastructure::gnews::GNewsClient;
use infoflow_api::infrastructure::http::start_http_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting InfoFlow News API on {}:{}",
        config.host,
        config.port
    );

    if !config.upstream_enabled() {
        tracing::warn!(
            "GNEWS_API_KEY is missing or the placeholder. Every search will serve the built-in sample data."
        );
    }

    let config = Arc::new(config);

    // Instantiate the upstream client, service and controller
    let gnews_client = Arc::new(GNewsClient::new(config.gnews_api_key.clone()));
    let news_service = Arc::new(NewsService::new(gnews_client));
    let news_controller = Arc::new(NewsController::new(news_service));

    // Start HTTP server with all routes
    start_http_server(config, news_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "infoflow_api=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "infoflow_api=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
