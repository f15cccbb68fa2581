use actix_cors::Cors;
use actix_web::{middleware, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use risk_engine::RiskEngine;
use risklens_api::{config::Config, configure_app, RateLimiter};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    info!("Starting RiskLens API...");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    info!("Configuration loaded successfully");

    let api_keys = Arc::new(config.api_key_set());
    if api_keys.is_empty() {
        warn!("No API keys configured; every scoring request will be rejected");
    }

    let engine = RiskEngine::new(config.scoring);
    info!(mode = ?engine.mode(), profile = ?engine.profile(), "Risk engine ready");
    let rate_limiter = RateLimiter::new(config.rate_limit.requests_per_minute);

    let server_config = config.server.clone();

    info!(
        "Starting HTTP server on {}:{}",
        server_config.host, server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(rate_limiter.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(middleware::Logger::default())
            .configure(configure_app(engine, api_keys.clone()))
    })
    .workers(server_config.workers)
    .bind((server_config.host.as_str(), server_config.port))
    .with_context(|| format!("Failed to bind {}:{}", server_config.host, server_config.port))?
    .run()
    .await
    .context("HTTP server terminated with an error")
}
