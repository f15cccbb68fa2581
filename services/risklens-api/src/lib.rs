pub mod config;
pub mod errors;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;

// Re-exports for convenience
pub use handlers::configure_app;
pub use middleware::{ApiKeyAuth, ApiKeys, RateLimiter};
