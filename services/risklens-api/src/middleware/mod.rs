pub mod api_key;
pub mod rate_limit;

pub use api_key::{ApiKeyAuth, ApiKeys, API_KEY_HEADER};
pub use rate_limit::RateLimiter;
