use config::{ConfigError, Environment};
use risk_engine::EngineConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub rate_limit: RateLimitConfig,
    pub scoring: EngineConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AuthConfig {
    /// Partner credentials accepted in the `X-API-Key` header
    pub api_keys: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RateLimitConfig {
    pub requests_per_minute: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            // Server defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.workers", 4)?
            // No keys unless configured
            .set_default("auth.api_keys", Vec::<String>::new())?
            .set_default("rate_limit.requests_per_minute", 600)?
            // Scoring defaults
            .set_default("scoring.mode", "strict")?
            .set_default("scoring.profile", "b")?
            .set_default("scoring.limits.amount_ceiling", 10_000_000.0)?
            .set_default("scoring.limits.max_payment_delay_days", 365)?;

        builder = builder.add_source(Environment::with_prefix("RISKLENS").separator("__"));

        // Override from environment variables
        if let Ok(port) = env::var("SERVICE_PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        if let Ok(keys) = env::var("RISKLENS_API_KEYS") {
            builder = builder.set_override("auth.api_keys", parse_key_list(&keys))?;
        }

        builder.build()?.try_deserialize::<Self>()?.validate()
    }

    /// Reject settings the HTTP server would otherwise panic on
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.server.workers == 0 {
            return Err(ConfigError::Message(
                "server.workers must be at least 1".to_string(),
            ));
        }

        Ok(self)
    }

    pub fn api_key_set(&self) -> HashSet<String> {
        self.auth.api_keys.iter().cloned().collect()
    }
}

fn parse_key_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use risk_engine::{ValidationMode, WeightProfile};

    #[test]
    fn test_parse_key_list() {
        let keys = parse_key_list(" risklens-demo-key, ,risklens-partner-key,");
        assert_eq!(keys, vec!["risklens-demo-key", "risklens-partner-key"]);
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_env().unwrap();

        assert_eq!(config.scoring.mode, ValidationMode::Strict);
        assert_eq!(config.scoring.profile, WeightProfile::Balanced);
        assert_eq!(config.scoring.limits.amount_ceiling, Some(10_000_000.0));
        assert_eq!(config.scoring.limits.max_payment_delay_days, Some(365));
        assert!(config.rate_limit.requests_per_minute > 0);
    }

    #[test]
    fn test_zero_workers_is_rejected() {
        let mut config = Config::from_env().unwrap();
        config.server.workers = 0;

        let err = config.clone().validate().unwrap_err();
        assert!(matches!(err, ConfigError::Message(ref msg) if msg.contains("server.workers")));

        config.server.workers = 1;
        assert_eq!(config.validate().unwrap().server.workers, 1);
    }
}
