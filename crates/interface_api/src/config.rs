//! API configuration

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use serde::Deserialize;

use core_kernel::Timezone;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/insurance";

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL
    pub database_url: String,
    /// Log level, used when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit JSON log lines instead of human-readable ones
    pub log_json: bool,
    /// Timezone whose wall clock is "now" for policy expiry
    pub timezone: Timezone,
    /// Upper bound of the database pool
    pub db_max_connections: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            log_level: "info".to_string(),
            log_json: false,
            timezone: Timezone::default(),
            db_max_connections: 10,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables
    ///
    /// `DATABASE_URL` is honoured when `API_DATABASE_URL` is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        Self::builder()?
            .set_default("database_url", database_url)?
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Builder preloaded with the defaults
    pub fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("database_url", defaults.database_url)?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_json", defaults.log_json)?
            .set_default("timezone", defaults.timezone.name())?
            .set_default("db_max_connections", i64::from(defaults.db_max_connections))
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config: ApiConfig = ApiConfig::builder()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.timezone.name(), "America/Sao_Paulo");
        assert!(!config.log_json);
        assert_eq!(config.db_max_connections, 10);
    }

    #[test]
    fn test_overrides_apply() {
        let config: ApiConfig = ApiConfig::builder()
            .unwrap()
            .set_override("port", 9090)
            .unwrap()
            .set_override("timezone", "America/Manaus")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.timezone.name(), "America/Manaus");
    }

    #[test]
    fn test_unknown_timezone_is_rejected() {
        let result = ApiConfig::builder()
            .unwrap()
            .set_override("timezone", "Mars/Olympus")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize::<ApiConfig>();

        assert!(result.is_err());
    }
}
