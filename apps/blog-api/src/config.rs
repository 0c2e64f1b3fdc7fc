//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use blog_infra::DatabaseConfig;

use crate::telemetry::TelemetryConfig;

const DEFAULT_DATABASE_URL: &str = "sqlite://database.db?mode=rwc";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(5000),
            database: Self::database_from_env(),
            telemetry: TelemetryConfig::from_env(),
        }
    }

    /// Pooling is opt-in: it is enabled only when DB_MAX_CONNECTIONS is set.
    fn database_from_env() -> DatabaseConfig {
        let url = env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let mut database = DatabaseConfig::new(url);

        if let Some(secs) = parse_var::<u64>("DB_CONNECT_TIMEOUT_SECS") {
            database.connect_timeout = Duration::from_secs(secs);
        }

        match parse_var::<u32>("DB_MAX_CONNECTIONS") {
            Some(max) if max > 0 => {
                let min = parse_var("DB_MIN_CONNECTIONS").unwrap_or(1);
                database.with_pool(max, min)
            }
            _ => database,
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
