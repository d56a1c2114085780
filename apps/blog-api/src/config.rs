//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use blog_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs the service on the in-memory store.
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .map(|url| {
                let defaults = DatabaseConfig::new(url);
                DatabaseConfig {
                    max_connections: parse(&lookup, "DB_MAX_CONNECTIONS")
                        .unwrap_or(defaults.max_connections),
                    min_connections: parse(&lookup, "DB_MIN_CONNECTIONS")
                        .unwrap_or(defaults.min_connections),
                    connect_timeout: parse(&lookup, "DB_CONNECT_TIMEOUT_SECS")
                        .map(Duration::from_secs)
                        .unwrap_or(defaults.connect_timeout),
                    ..defaults
                }
            });

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse(&lookup, "PORT").unwrap_or(8080),
            database,
        }
    }
}

fn parse<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}
