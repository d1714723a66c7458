use std::env;

use tokio::net::TcpListener;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::apply_security_headers;

const DEFAULT_DATABASE_URL: &str = "sqlite://calendar.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    /// Production mode turns on HSTS.
    pub production: bool,
    /// Fixed seed for the mock-data random source.
    pub mock_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let origins = var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string());

        Self {
            database_url: var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            max_connections: parse_or("DATABASE_MAX_CONNECTIONS", &var, DEFAULT_MAX_CONNECTIONS),
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or("PORT", &var, DEFAULT_PORT),
            cors_allowed_origins: origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            production: var("RUST_ENV")
                .map(|v| v.to_lowercase() == "production")
                .unwrap_or(false),
            mock_seed: var("MOCK_SEED").and_then(|raw| match raw.trim().parse() {
                Ok(seed) => Some(seed),
                Err(_) => {
                    tracing::warn!("Config: ignoring invalid MOCK_SEED '{}'", raw);
                    None
                }
            }),
        }
    }

    /// Binds `host:port`; `host` may be an IP literal or a resolvable name.
    pub async fn bind(&self) -> std::io::Result<TcpListener> {
        TcpListener::bind((self.host.as_str(), self.port)).await
    }
}

fn parse_or<T>(key: &str, var: &impl Fn(&str) -> Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match var(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Config: invalid {} '{}', using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.database_url, "sqlite://calendar.db");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.port, 8000);
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://localhost:3000", "http://localhost:8000"]
        );
        assert!(!config.production);
        assert_eq!(config.mock_seed, None);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("PORT", "9090"),
            ("HOST", "127.0.0.1"),
            ("RUST_ENV", "Production"),
            ("MOCK_SEED", "12"),
            ("CORS_ALLOWED_ORIGINS", " https://a.example , ,https://b.example"),
        ]);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert!(config.production);
        assert_eq!(config.mock_seed, Some(12));
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = config_from(&[
            ("PORT", "eighty"),
            ("DATABASE_MAX_CONNECTIONS", "-1"),
            ("MOCK_SEED", "abc"),
        ]);
        assert_eq!(config.port, 8000);
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.mock_seed, None);
    }

    #[tokio::test]
    async fn test_binds_hostname() {
        let config = config_from(&[("HOST", "localhost"), ("PORT", "0")]);
        let listener = config.bind().await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn test_binds_ip_literal() {
        let config = config_from(&[("HOST", "127.0.0.1"), ("PORT", "0")]);
        let listener = config.bind().await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }
}
