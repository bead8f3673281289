use std::{env, str::FromStr};

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        // POSTGRES_URL is accepted for deployments that predate DATABASE_URL.
        let database_url = ["DATABASE_URL", "POSTGRES_URL"]
            .into_iter()
            .filter_map(&lookup)
            .find(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        Ok(Self {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse_or(&lookup, "PORT", 8080)?,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            acquire_timeout_secs: parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 5)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(
    lookup: impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/stocks")]).unwrap();
        assert_eq!(config.database_url, "postgres://localhost/stocks");
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.acquire_timeout_secs, 5);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        assert_eq!(load(&[]).unwrap_err(), ConfigError::MissingDatabaseUrl);
        assert_eq!(
            load(&[("DATABASE_URL", "  ")]).unwrap_err(),
            ConfigError::MissingDatabaseUrl
        );
    }

    #[test]
    fn postgres_url_is_a_fallback() {
        let config = load(&[("POSTGRES_URL", "postgres://db/stocks")]).unwrap();
        assert_eq!(config.database_url, "postgres://db/stocks");

        let config = load(&[
            ("DATABASE_URL", "postgres://primary/stocks"),
            ("POSTGRES_URL", "postgres://db/stocks"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "postgres://primary/stocks");
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        let err = load(&[("DATABASE_URL", "postgres://x"), ("PORT", "eighty")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "PORT",
                value: "eighty".into()
            }
        );
    }

    #[test]
    fn overrides_are_read() {
        let config = load(&[
            ("DATABASE_URL", "postgres://x"),
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("DB_MAX_CONNECTIONS", "3"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert_eq!(config.max_connections, 3);
    }
}
