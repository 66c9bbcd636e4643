//! Environment-based application configuration.
//!
//! Values are read once at startup (after `dotenvy` has loaded any `.env` file) and passed
//! explicitly to startup code and `AppState`.

use std::{str::FromStr, time::Duration};

use dioxus_logger::tracing::Level;

use crate::server::{
    error::{config::ConfigError, AppError},
    service::bulk::BulkSettings,
};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8091";
const DEFAULT_LOG_LEVEL: Level = Level::DEBUG;
const DEFAULT_BULK_MAX_IN_FLIGHT: usize = 16;
const DEFAULT_BULK_MAX_ITEMS: usize = 1000;
const DEFAULT_ORDER_BULK_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub log_level: Level,

    /// Explicit CORS origins. `None` mirrors the request origin.
    pub cors_allowed_origins: Option<Vec<String>>,

    pub bulk: BulkSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Blank values are treated as unset so that an empty line in `.env` falls back to
    /// the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let database_url = get("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let log_level = match get("LOG_LEVEL") {
            Some(value) => parse_var("LOG_LEVEL", &value)?,
            None => DEFAULT_LOG_LEVEL,
        };

        let cors_allowed_origins = get("CORS_ALLOWED_ORIGINS").map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        });

        let max_in_flight = match get("BULK_MAX_IN_FLIGHT") {
            Some(value) => parse_positive("BULK_MAX_IN_FLIGHT", &value)?,
            None => DEFAULT_BULK_MAX_IN_FLIGHT,
        };

        let max_items = match get("BULK_MAX_ITEMS") {
            Some(value) => parse_positive("BULK_MAX_ITEMS", &value)?,
            None => DEFAULT_BULK_MAX_ITEMS,
        };

        let order_timeout_secs = match get("ORDER_BULK_TIMEOUT_SECS") {
            Some(value) => parse_positive("ORDER_BULK_TIMEOUT_SECS", &value)? as u64,
            None => DEFAULT_ORDER_BULK_TIMEOUT_SECS,
        };

        Ok(Self {
            database_url,
            bind_addr,
            log_level,
            cors_allowed_origins,
            bulk: BulkSettings {
                max_in_flight,
                max_items,
                order_timeout: Duration::from_secs(order_timeout_secs),
            },
        })
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

fn parse_positive(name: &str, value: &str) -> Result<usize, ConfigError> {
    let parsed: usize = parse_var(name, value)?;
    if parsed == 0 {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "sqlite::memory:")])).unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:8091");
        assert_eq!(config.log_level, Level::DEBUG);
        assert!(config.cors_allowed_origins.is_none());
        assert_eq!(config.bulk.max_in_flight, 16);
        assert_eq!(config.bulk.max_items, 1000);
        assert_eq!(config.bulk.order_timeout, Duration::from_secs(30));
    }

    #[test]
    fn requires_database_url() {
        let result = Config::from_lookup(lookup(&[]));

        match result {
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) => {
                assert_eq!(name, "DATABASE_URL")
            }
            other => panic!("Expected MissingEnvVar, got: {:?}", other),
        }
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite://warehouse.db?mode=rwc"),
            ("BIND_ADDR", "0.0.0.0:9000"),
            ("LOG_LEVEL", "info"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
            ("BULK_MAX_IN_FLIGHT", "4"),
            ("BULK_MAX_ITEMS", "50"),
            ("ORDER_BULK_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(
            config.cors_allowed_origins,
            Some(vec!["http://a.test".to_string(), "http://b.test".to_string()])
        );
        assert_eq!(config.bulk.max_in_flight, 4);
        assert_eq!(config.bulk.max_items, 50);
        assert_eq!(config.bulk.order_timeout, Duration::from_secs(5));
    }

    #[test]
    fn rejects_zero_in_flight_cap() {
        let result = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("BULK_MAX_IN_FLIGHT", "0"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }

    #[test]
    fn rejects_unparsable_number() {
        let result = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("BULK_MAX_ITEMS", "many"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }
}
