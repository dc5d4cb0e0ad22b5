//! Service configuration

use std::time::Duration;

use chrono_tz::Tz;

use crate::error::BoxError;

/// Datastore URL that selects the in-process store
pub const MEMORY_DATABASE_URL: &str = "memory://";

/// Fallback shared secret for development. Insecure; refused outside development.
pub const DEV_STORE_STATUS_API_KEY: &str = "dev-store-status-key-not-for-production";

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Environment: development | staging | production
    pub environment: String,
    /// HTTP port
    pub http_port: u16,
    /// PostgreSQL connection URL, or `memory://`
    pub database_url: String,
    /// Pool size
    pub database_max_connections: u32,
    /// How long a request waits for a pooled connection
    pub database_acquire_timeout: Duration,
    /// Shared secret guarding `/store-status`
    pub store_status_api_key: String,
    /// True when `store_status_api_key` is the built-in development fallback
    pub store_status_api_key_is_fallback: bool,
    /// Timezone that defines the business day for order numbering
    pub order_timezone: Tz,
    /// Single allowed CORS origin (any origin when unset)
    pub cors_allow_origin: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, BoxError> {
        let environment = var("ENVIRONMENT").unwrap_or_else(|| "development".into());
        let development = environment == "development";

        let database_url = match var("DATABASE_URL").filter(|s| !s.is_empty()) {
            Some(url) => url,
            None if development => MEMORY_DATABASE_URL.to_string(),
            None => {
                return Err(format!("DATABASE_URL must be set in {environment} environment").into());
            }
        };

        let (store_status_api_key, store_status_api_key_is_fallback) =
            match var("STORE_STATUS_API_KEY") {
                Some(key) if !key.is_empty() => (key, false),
                Some(_) if !development => {
                    return Err(format!(
                        "STORE_STATUS_API_KEY must not be empty in {environment} environment"
                    )
                    .into());
                }
                None if !development => {
                    return Err(format!(
                        "STORE_STATUS_API_KEY must be set in {environment} environment"
                    )
                    .into());
                }
                _ => (DEV_STORE_STATUS_API_KEY.to_string(), true),
            };

        let order_timezone = match var("ORDER_TIMEZONE") {
            Some(name) => name
                .parse::<Tz>()
                .map_err(|e| format!("Invalid ORDER_TIMEZONE {name:?}: {e}"))?,
            None => Tz::UTC,
        };

        Ok(Self {
            http_port: parse_or("HTTP_PORT", var("HTTP_PORT"), 3000)?,
            database_url,
            database_max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                var("DATABASE_MAX_CONNECTIONS"),
                10,
            )?,
            database_acquire_timeout: Duration::from_secs(parse_or(
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                var("DATABASE_ACQUIRE_TIMEOUT_SECS"),
                5,
            )?),
            store_status_api_key,
            store_status_api_key_is_fallback,
            order_timezone,
            cors_allow_origin: var("CORS_ALLOW_ORIGIN").filter(|s| !s.is_empty()),
            environment,
        })
    }
}

fn parse_or<T>(name: &str, value: Option<String>, default: T) -> Result<T, BoxError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(raw) => raw
            .parse()
            .map_err(|e| format!("Invalid {name} value {raw:?}: {e}").into()),
        None => Ok(default),
    }
}
