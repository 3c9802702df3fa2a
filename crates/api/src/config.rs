use std::time::Duration;

use crate::middleware::rate_limit::{RateLimit, RateLimitConfig};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables (a `.env` file is
/// honoured through `dotenvy`).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite connection string (default: `sqlite://memo.db`).
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Per-route request budgets.
    pub rate_limit: RateLimitConfig,
    /// Emit JSON log lines instead of the human-readable format.
    pub log_json: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default            |
    /// |-----------------------------|--------------------|
    /// | `HOST`                      | `0.0.0.0`          |
    /// | `PORT`                      | `3000`             |
    /// | `DATABASE_URL`              | `sqlite://memo.db` |
    /// | `CORS_ORIGINS`              | `*`                |
    /// | `REQUEST_TIMEOUT_SECS`      | `30`               |
    /// | `RATE_LIMIT_LIST_PER_SEC`   | `5`                |
    /// | `RATE_LIMIT_MUTATE_PER_SEC` | `1`                |
    /// | `LOG_FORMAT`                | `pretty`           |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://memo.db".into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let list_per_sec: u32 = std::env::var("RATE_LIMIT_LIST_PER_SEC")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("RATE_LIMIT_LIST_PER_SEC must be a valid u32");

        let mutate_per_sec: u32 = std::env::var("RATE_LIMIT_MUTATE_PER_SEC")
            .unwrap_or_else(|_| "1".into())
            .parse()
            .expect("RATE_LIMIT_MUTATE_PER_SEC must be a valid u32");

        let log_json = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            rate_limit: RateLimitConfig {
                list: RateLimit::new(list_per_sec, Duration::from_secs(1)),
                mutate: RateLimit::new(mutate_per_sec, Duration::from_secs(1)),
            },
            log_json,
        }
    }
}
