//! Environment configuration, loaded once at startup.

use anyhow::{anyhow, Context, Result};
use riot_sdk::account::AccountRegion;
use riot_sdk::summoner::Region;
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// `None` puts the server in degraded mode: lookups answer 503
    pub riot_api_key: Option<String>,
    pub database_url: String,
    pub db_max_connections: u32,
    pub upstream_timeout: Duration,
    pub account_region: AccountRegion,
    pub platform: Region,
    pub allowed_origins: String,
}

/// Load .env from the current directory, falling back to the crate root.
pub fn init_env() {
    if dotenv::dotenv().is_ok() {
        return;
    }
    let candidate = format!("{}/.env", env!("CARGO_MANIFEST_DIR"));
    let _ = dotenv::from_filename(candidate);
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, `from_env` passes the process environment.
    pub fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = var("PORT")
            .unwrap_or_else(|| "5001".to_string())
            .parse()
            .context("Invalid PORT")?;
        let db_max_connections = var("DB_MAX_CONNS")
            .unwrap_or_else(|| "5".to_string())
            .parse()
            .context("Invalid DB_MAX_CONNS")?;
        let timeout_secs: u64 = var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".to_string())
            .parse()
            .context("Invalid UPSTREAM_TIMEOUT_SECS")?;
        if timeout_secs == 0 {
            return Err(anyhow!("UPSTREAM_TIMEOUT_SECS must be greater than zero"));
        }

        let account_region = parse_with(var("RIOT_ACCOUNT_REGION"), "asia", "RIOT_ACCOUNT_REGION")?;
        let platform = parse_with(var("RIOT_PLATFORM"), "kr", "RIOT_PLATFORM")?;

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            riot_api_key: var("RIOT_API_KEY"),
            database_url: var("DATABASE_URL")
                .unwrap_or_else(|| "sqlite://favorites.db?mode=rwc".to_string()),
            db_max_connections,
            upstream_timeout: Duration::from_secs(timeout_secs),
            account_region,
            platform,
            allowed_origins: var("ALLOWED_ORIGINS").unwrap_or_else(|| "*".to_string()),
        })
    }
}

fn parse_with<T>(value: Option<String>, default: &str, key: &str) -> Result<T>
where
    T: FromStr<Err = String>,
{
    value
        .as_deref()
        .unwrap_or(default)
        .parse()
        .map_err(|e: String| anyhow!("Invalid {}: {}", key, e))
}
