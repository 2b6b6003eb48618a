use std::time::Duration;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct StripeConfig {
    pub secret_key: String,
    pub api_base: String,
    pub api_version: String,
    pub ephemeral_key_version: String,
}

#[derive(Debug, Clone)]
pub struct MapsConfig {
    pub api_key: String,
    pub api_base: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub db_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub http_timeout: Duration,
    pub default_currency: String,
    /// `None` disables `/payment-sheet`.
    pub stripe: Option<StripeConfig>,
    /// `None` disables `/api/route`.
    pub maps: Option<MapsConfig>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;

        let stripe = non_empty_var("STRIPE_SECRET_KEY").map(|secret_key| StripeConfig {
            secret_key,
            api_base: var_or("STRIPE_API_BASE", "https://api.stripe.com"),
            api_version: var_or("STRIPE_API_VERSION", "2023-10-16"),
            ephemeral_key_version: var_or("STRIPE_EPHEMERAL_KEY_VERSION", "2022-11-15"),
        });

        let maps = non_empty_var("OLA_MAPS_API_KEY").map(|api_key| MapsConfig {
            api_key,
            api_base: var_or("OLA_MAPS_API_BASE", "https://api.olamaps.io"),
        });

        Ok(Self {
            database_url,
            db_max_connections: parsed_or("DB_MAX_CONNECTIONS", 10)?,
            host: var_or("APP_HOST", "0.0.0.0"),
            port: parsed_or("APP_PORT", 3000)?,
            http_timeout: Duration::from_secs(parsed_or("HTTP_TIMEOUT_SECS", 30)?),
            default_currency: var_or("PAYMENT_DEFAULT_CURRENCY", "usd"),
            stripe,
            maps,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn var_or(key: &str, default: &str) -> String {
    non_empty_var(key).unwrap_or_else(|| default.to_string())
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parsed_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match non_empty_var(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        None => Ok(default),
    }
}
