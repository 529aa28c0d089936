use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

/// Errors raised while reading configuration from the environment
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Application settings, read from the environment (and `.env` when present)
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Deployment environment name reported by the health check
    pub environment: String,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Seed sample readings at startup
    pub seed_sample_data: bool,
    /// Days counted back when reporting recent alerts
    pub alert_window_days: u32,
    /// Number of readings shown on the dashboard
    pub dashboard_recent_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: "development".to_string(),
            log_level: "info".to_string(),
            seed_sample_data: true,
            alert_window_days: 7,
            dashboard_recent_limit: 3,
        }
    }
}

impl AppConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            environment: lookup("APP_ENV").unwrap_or(defaults.environment),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            seed_sample_data: match lookup("SEED_SAMPLE_DATA") {
                Some(value) => parse_bool("SEED_SAMPLE_DATA", &value)?,
                None => defaults.seed_sample_data,
            },
            alert_window_days: parse_or(&lookup, "ALERT_WINDOW_DAYS", defaults.alert_window_days)?,
            dashboard_recent_limit: parse_or(&lookup, "DASHBOARD_RECENT_LIMIT", defaults.dashboard_recent_limit)?,
        })
    }

    /// Address the server binds to
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidValue { key: "HOST", value: self.host.clone() })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key, value: value.to_string() }),
    }
}
