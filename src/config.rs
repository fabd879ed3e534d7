//! Service configuration read from the environment.

use axum::http::HeaderValue;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,http://localhost:3000";
pub const DEFAULT_SERVICE_NAME: &str = "QuickKart Support AI Backend";
pub const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid CORS origin '{0}'")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub cors_origins: Vec<HeaderValue>,
    pub service_name: String,
    pub static_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            cors_origins: DEFAULT_CORS_ORIGINS
                .split(',')
                .map(HeaderValue::from_static)
                .collect(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
        }
    }
}

impl Config {
    /// Reads configuration from environment variables with local-dev defaults.
    ///
    /// | Variable       | Default                                         |
    /// |----------------|-------------------------------------------------|
    /// | `BIND_ADDR`    | `0.0.0.0:8000`                                  |
    /// | `CORS_ORIGINS` | `http://localhost:5173,http://localhost:3000`   |
    /// | `SERVICE_NAME` | `QuickKart Support AI Backend`                  |
    /// | `STATIC_DIR`   | `public`                                        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            bind_addr: var("BIND_ADDR", DEFAULT_BIND_ADDR),
            cors_origins: parse_origins(&var("CORS_ORIGINS", DEFAULT_CORS_ORIGINS))?,
            service_name: var("SERVICE_NAME", DEFAULT_SERVICE_NAME),
            static_dir: var("STATIC_DIR", DEFAULT_STATIC_DIR),
        })
    }
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(|o| HeaderValue::from_str(o).map_err(|_| ConfigError::InvalidOrigin(o.to_string())))
        .collect()
}
