// src/config/mod.rs
// Resolved credential/base-URL pair for the Taskdeck backend.

use std::str::FromStr;

use anyhow::{Result, bail};

/// Default tenant endpoint used when TASKDECK_BASE_URL is unset.
pub const DEFAULT_BASE_URL: &str = "https://api.taskdeck.io/api/v1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// Raw API key, sent as the Authorization header value (no bearer prefix).
    pub api_key: String,
    /// Backend base URL, stored without a trailing slash.
    pub base_url: String,
    /// Timeout applied to every backend request.
    pub timeout_secs: u64,
}

fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl Config {
    /// Load configuration from the environment (and a `.env` file if present).
    ///
    /// The API key is the only mandatory value; everything else has a default.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = match std::env::var("TASKDECK_API_KEY") {
            Ok(key) if !key.trim().is_empty() => key.trim().to_string(),
            _ => bail!("TASKDECK_API_KEY is not set; no backend call can succeed without it"),
        };

        let base_url = env_var_or("TASKDECK_BASE_URL", DEFAULT_BASE_URL.to_string());
        let timeout_secs = env_var_or("TASKDECK_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
        })
    }

    /// Construct a config directly; used by tests to point at a mock backend.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
