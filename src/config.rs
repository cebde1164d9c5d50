//! Backend location and notification timing, resolved from the environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser builds have no process environment, so `CAGE_API_BASE_URL` is also
//! read at compile time. Runtime values win when present (native tests, SSR).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8081/api/v1";
pub const DEFAULT_NOTIFICATION_LIFE_MS: u32 = 3000;

const BASE_URL_VAR: &str = "CAGE_API_BASE_URL";
const LIFE_MS_VAR: &str = "CAGE_TOAST_LIFE_MS";

/// Errors raised while resolving [`ApiConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid CAGE_API_BASE_URL '{0}': expected an http:// or https:// URL")]
    InvalidBaseUrl(String),

    #[error("invalid CAGE_TOAST_LIFE_MS '{0}': expected a positive number of milliseconds")]
    InvalidLifetime(String),
}

/// Resource-client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// API root without a trailing slash, e.g. `http://localhost:8081/api/v1`.
    pub base_url: String,
    /// How long a toast stays visible before it is dismissed.
    pub notification_life_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned(), notification_life_ms: DEFAULT_NOTIFICATION_LIFE_MS }
    }
}

impl ApiConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `CAGE_API_BASE_URL`: runtime value, else the value baked in at build
    ///   time, else [`DEFAULT_API_BASE_URL`]
    /// - `CAGE_TOAST_LIFE_MS`: default 3000
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a value is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var(BASE_URL_VAR)
            .ok()
            .or_else(|| option_env!("CAGE_API_BASE_URL").map(str::to_owned));
        let life_ms = std::env::var(LIFE_MS_VAR)
            .ok()
            .or_else(|| option_env!("CAGE_TOAST_LIFE_MS").map(str::to_owned));
        Self::from_values(base_url.as_deref(), life_ms.as_deref())
    }

    /// Build config from raw optional values; `None` or blank selects the default.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a value is present but malformed.
    pub fn from_values(base_url: Option<&str>, life_ms: Option<&str>) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(base_url)?;
        let notification_life_ms = parse_life_ms(life_ms)?;
        Ok(Self { base_url, notification_life_ms })
    }

    /// Like [`ApiConfig::from_env`], falling back to defaults on a malformed value.
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            leptos::logging::warn!("config: {e}; using defaults");
            Self::default()
        })
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_API_BASE_URL.to_owned());
    };
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    let trimmed = raw.trim_end_matches('/');
    if trimmed.ends_with(':') || trimmed.ends_with("//") {
        return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

fn parse_life_ms(raw: Option<&str>) -> Result<u32, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_NOTIFICATION_LIFE_MS);
    };
    match raw.parse::<u32>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(ConfigError::InvalidLifetime(raw.to_owned())),
    }
}
