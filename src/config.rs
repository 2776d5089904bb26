//! Client configuration: base URL and timeout resolution.
//!
//! Values come from an explicit argument first, then from a [`ConfigSource`]
//! (the process environment via [`EnvSource`] in production, a `HashMap` in
//! tests), then from built-in defaults.

use crate::error::ErrorContext;
use crate::{Error, Result};
use std::collections::HashMap;
use std::time::Duration;

/// Environment variable naming the API endpoint.
pub const BASE_URL_ENV: &str = "ALETHEIA_API_URL";

/// Environment variable overriding the request timeout (seconds, float).
pub const TIMEOUT_ENV: &str = "ALETHEIA_TIMEOUT_SECS";

pub const DEFAULT_TIMEOUT_SECS: f64 = 30.0;

/// A lookup of configuration values by key.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads configuration from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// Resolved settings for a client.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL without trailing slash.
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Config for `base_url` with the default 30 second timeout.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            timeout: timeout_from_secs(DEFAULT_TIMEOUT_SECS)?,
        })
    }

    pub fn with_timeout_secs(mut self, secs: f64) -> Result<Self> {
        self.timeout = timeout_from_secs(secs)?;
        Ok(self)
    }

    /// Resolve the base URL (explicit value, then `ALETHEIA_API_URL`) and the
    /// timeout (`ALETHEIA_TIMEOUT_SECS`, then the default) from `source`.
    pub fn from_source(base_url: Option<&str>, source: &dyn ConfigSource) -> Result<Self> {
        let base_url = resolve_base_url(base_url, source)?;
        let config = Self::new(&base_url)?;
        match non_empty(source.get(TIMEOUT_ENV)) {
            Some(raw) => {
                let secs = raw.parse::<f64>().map_err(|_| {
                    Error::configuration_with_context(
                        "timeout must be a number of seconds",
                        ErrorContext::new()
                            .with_field_path("timeout")
                            .with_details(raw.clone())
                            .with_source(TIMEOUT_ENV),
                    )
                })?;
                config.with_timeout_secs(secs)
            }
            None => Ok(config),
        }
    }

    /// Re-apply the base URL and timeout rules to a config whose fields may
    /// have been set directly.
    pub fn validated(self) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(&self.base_url)?,
            timeout: validate_timeout(self.timeout)?,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::from_source(None, &EnvSource)
    }

    /// Full URL for an API path (paths start with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Pick the base URL: the explicit value if non-empty, otherwise
/// `ALETHEIA_API_URL` from `source` if non-empty.
pub fn resolve_base_url(explicit: Option<&str>, source: &dyn ConfigSource) -> Result<String> {
    if let Some(url) = explicit.filter(|s| !s.trim().is_empty()) {
        return Ok(url.to_string());
    }
    if let Some(url) = non_empty(source.get(BASE_URL_ENV)) {
        return Ok(url);
    }
    Err(Error::configuration_with_context(
        format!("base_url is required (or set {})", BASE_URL_ENV),
        ErrorContext::new().with_field_path("base_url"),
    ))
}

/// Trim whitespace and trailing slashes so `{base}{path}` never doubles a slash.
pub fn normalize_base_url(base_url: &str) -> Result<String> {
    let normalized = base_url.trim().trim_end_matches('/');
    if normalized.is_empty() {
        return Err(Error::configuration_with_context(
            "base_url is required",
            ErrorContext::new()
                .with_field_path("base_url")
                .with_details(format!("{:?}", base_url)),
        ));
    }
    Ok(normalized.to_string())
}

pub fn timeout_from_secs(secs: f64) -> Result<Duration> {
    match Duration::try_from_secs_f64(secs) {
        Ok(d) => validate_timeout(d),
        Err(_) => Err(invalid_timeout(secs.to_string())),
    }
}

fn validate_timeout(timeout: Duration) -> Result<Duration> {
    if timeout.is_zero() {
        return Err(invalid_timeout(format!("{:?}", timeout)));
    }
    Ok(timeout)
}

fn invalid_timeout(details: String) -> Error {
    Error::configuration_with_context(
        "timeout must be a positive number of seconds",
        ErrorContext::new()
            .with_field_path("timeout")
            .with_details(details),
    )
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
