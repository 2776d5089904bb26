//! Per-call convenience functions.
//!
//! Each function resolves the base URL (explicit argument, then
//! `ALETHEIA_API_URL`), builds a short-lived [`AletheiaClient`] and delegates
//! to it. Nothing else happens here; hold on to a client when making many calls.

pub mod prelude;

use crate::config::{ClientConfig, ConfigSource, EnvSource};
use crate::types::SignRequest;
use crate::{AletheiaClient, Result};
use bytes::Bytes;
use std::fmt::Display;
use std::path::Path;

/// Build a client from an optional base URL and the process environment.
///
/// `timeout_secs` overrides `ALETHEIA_TIMEOUT_SECS`, which overrides the
/// 30 second default.
pub fn client_from_env(base_url: Option<&str>, timeout_secs: Option<f64>) -> Result<AletheiaClient> {
    client_with_source(base_url, timeout_secs, &EnvSource)
}

/// Like [`client_from_env`] but reading fallbacks from `source`.
pub fn client_with_source(
    base_url: Option<&str>,
    timeout_secs: Option<f64>,
    source: &dyn ConfigSource,
) -> Result<AletheiaClient> {
    let mut config = ClientConfig::from_source(base_url, source)?;
    if let Some(secs) = timeout_secs {
        config = config.with_timeout_secs(secs)?;
    }
    AletheiaClient::from_config(config)
}

/// Sign a model response. See [`AletheiaClient::sign`].
pub fn sign(
    request: &SignRequest,
    base_url: Option<&str>,
    timeout_secs: Option<f64>,
) -> Result<serde_json::Value> {
    client_from_env(base_url, timeout_secs)?.sign(request)
}

/// Fetch a signed record. See [`AletheiaClient::verify`].
pub fn verify(
    record_id: impl Display,
    base_url: Option<&str>,
    timeout_secs: Option<f64>,
) -> Result<serde_json::Value> {
    client_from_env(base_url, timeout_secs)?.verify(record_id)
}

/// Download evidence bytes. See [`AletheiaClient::get_evidence`].
pub fn get_evidence(
    record_id: impl Display,
    base_url: Option<&str>,
    timeout_secs: Option<f64>,
) -> Result<Bytes> {
    client_from_env(base_url, timeout_secs)?.get_evidence(record_id)
}

/// Download evidence to a file. See [`AletheiaClient::get_evidence_path`].
pub fn get_evidence_path<P: AsRef<Path>>(
    record_id: impl Display,
    path: P,
    base_url: Option<&str>,
    timeout_secs: Option<f64>,
) -> Result<P> {
    client_from_env(base_url, timeout_secs)?.get_evidence_path(record_id, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BASE_URL_ENV, TIMEOUT_ENV};
    use crate::Error;
    use std::collections::HashMap;
    use std::time::Duration;

    #[test]
    fn explicit_timeout_overrides_source() {
        let source: HashMap<String, String> = [
            (BASE_URL_ENV.to_string(), "http://env:9000/".to_string()),
            (TIMEOUT_ENV.to_string(), "5".to_string()),
        ]
        .into_iter()
        .collect();

        let client = client_with_source(None, Some(1.5), &source).unwrap();
        assert_eq!(client.base_url(), "http://env:9000");
        assert_eq!(client.timeout(), Duration::from_millis(1500));

        let client = client_with_source(Some("http://arg"), None, &source).unwrap();
        assert_eq!(client.base_url(), "http://arg");
        assert_eq!(client.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn missing_base_url_fails_before_network() {
        let source: HashMap<String, String> = HashMap::new();
        let err = client_with_source(None, None, &source).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(err.to_string().contains("base_url is required"));
    }
}
