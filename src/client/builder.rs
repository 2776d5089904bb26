use super::core::AletheiaClient;
use crate::config::{timeout_from_secs, ClientConfig, DEFAULT_TIMEOUT_SECS};
use crate::error::ErrorContext;
use crate::transport::{HttpTransport, Transport};
use crate::{Error, Result};
use std::sync::Arc;
use std::time::Duration;

enum Timeout {
    Secs(f64),
    Resolved(Duration),
}

/// Builder for [`AletheiaClient`].
///
/// Only `base_url` is required. The timeout defaults to 30 seconds and the
/// transport to a fresh [`HttpTransport`].
pub struct AletheiaClientBuilder {
    base_url: Option<String>,
    timeout: Timeout,
    transport: Option<Arc<dyn Transport>>,
}

impl AletheiaClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: Timeout::Secs(DEFAULT_TIMEOUT_SECS),
            transport: None,
        }
    }

    /// API root, e.g. `http://localhost:8080`. Trailing slashes are ignored.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Per-request timeout in seconds.
    pub fn timeout(mut self, secs: f64) -> Self {
        self.timeout = Timeout::Secs(secs);
        self
    }

    /// Take base URL and timeout from a resolved config.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.base_url = Some(config.base_url);
        self.timeout = Timeout::Resolved(config.timeout);
        self
    }

    /// Inject a transport (shared connection pool, test double...).
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<AletheiaClient> {
        let base_url = self.base_url.ok_or_else(|| {
            Error::configuration_with_context(
                "base_url is required",
                ErrorContext::new().with_field_path("base_url"),
            )
        })?;
        let timeout = match self.timeout {
            Timeout::Secs(secs) => timeout_from_secs(secs)?,
            Timeout::Resolved(timeout) => timeout,
        };
        let config = ClientConfig { base_url, timeout }.validated()?;
        let transport = match self.transport {
            Some(t) => t,
            None => Arc::new(HttpTransport::new()?),
        };
        Ok(AletheiaClient { config, transport })
    }
}

impl Default for AletheiaClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
