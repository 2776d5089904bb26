use super::builder::AletheiaClientBuilder;
use super::endpoint::Endpoint;
use super::response::{decode_bytes, decode_json};
use crate::config::ClientConfig;
use crate::transport::{HttpRequest, HttpResponse, Transport};
use crate::types::{SignRequest, SignResponse, VerifyResponse};
use crate::Result;
use bytes::Bytes;
use std::fmt::Display;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Blocking client for the Aletheia API.
///
/// Each operation issues exactly one request and blocks until the response
/// arrives or the per-request timeout expires. The client is `Send + Sync`
/// and can be shared across threads; calls are independent.
pub struct AletheiaClient {
    pub(crate) config: ClientConfig,
    pub(crate) transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for AletheiaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AletheiaClient")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .finish_non_exhaustive()
    }
}

impl AletheiaClient {
    /// Client for `base_url` with the default timeout and HTTP transport.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::builder().base_url(base_url).build()
    }

    pub fn builder() -> AletheiaClientBuilder {
        AletheiaClientBuilder::new()
    }

    /// Client for an already-resolved configuration.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Sign a model response. Returns the server's JSON body.
    pub fn sign(&self, request: &SignRequest) -> Result<serde_json::Value> {
        let body = serde_json::to_value(request)?;
        let response = self.execute(Endpoint::Sign.request(&self.config, Some(body)))?;
        decode_json(response)
    }

    /// [`sign`](Self::sign), deserialized into [`SignResponse`].
    pub fn sign_typed(&self, request: &SignRequest) -> Result<SignResponse> {
        Ok(serde_json::from_value(self.sign(request)?)?)
    }

    /// Fetch a signed record with its verification status.
    pub fn verify(&self, record_id: impl Display) -> Result<serde_json::Value> {
        let response = self.execute(Endpoint::verify(record_id).request(&self.config, None))?;
        decode_json(response)
    }

    pub fn verify_typed(&self, record_id: impl Display) -> Result<VerifyResponse> {
        Ok(serde_json::from_value(self.verify(record_id)?)?)
    }

    /// Download the evidence package for a record as raw bytes.
    pub fn get_evidence(&self, record_id: impl Display) -> Result<Bytes> {
        let response = self.execute(Endpoint::evidence(record_id).request(&self.config, None))?;
        decode_bytes(response)
    }

    /// Download the evidence package and write it to `path`, replacing any
    /// existing file. Returns `path` unchanged.
    pub fn get_evidence_path<P: AsRef<Path>>(&self, record_id: impl Display, path: P) -> Result<P> {
        let data = self.get_evidence(record_id)?;
        std::fs::write(path.as_ref(), &data)?;
        debug!(path = %path.as_ref().display(), bytes = data.len(), "evidence written");
        Ok(path)
    }

    fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let response = self.transport.send(&request)?;
        if !response.is_success() {
            warn!(
                method = %request.method,
                url = %request.url,
                status = response.status,
                "Aletheia API returned an error status"
            );
        }
        Ok(response)
    }
}
