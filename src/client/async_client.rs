//! Async client over [`AsyncTransport`].
//!
//! Same routing, payloads and error rules as the blocking [`AletheiaClient`](super::AletheiaClient).

use super::endpoint::Endpoint;
use super::response::{decode_bytes, decode_json};
use crate::config::ClientConfig;
use crate::transport::{AsyncHttpTransport, AsyncTransport, HttpRequest, HttpResponse};
use crate::types::{SignRequest, SignResponse, VerifyResponse};
use crate::Result;
use bytes::Bytes;
use std::fmt::Display;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct AsyncAletheiaClient {
    config: ClientConfig,
    transport: Arc<dyn AsyncTransport>,
}

impl std::fmt::Debug for AsyncAletheiaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncAletheiaClient")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .finish_non_exhaustive()
    }
}

impl AsyncAletheiaClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::from_config(ClientConfig::new(base_url)?)
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = Arc::new(AsyncHttpTransport::new()?);
        Self::with_transport(config, transport)
    }

    /// Fails when the config has an empty base URL or a zero timeout.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn AsyncTransport>) -> Result<Self> {
        Ok(Self {
            config: config.validated()?,
            transport,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn timeout(&self) -> std::time::Duration {
        self.config.timeout
    }

    pub async fn sign(&self, request: &SignRequest) -> Result<serde_json::Value> {
        let body = serde_json::to_value(request)?;
        let response = self
            .execute(Endpoint::Sign.request(&self.config, Some(body)))
            .await?;
        decode_json(response)
    }

    pub async fn sign_typed(&self, request: &SignRequest) -> Result<SignResponse> {
        Ok(serde_json::from_value(self.sign(request).await?)?)
    }

    pub async fn verify(&self, record_id: impl Display) -> Result<serde_json::Value> {
        let request = Endpoint::verify(record_id).request(&self.config, None);
        decode_json(self.execute(request).await?)
    }

    pub async fn verify_typed(&self, record_id: impl Display) -> Result<VerifyResponse> {
        Ok(serde_json::from_value(self.verify(record_id).await?)?)
    }

    pub async fn get_evidence(&self, record_id: impl Display) -> Result<Bytes> {
        let request = Endpoint::evidence(record_id).request(&self.config, None);
        decode_bytes(self.execute(request).await?)
    }

    /// Download the evidence package to `path` (created or truncated).
    pub async fn get_evidence_path<P: AsRef<Path>>(
        &self,
        record_id: impl Display,
        path: P,
    ) -> Result<P> {
        let data = self.get_evidence(record_id).await?;
        tokio::fs::write(path.as_ref(), &data).await?;
        debug!(path = %path.as_ref().display(), bytes = data.len(), "evidence written");
        Ok(path)
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let response = self.transport.send(&request).await?;
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{Method, TransportError};
    use crate::Error;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;
    use std::time::Duration;

    struct RecordingTransport {
        response: HttpResponse,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl RecordingTransport {
        fn new(response: HttpResponse) -> Arc<Self> {
            Arc::new(Self {
                response,
                requests: Mutex::new(Vec::new()),
            })
        }

        fn last(&self) -> HttpRequest {
            self.requests.lock().unwrap().last().cloned().expect("no request sent")
        }
    }

    #[async_trait]
    impl AsyncTransport for RecordingTransport {
        async fn send(&self, request: &HttpRequest) -> std::result::Result<HttpResponse, TransportError> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(self.response.clone())
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl AsyncTransport for FailingTransport {
        async fn send(&self, _: &HttpRequest) -> std::result::Result<HttpResponse, TransportError> {
            Err(TransportError::Other("connection refused".into()))
        }
    }

    fn config(base_url: &str) -> ClientConfig {
        ClientConfig {
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    fn client(base_url: &str, transport: Arc<dyn AsyncTransport>) -> AsyncAletheiaClient {
        AsyncAletheiaClient::with_transport(config(base_url), transport).unwrap()
    }

    fn json_ok(body: serde_json::Value) -> HttpResponse {
        HttpResponse::new(200, body.to_string()).with_content_type("application/json")
    }

    #[tokio::test]
    async fn hand_built_config_is_normalized() {
        let transport = RecordingTransport::new(json_ok(json!({})));
        let client = client("http://host:8080/", transport.clone());
        assert_eq!(client.base_url(), "http://host:8080");

        client.sign(&SignRequest::new("x")).await.unwrap();
        assert_eq!(transport.last().url, "http://host:8080/api/sign");
    }

    #[test]
    fn from_config_matches_blocking_client() {
        let config = config("http://host:8080//");
        let blocking = crate::AletheiaClient::from_config(config.clone()).unwrap();
        let nonblocking = AsyncAletheiaClient::from_config(config).unwrap();
        assert_eq!(blocking.base_url(), nonblocking.base_url());
    }

    #[test]
    fn empty_base_url_and_zero_timeout_rejected() {
        let err = AsyncAletheiaClient::with_transport(config(""), Arc::new(FailingTransport)).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));

        let zero = ClientConfig {
            base_url: "http://host".to_string(),
            timeout: Duration::ZERO,
        };
        let err = AsyncAletheiaClient::from_config(zero).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));

        assert!(matches!(
            AsyncAletheiaClient::new("  "),
            Err(Error::Configuration { .. })
        ));
    }

    #[tokio::test]
    async fn sign_sends_payload() {
        let transport = RecordingTransport::new(json_ok(json!({"id": 1})));
        let client = client("http://localhost:8080", transport.clone());

        let result = client
            .sign(&SignRequest::new("hello").policy_id("policy-1").model_id(""))
            .await
            .unwrap();

        assert_eq!(result["id"], 1);
        let req = transport.last();
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.url, "http://localhost:8080/api/sign");
        assert_eq!(req.json_body, Some(json!({"response": "hello", "policyId": "policy-1"})));
        assert_eq!(req.timeout, Duration::from_secs(30));
    }

    #[tokio::test]
    async fn verify_and_evidence_urls() {
        let transport = RecordingTransport::new(json_ok(json!({"id": 123})));
        let client = client("http://localhost:8080", transport.clone());

        client.verify(123).await.unwrap();
        let req = transport.last();
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.url, "http://localhost:8080/api/ai/verify/123");

        let data = client.get_evidence("abc").await.unwrap();
        assert_eq!(&data[..], br#"{"id":123}"#);
        assert_eq!(transport.last().url, "http://localhost:8080/api/ai/evidence/abc");
    }

    #[tokio::test]
    async fn invalid_json_on_success_is_api_error() {
        let transport = RecordingTransport::new(HttpResponse::new(200, "not json"));
        let client = client("http://localhost:8080", transport);

        let err = client.verify(1).await.unwrap_err();
        let api = err.as_api_error().expect("API error");
        assert_eq!(api.status_code, 200);
        assert_eq!(api.message, "Invalid JSON response");
        assert!(api.payload.is_none());
    }

    #[tokio::test]
    async fn empty_error_body_is_unknown_error() {
        let transport = RecordingTransport::new(HttpResponse::new(500, ""));
        let client = client("http://localhost:8080", transport);

        for err in [
            client.sign(&SignRequest::new("x")).await.unwrap_err(),
            client.verify(1).await.unwrap_err(),
            client.get_evidence(1).await.unwrap_err(),
        ] {
            let api = err.as_api_error().expect("API error");
            assert_eq!(api.status_code, 500);
            assert_eq!(api.message, "Unknown error");
        }
    }

    #[tokio::test]
    async fn bad_request_message_extracted() {
        let transport = RecordingTransport::new(HttpResponse::new(
            400,
            json!({"error": "Bad request"}).to_string(),
        ));
        let client = client("http://localhost:8080", transport);

        let err = client.sign(&SignRequest::new("hello")).await.unwrap_err();
        assert_eq!(err.status_code(), Some(400));
        assert!(err.as_api_error().unwrap().message.contains("Bad request"));
    }

    #[tokio::test]
    async fn transport_errors_propagate() {
        let client = client("http://localhost:8080", Arc::new(FailingTransport));
        let err = client.get_evidence(1).await.unwrap_err();
        assert!(matches!(err, Error::Transport(TransportError::Other(_))));
    }
}
