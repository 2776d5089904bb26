use super::{AsyncTransport, HttpRequest, HttpResponse, Method, Transport, TransportError};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

/// Blocking transport backed by `reqwest::blocking::Client`.
///
/// The inner client keeps its own connection pool and is safe to share across
/// threads.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(Self { client })
    }

    /// Wrap an existing client (custom proxies, TLS roots, default headers...).
    pub fn from_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        debug!(method = %request.method, url = %request.url, "sending request");

        let mut req = match request.method {
            Method::Post => self.client.post(&request.url),
            Method::Get => self.client.get(&request.url),
        };
        if let Some(body) = &request.json_body {
            req = req.json(body);
        }

        let response = req.timeout(request.timeout).send()?;
        let status = response.status().as_u16();
        let content_type = content_type(response.headers());
        let body = response.bytes()?;

        debug!(status, bytes = body.len(), "received response");
        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}

/// Async transport backed by `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct AsyncHttpTransport {
    client: reqwest::Client,
}

impl AsyncHttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client })
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AsyncTransport for AsyncHttpTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        debug!(method = %request.method, url = %request.url, "sending request");

        let mut req = match request.method {
            Method::Post => self.client.post(&request.url),
            Method::Get => self.client.get(&request.url),
        };
        if let Some(body) = &request.json_body {
            req = req.json(body);
        }

        let response = req.timeout(request.timeout).send().await?;
        let status = response.status().as_u16();
        let content_type = content_type(response.headers());
        let body = response.bytes().await?;

        debug!(status, bytes = body.len(), "received response");
        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}

fn content_type(headers: &reqwest::header::HeaderMap) -> Option<String> {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
