//! Endpoint routing for the Aletheia API.

use crate::config::ClientConfig;
use crate::transport::{HttpRequest, Method};
use std::fmt::Display;

pub const SIGN_PATH: &str = "/api/sign";
pub const VERIFY_PATH: &str = "/api/ai/verify";
pub const EVIDENCE_PATH: &str = "/api/ai/evidence";

/// One of the three API endpoints, with its record id where it takes one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Sign,
    Verify(String),
    Evidence(String),
}

impl Endpoint {
    /// Record ids are inserted in their `Display` form, unescaped.
    pub fn verify(record_id: impl Display) -> Self {
        Endpoint::Verify(record_id.to_string())
    }

    pub fn evidence(record_id: impl Display) -> Self {
        Endpoint::Evidence(record_id.to_string())
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::Sign => Method::Post,
            Endpoint::Verify(_) | Endpoint::Evidence(_) => Method::Get,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::Sign => SIGN_PATH.to_string(),
            Endpoint::Verify(id) => format!("{}/{}", VERIFY_PATH, id),
            Endpoint::Evidence(id) => format!("{}/{}", EVIDENCE_PATH, id),
        }
    }

    /// Build the outbound request against `config`.
    pub fn request(&self, config: &ClientConfig, json_body: Option<serde_json::Value>) -> HttpRequest {
        HttpRequest {
            method: self.method(),
            url: config.url(&self.path()),
            json_body,
            timeout: config.timeout,
        }
    }
}
