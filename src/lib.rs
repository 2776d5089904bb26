//! # aletheia-sdk
//!
//! Rust client SDK for the Aletheia API: sign model responses, verify signed
//! records and download evidence packages.
//!
//! ## Overview
//!
//! Every operation is a single request/response round trip against a
//! configured base URL. The crate takes care of request construction,
//! JSON/bytes marshaling and mapping server rejections onto [`ApiError`].
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | [`AletheiaClient::sign`] | `POST` | `/api/sign` |
//! | [`AletheiaClient::verify`] | `GET` | `/api/ai/verify/{id}` |
//! | [`AletheiaClient::get_evidence`] | `GET` | `/api/ai/evidence/{id}` |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aletheia_sdk::{AletheiaClient, SignRequest};
//!
//! fn main() -> aletheia_sdk::Result<()> {
//!     let client = AletheiaClient::new("http://localhost:8080")?;
//!
//!     let signed = client.sign_typed(&SignRequest::new("The answer is 42").model_id("gpt-4o"))?;
//!     let record = client.verify(signed.id)?;
//!     println!("hash match: {}", record["hashMatch"]);
//!
//!     client.get_evidence_path(signed.id, "evidence.aep")?;
//!     Ok(())
//! }
//! ```
//!
//! The free functions in [`facade`] build a short-lived client per call and
//! fall back to the `ALETHEIA_API_URL` environment variable when no base URL
//! is passed.
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Blocking and async clients, builder, endpoint routing |
//! | [`config`] | Base URL / timeout resolution from explicit values or a config source |
//! | [`transport`] | Transport seam and the reqwest-backed implementations |
//! | [`types`] | Request and typed response payloads |
//! | [`facade`] | Per-call convenience functions |

pub mod client;
pub mod config;
pub mod facade;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{AletheiaClient, AletheiaClientBuilder, AsyncAletheiaClient};
pub use config::{ClientConfig, ConfigSource, EnvSource};
pub use facade::{get_evidence, get_evidence_path, sign, verify};
pub use types::{SignRequest, SignResponse, VerifyResponse};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{ApiError, Error};
