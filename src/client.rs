//! Aletheia API clients.
//!
//! Keep the public surface small: one blocking client, one async client, and
//! a builder. Request routing and response decoding are shared between them.

pub mod async_client;
pub mod builder;
pub mod core;
pub mod endpoint;
pub mod response;

pub use async_client::AsyncAletheiaClient;
pub use builder::AletheiaClientBuilder;
pub use core::AletheiaClient;
pub use endpoint::Endpoint;
pub use response::{build_error, ERROR_MESSAGE_KEYS};
