//! Minimal prelude for application code.

pub use crate::client::{AletheiaClient, AletheiaClientBuilder, AsyncAletheiaClient};
pub use crate::config::{ClientConfig, ConfigSource, EnvSource};
pub use crate::error::{ApiError, Error};
pub use crate::facade::{client_from_env, client_with_source};
pub use crate::types::{SignRequest, SignResponse, VerifyResponse};
pub use crate::Result;
