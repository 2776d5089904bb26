use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for configuration failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Configuration key that caused the error (e.g., "base_url", "timeout")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., the rejected value)
    pub details: Option<String>,
    /// Source of the value (e.g., "argument", "ALETHEIA_API_URL")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    fn is_empty(&self) -> bool {
        self.field_path.is_none() && self.details.is_none() && self.source.is_none()
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A rejection reported by the Aletheia API.
///
/// Produced for any non-2xx response, and for a 2xx response whose body was
/// expected to be JSON but could not be parsed.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Aletheia API error ({status_code}): {message}")]
pub struct ApiError {
    /// HTTP status code of the response.
    pub status_code: u16,
    /// Best-effort human readable message extracted from the body.
    pub message: String,
    /// Parsed response body, when one of the message keys was found in it.
    pub payload: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(status_code: u16, message: impl Into<String>, payload: Option<serde_json::Value>) -> Self {
        Self {
            status_code,
            message: message.into(),
            payload,
        }
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }
}

/// Unified error type for the SDK.
///
/// Transport and filesystem failures keep their native error as the source and
/// render its message unchanged.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn format_context(ctx: &ErrorContext) -> String {
    if ctx.is_empty() {
        return String::new();
    }
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    format!(" ({})", parts.join(", "))
}

impl Error {
    /// Create a configuration error without context
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    /// Create a configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// The API rejection, if this error came from the server.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }

    /// HTTP status of an API rejection.
    pub fn status_code(&self) -> Option<u16> {
        self.as_api_error().map(|e| e.status_code)
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }
}
