//! Response decoding and error construction shared by both clients.

use crate::error::ApiError;
use crate::transport::HttpResponse;
use crate::Result;
use bytes::Bytes;
use serde_json::Value;

/// Keys checked, in this order, for a human readable error message.
///
/// The first key whose value is non-empty wins, so a body carrying both
/// `message` and `error` reports `message`.
pub const ERROR_MESSAGE_KEYS: [&str; 4] = ["message", "error", "code", "details"];

pub const UNKNOWN_ERROR: &str = "Unknown error";
pub const INVALID_JSON_RESPONSE: &str = "Invalid JSON response";

/// Build an [`ApiError`] from a non-2xx response.
///
/// When the body is a JSON object with a non-empty value under one of
/// [`ERROR_MESSAGE_KEYS`], that value becomes the message and the object is
/// kept as the payload. Otherwise the raw body text is the message
/// (`"Unknown error"` when empty) and there is no payload.
///
/// String values are used as-is; any other value (number, bool, array,
/// object) is rendered as compact JSON, e.g. `true` or `{"a":1}`.
pub fn build_error(response: &HttpResponse) -> ApiError {
    if let Ok(payload @ Value::Object(_)) = serde_json::from_slice::<Value>(&response.body) {
        let found = ERROR_MESSAGE_KEYS
            .iter()
            .filter_map(|key| payload.get(*key))
            .find(|value| is_truthy(value))
            .map(message_of);
        if let Some(message) = found {
            return ApiError::new(response.status, message, Some(payload));
        }
    }

    let text = response.text();
    let message = if text.is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        text.into_owned()
    };
    ApiError::new(response.status, message, None)
}

/// Parsed JSON body of a 2xx response.
pub fn decode_json(response: HttpResponse) -> Result<Value> {
    if !response.is_success() {
        return Err(build_error(&response).into());
    }
    serde_json::from_slice(&response.body)
        .map_err(|_| ApiError::new(response.status, INVALID_JSON_RESPONSE, None).into())
}

/// Raw body of a 2xx response, whatever its content type.
pub fn decode_bytes(response: HttpResponse) -> Result<Bytes> {
    if !response.is_success() {
        return Err(build_error(&response).into());
    }
    Ok(response.body)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn message_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
