use serde_json::Value;
use std::fmt;

/// Normalized service failure: the `{success: false, error, details?}`
/// envelope as a Rust error type. Transport and server failures both end
/// up here; nothing escapes a service module un-normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub message: String,
    pub details: Option<Value>,
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    pub fn server(message: String, body: Value) -> Self {
        Self {
            message,
            details: Some(body),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
