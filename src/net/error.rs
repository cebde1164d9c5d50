//! Resource-client failure taxonomy.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single REST call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never reached the server (DNS, CORS, offline, SSR stub).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// A request or response body could not be encoded or decoded.
    #[error("malformed payload: {0}")]
    Payload(String),
}

impl ApiError {
    /// Build a [`ApiError::Server`] from a non-success status and its raw body.
    ///
    /// The message is the body's JSON `message` (or `error`) field, else the
    /// trimmed body text, else a generic status line.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Server { status, message: server_error_message(status, body) }
    }

    /// HTTP status for server errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::Network(_) | Self::Payload(_) => None,
        }
    }
}

pub(crate) fn server_error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(serde_json::Value::as_str)
                && !text.trim().is_empty()
            {
                return text.trim().to_owned();
            }
        }
    }
    let text = body.trim();
    if text.is_empty() || text.starts_with('{') {
        return request_failed_message(status);
    }
    text.to_owned()
}

pub(crate) fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}
