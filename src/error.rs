//! # Errors
//!
//! Two kinds of failure reach the user:
//!
//! - [`ValidationErrors`](crate::validation::ValidationErrors): local, field-scoped,
//!   produced before any request is made.
//! - [`RemoteError`]: anything that went wrong talking to the record store.
//!
//! [`InventoryError`] joins the two for operations (like form submission) that can
//! fail either way.

use crate::validation::ValidationErrors;

/// Errors surfaced by the record store client.
///
/// Service failures keep the HTTP status and the raw response body so callers can
/// show exactly what the service said.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum RemoteError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("{}", service_message(.status, .body))]
    Service { status: u16, body: String },
    #[error("{0}")]
    Transport(String),
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl RemoteError {
    /// HTTP status of a service failure, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::Service { status, .. } => Some(*status),
            RemoteError::NotFound(_) => Some(404),
            _ => None,
        }
    }
}

/// Picks the human-facing message out of a service error body.
///
/// JSON bodies carrying a `message` (or `error`) string yield that string; any
/// other non-empty body is shown as-is.
fn service_message(status: &u16, body: &str) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(serde_json::Value::String(message)) = map.get(key) {
                return message.clone();
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("Request failed with status code {status}")
    } else {
        trimmed.to_string()
    }
}

/// Any failure of a user-initiated inventory operation.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_prefers_json_message() {
        let err = RemoteError::Service {
            status: 400,
            body: r#"{"message":"Price must be positive","code":42}"#.to_string(),
        };
        assert_eq!(err.to_string(), "Price must be positive");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn service_error_falls_back_to_raw_body() {
        let err = RemoteError::Service {
            status: 502,
            body: "Bad Gateway\n".to_string(),
        };
        assert_eq!(err.to_string(), "Bad Gateway");
    }

    #[test]
    fn service_error_with_empty_body_names_status() {
        let err = RemoteError::Service {
            status: 500,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "Request failed with status code 500");
    }
}
