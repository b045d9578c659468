//! Client error types

use crate::types::ErrorResponse;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code and the raw response body
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// HTTP status of the response, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::AuthenticationFailed(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::ServerError { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::Serialization(_) | Self::Configuration(_) => None,
        }
    }

    /// Human-readable `message` the server put in a JSON error body.
    ///
    /// Returns `None` for transport failures, decode failures and bodies
    /// that are not `{"message": ...}` objects.
    pub fn server_message(&self) -> Option<String> {
        let body = match self {
            Self::BadRequest(body)
            | Self::AuthenticationFailed(body)
            | Self::Forbidden(body)
            | Self::NotFound(body)
            | Self::ServerError { message: body, .. } => body,
            _ => return None,
        };

        serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .map(|e| e.message)
            .filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_mapping() {
        assert!(matches!(
            ClientError::from_status(StatusCode::UNAUTHORIZED, String::new()),
            ClientError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::BAD_REQUEST, String::new()),
            ClientError::BadRequest(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, String::new()),
            ClientError::ServerError { status: 500, .. }
        ));
    }

    #[test]
    fn test_server_message_from_json_body() {
        let error = ClientError::from_status(
            StatusCode::UNAUTHORIZED,
            r#"{"message": "Invalid credentials"}"#.to_string(),
        );
        assert_eq!(error.server_message().as_deref(), Some("Invalid credentials"));
        assert_eq!(error.status(), Some(401));
    }

    #[test]
    fn test_server_message_ignores_plain_text() {
        let error = ClientError::from_status(
            StatusCode::BAD_GATEWAY,
            "<html>Bad Gateway</html>".to_string(),
        );
        assert_eq!(error.server_message(), None);
    }

    #[test]
    fn test_server_message_ignores_empty_message() {
        let error = ClientError::from_status(
            StatusCode::UNAUTHORIZED,
            r#"{"message": ""}"#.to_string(),
        );
        assert_eq!(error.server_message(), None);
    }

    #[test]
    fn test_configuration_error_has_no_message() {
        let error = ClientError::Configuration("base_url is required".into());
        assert_eq!(error.server_message(), None);
        assert_eq!(error.status(), None);
    }
}
