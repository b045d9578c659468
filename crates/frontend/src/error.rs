//! Login error types

use crate::config::LoginConfig;
use crate::login::Field;
use bistro_http::ClientError;
use thiserror::Error;

/// Why a login attempt did not end with a stored token
#[derive(Debug, Error)]
pub enum LoginError {
    /// A required field was empty, nothing was sent
    #[error("Missing required field: {0}")]
    MissingField(Field),

    /// The request failed or the server rejected it
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Browser storage refused the token
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LoginError {
    /// Text shown to the user in the error notification
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingField(_) => LoginConfig::MISSING_FIELDS_MESSAGE.to_string(),
            Self::Client(error) => error
                .server_message()
                .unwrap_or_else(|| LoginConfig::GENERIC_ERROR_MESSAGE.to_string()),
            Self::Storage(_) => LoginConfig::GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}
