//! Request and response bodies exchanged with the restaurant API

use serde::{Deserialize, Serialize};

/// Restaurant login request
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RestaurantLoginRequest {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for RestaurantLoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestaurantLoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Restaurant login response
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RestaurantLoginResponse {
    /// Bearer token issued for the restaurant account
    pub access_token: String,
}

impl std::fmt::Debug for RestaurantLoginResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestaurantLoginResponse")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Error body returned by the API on non-success responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub message: String,
}
