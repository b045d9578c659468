//! Authentication API service

use crate::client::create_public_client;
use async_trait::async_trait;
use bistro_http::types::{RestaurantLoginRequest, RestaurantLoginResponse};
use bistro_http::{ClientError, RestaurantClient};

/// Backend authentication endpoints used by the login flow
#[async_trait(?Send)]
pub trait AuthApi {
    /// Exchange restaurant credentials for an access token
    async fn restaurant_login(
        &self,
        request: RestaurantLoginRequest,
    ) -> Result<RestaurantLoginResponse, ClientError>;
}

/// Authentication API service
#[derive(Clone)]
pub struct AuthApiService {
    client: RestaurantClient,
}

impl AuthApiService {
    /// Create a service over an explicit client
    pub fn new(client: RestaurantClient) -> Self {
        Self { client }
    }

    /// Create a service over the shared client for the current origin
    pub fn from_window() -> Result<Self, ClientError> {
        Ok(Self::new(create_public_client()?))
    }
}

#[async_trait(?Send)]
impl AuthApi for AuthApiService {
    async fn restaurant_login(
        &self,
        request: RestaurantLoginRequest,
    ) -> Result<RestaurantLoginResponse, ClientError> {
        self.client.restaurant_login(&request).await
    }
}
