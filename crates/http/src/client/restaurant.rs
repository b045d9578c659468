//! Restaurant account endpoints

use super::{RestaurantClient, error::ClientError};
use crate::types::{RestaurantLoginRequest, RestaurantLoginResponse};

/// Path of the restaurant login endpoint
pub const RESTAURANT_LOGIN_PATH: &str = "/api/restaurant/login";

impl RestaurantClient {
    /// Exchange restaurant credentials for an access token
    pub async fn restaurant_login(
        &self,
        request: &RestaurantLoginRequest,
    ) -> Result<RestaurantLoginResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, RESTAURANT_LOGIN_PATH)
            .json(request);
        self.execute(req).await
    }
}
