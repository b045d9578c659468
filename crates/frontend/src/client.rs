//! Client configuration and initialization

pub use bistro_http::ClientError;
use bistro_http::RestaurantClient;
use once_cell::sync::Lazy;
use std::sync::{Mutex, PoisonError};
use web_sys::window;

/// Global client instance
static PUBLIC_CLIENT: Lazy<Mutex<Option<RestaurantClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the base URL for API calls
fn get_base_url() -> String {
    // Try to get from window location
    if let Some(window) = window()
        && let Ok(location) = window.location().origin()
    {
        return location;
    }

    // Default to relative URLs
    String::new()
}

/// Get the shared client instance, creating it on first use
pub fn create_public_client() -> Result<RestaurantClient, ClientError> {
    let mut client_lock = PUBLIC_CLIENT
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = RestaurantClient::builder()
        .base_url(get_base_url())
        .build()?;
    *client_lock = Some(client.clone());
    Ok(client)
}
