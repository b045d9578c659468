//! Frontend configuration

use std::time::Duration;

/// Restaurant login configuration
pub struct LoginConfig;

impl LoginConfig {
    /// Local storage key the access token is written under
    pub const TOKEN_KEY: &'static str = "access_token";

    /// Page the browser is sent to after a successful login
    pub const DASHBOARD_PATH: &'static str = "/restaurant/dashboard";

    /// Delay between the success notification and the redirect, in milliseconds
    pub const REDIRECT_DELAY_MS: u32 = 1_500;

    /// Notification shown once the token is stored
    pub const SUCCESS_MESSAGE: &'static str = "Login successful! Redirecting...";

    /// Notification shown when the server gave no usable message
    pub const GENERIC_ERROR_MESSAGE: &'static str = "An error occurred during login.";

    /// Notification shown when a required field is empty
    pub const MISSING_FIELDS_MESSAGE: &'static str = "Please enter all required fields";

    /// Redirect delay as a [`Duration`]
    pub const fn redirect_delay() -> Duration {
        Duration::from_millis(Self::REDIRECT_DELAY_MS as u64)
    }
}
