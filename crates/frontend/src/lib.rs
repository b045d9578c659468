//! Bistro restaurant login web UI

pub mod app;
pub mod browser;
pub mod client;
pub mod components;
pub mod config;
pub mod error;
pub mod login;
pub mod ports;
pub mod services;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use app::App;
pub use config::LoginConfig;
pub use error::LoginError;
pub use login::{LoginFlow, LoginFlowHandle, LoginForm};
