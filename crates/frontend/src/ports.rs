//! Capabilities the login flow needs from its environment
//!
//! The browser provides all of these as globals (`localStorage`,
//! `window.location`, `setTimeout`). Taking them as trait objects lets the
//! flow run against in-memory fakes, see [`crate::test_utils`].

use crate::error::LoginError;
use std::time::Duration;

/// Durable key-value storage for the access token
pub trait TokenStore {
    fn set(&self, key: &str, value: &str) -> Result<(), LoginError>;
}

/// Moves the browser to another page
pub trait Navigator {
    fn go_to(&self, path: &str);
}

/// Runs a task once after a delay
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Box<dyn Cancel>;
}

/// Handle to a scheduled task. Cancelling after the task ran is a no-op.
pub trait Cancel {
    fn cancel(self: Box<Self>);
}
