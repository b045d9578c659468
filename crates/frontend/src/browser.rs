//! Browser-backed implementations of the login ports

use crate::error::LoginError;
use crate::ports::{Cancel, Navigator, Scheduler, TokenStore};
use gloo::timers::callback::Timeout;
use std::time::Duration;
use web_sys::Storage;

/// Get localStorage
fn get_local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Token store backed by `window.localStorage`.
///
/// Values are written verbatim, not JSON encoded, so other pages can read the
/// token with a plain `localStorage.getItem`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn set(&self, key: &str, value: &str) -> Result<(), LoginError> {
        let storage = get_local_storage()
            .ok_or_else(|| LoginError::Storage("localStorage is not available".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| LoginError::Storage(format!("{e:?}")))
    }
}

/// Navigator doing a full page load through `window.location`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn go_to(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            tracing::error!(path, "no window to navigate");
            return;
        };
        if let Err(e) = window.location().set_href(path) {
            tracing::error!(path, error = ?e, "navigation failed");
        }
    }
}

/// Scheduler backed by `setTimeout`
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Box<dyn Cancel> {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Box::new(PendingTimeout(Timeout::new(millis, task)))
    }
}

/// Dropping a gloo `Timeout` clears it, so the handle has to be held until it fires
struct PendingTimeout(Timeout);

impl Cancel for PendingTimeout {
    fn cancel(self: Box<Self>) {
        drop(self.0.cancel());
    }
}
