//! Submitting credentials and redirecting on success

use crate::browser::{LocalTokenStore, LocationNavigator, TimeoutScheduler};
use crate::config::LoginConfig;
use crate::error::LoginError;
use crate::login::state::Credentials;
use crate::ports::{Cancel, Navigator, Scheduler, TokenStore};
use crate::services::{AuthApi, AuthApiService};
use bistro_http::ClientError;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Redirect waiting on its timer
struct PendingRedirect {
    handle: Box<dyn Cancel>,
    fired: Rc<Cell<bool>>,
}

impl PendingRedirect {
    fn cancel(self) {
        if !self.fired.get() {
            self.handle.cancel();
        }
    }
}

/// Login flow for one mounted form.
///
/// Owns the pending redirect so that it can be cancelled when the form goes
/// away. At most one redirect is pending at any time.
pub struct LoginFlow {
    api: Rc<dyn AuthApi>,
    tokens: Rc<dyn TokenStore>,
    navigator: Rc<dyn Navigator>,
    scheduler: Rc<dyn Scheduler>,
    redirect: RefCell<Option<PendingRedirect>>,
    torn_down: Cell<bool>,
}

impl LoginFlow {
    pub fn new(
        api: Rc<dyn AuthApi>,
        tokens: Rc<dyn TokenStore>,
        navigator: Rc<dyn Navigator>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        Self {
            api,
            tokens,
            navigator,
            scheduler,
            redirect: RefCell::new(None),
            torn_down: Cell::new(false),
        }
    }

    /// Flow wired to the browser: shared client, localStorage, location, setTimeout
    pub fn browser() -> Result<Self, ClientError> {
        Ok(Self::new(
            Rc::new(AuthApiService::from_window()?),
            Rc::new(LocalTokenStore),
            Rc::new(LocationNavigator),
            Rc::new(TimeoutScheduler),
        ))
    }

    /// Log in with `credentials`.
    ///
    /// On success the token is stored and the dashboard redirect is
    /// scheduled. Empty fields fail before any request is made.
    pub async fn submit(&self, credentials: Credentials) -> Result<(), LoginError> {
        let result = self.try_submit(credentials).await;

        match &result {
            Ok(()) => tracing::info!("restaurant login succeeded"),
            Err(LoginError::MissingField(field)) => {
                tracing::debug!(%field, "login blocked by empty field");
            }
            Err(error) => tracing::error!(error = ?error, "restaurant login failed"),
        }

        result
    }

    async fn try_submit(&self, credentials: Credentials) -> Result<(), LoginError> {
        if let Some(field) = credentials.missing_field() {
            return Err(LoginError::MissingField(field));
        }

        let response = self.api.restaurant_login(credentials.into()).await?;
        self.tokens.set(LoginConfig::TOKEN_KEY, &response.access_token)?;
        self.schedule_redirect();
        Ok(())
    }

    fn schedule_redirect(&self) {
        if self.torn_down.get() {
            tracing::debug!("login form gone, not redirecting");
            return;
        }

        let fired = Rc::new(Cell::new(false));
        let task = {
            let fired = fired.clone();
            let navigator = self.navigator.clone();
            Box::new(move || {
                fired.set(true);
                navigator.go_to(LoginConfig::DASHBOARD_PATH);
            })
        };
        let handle = self.scheduler.schedule(LoginConfig::redirect_delay(), task);

        let previous = self.redirect.replace(Some(PendingRedirect { handle, fired }));
        if let Some(previous) = previous {
            previous.cancel();
        }
    }

    /// Whether a redirect is scheduled and has not fired yet
    pub fn has_pending_redirect(&self) -> bool {
        self.redirect
            .borrow()
            .as_ref()
            .is_some_and(|pending| !pending.fired.get())
    }

    /// Cancel any pending redirect; later successes no longer redirect
    pub fn teardown(&self) {
        self.torn_down.set(true);
        if let Some(pending) = self.redirect.take() {
            tracing::debug!("cancelling pending redirect");
            pending.cancel();
        }
    }
}

/// Shared login flow handed to [`LoginForm`](crate::login::LoginForm) through context.
///
/// Without one the form builds a browser-wired flow itself.
#[derive(Clone)]
pub struct LoginFlowHandle(pub Rc<LoginFlow>);

impl PartialEq for LoginFlowHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
