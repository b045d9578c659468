//! In-memory fakes for the login ports

use crate::error::LoginError;
use crate::ports::{Cancel, Navigator, Scheduler, TokenStore};
use crate::services::AuthApi;
use async_trait::async_trait;
use bistro_http::ClientError;
use bistro_http::types::{RestaurantLoginRequest, RestaurantLoginResponse};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

/// Auth API answering from a queue of canned results
#[derive(Default)]
pub struct FakeAuthApi {
    responses: RefCell<VecDeque<Result<RestaurantLoginResponse, ClientError>>>,
    requests: RefCell<Vec<RestaurantLoginRequest>>,
}

impl FakeAuthApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful login returning `token`
    pub fn push_token(&self, token: &str) {
        self.responses
            .borrow_mut()
            .push_back(Ok(RestaurantLoginResponse {
                access_token: token.to_string(),
            }));
    }

    /// Queue a failure
    pub fn push_error(&self, error: ClientError) {
        self.responses.borrow_mut().push_back(Err(error));
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<RestaurantLoginRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeAuthApi {
    async fn restaurant_login(
        &self,
        request: RestaurantLoginRequest,
    ) -> Result<RestaurantLoginResponse, ClientError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Configuration("no response queued".into())))
    }
}

/// Token store keeping every write in memory
#[derive(Default)]
pub struct MemoryTokenStore {
    writes: RefCell<Vec<(String, String)>>,
    fail: Cell<bool>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects every write
    pub fn failing() -> Self {
        let store = Self::default();
        store.fail.set(true);
        store
    }

    /// `(key, value)` pairs written so far
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.borrow().clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn set(&self, key: &str, value: &str) -> Result<(), LoginError> {
        if self.fail.get() {
            return Err(LoginError::Storage("storage disabled".to_string()));
        }
        self.writes
            .borrow_mut()
            .push((key.to_string(), value.to_string()));
        Ok(())
    }
}

/// Navigator recording the paths it was sent to
#[derive(Default)]
pub struct RecordingNavigator {
    visits: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, path: &str) {
        self.visits.borrow_mut().push(path.to_string());
    }
}

struct ScheduledTask {
    due: Duration,
    task: Option<Box<dyn FnOnce()>>,
    cancelled: Rc<Cell<bool>>,
}

/// Scheduler driven by hand through [`ManualScheduler::advance`]
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    tasks: RefCell<Vec<ScheduledTask>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward and run every task that became due
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
        let now = self.now.get();

        // Take the tasks out first so a task may schedule another one
        let due: Vec<Box<dyn FnOnce()>> = self
            .tasks
            .borrow_mut()
            .iter_mut()
            .filter(|t| t.due <= now && !t.cancelled.get())
            .filter_map(|t| t.task.take())
            .collect();

        for task in due {
            task();
        }
    }

    /// Tasks neither run nor cancelled
    pub fn pending(&self) -> usize {
        self.tasks
            .borrow()
            .iter()
            .filter(|t| t.task.is_some() && !t.cancelled.get())
            .count()
    }

    /// Tasks cancelled before they ran
    pub fn cancelled(&self) -> usize {
        self.tasks
            .borrow()
            .iter()
            .filter(|t| t.task.is_some() && t.cancelled.get())
            .count()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Box<dyn Cancel> {
        let cancelled = Rc::new(Cell::new(false));
        self.tasks.borrow_mut().push(ScheduledTask {
            due: self.now.get() + delay,
            task: Some(task),
            cancelled: cancelled.clone(),
        });
        Box::new(ManualHandle(cancelled))
    }
}

struct ManualHandle(Rc<Cell<bool>>);

impl Cancel for ManualHandle {
    fn cancel(self: Box<Self>) {
        self.0.set(true);
    }
}
