//! End-to-end login flow against a mock restaurant backend

#![cfg(not(target_arch = "wasm32"))]

use bistro_frontend::login::{Credentials, Field, LoginAction, LoginState, LoginStatus};
use bistro_frontend::services::AuthApiService;
use bistro_frontend::test_utils::{ManualScheduler, MemoryTokenStore, RecordingNavigator};
use bistro_frontend::{LoginConfig, LoginError, LoginFlow};
use bistro_http::RestaurantClient;
use serde_json::json;
use std::rc::Rc;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use yew::prelude::Reducible;

struct Setup {
    tokens: Rc<MemoryTokenStore>,
    navigator: Rc<RecordingNavigator>,
    scheduler: Rc<ManualScheduler>,
    flow: LoginFlow,
}

fn setup(base_url: &str) -> Setup {
    let client = RestaurantClient::new(base_url).unwrap();
    let tokens = Rc::new(MemoryTokenStore::new());
    let navigator = Rc::new(RecordingNavigator::new());
    let scheduler = Rc::new(ManualScheduler::new());
    let flow = LoginFlow::new(
        Rc::new(AuthApiService::new(client)),
        tokens.clone(),
        navigator.clone(),
        scheduler.clone(),
    );
    Setup {
        tokens,
        navigator,
        scheduler,
        flow,
    }
}

/// Drive the form reducer the way the component does for one submission
async fn submit_form(flow: &LoginFlow, email: &str, password: &str) -> LoginState {
    let mut state = Rc::new(LoginState::default());
    state = state.reduce(LoginAction::Input(Field::Email, email.to_string()));
    state = state.reduce(LoginAction::Input(Field::Password, password.to_string()));
    state = state.reduce(LoginAction::Submit);

    let action = match flow.submit(state.credentials.clone()).await {
        Ok(()) => LoginAction::Succeeded,
        Err(error) => LoginAction::Failed(error.user_message()),
    };
    (*state.reduce(action)).clone()
}

#[tokio::test]
async fn test_successful_login_stores_token_and_redirects_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/restaurant/login"))
        .and(body_json(json!({
            "email": "owner@bistro.test",
            "password": "secret"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "T" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let s = setup(&mock_server.uri());
    let state = submit_form(&s.flow, "owner@bistro.test", "secret").await;

    assert_eq!(
        state.status,
        LoginStatus::Success("Login successful! Redirecting...".to_string())
    );
    assert_eq!(
        s.tokens.writes(),
        vec![("access_token".to_string(), "T".to_string())]
    );
    assert!(s.navigator.visits().is_empty());

    s.scheduler.advance(Duration::from_millis(u64::from(LoginConfig::REDIRECT_DELAY_MS)));
    assert_eq!(s.navigator.visits(), vec!["/restaurant/dashboard"]);

    s.scheduler.advance(Duration::from_secs(10));
    assert_eq!(s.navigator.visits().len(), 1);
}

#[tokio::test]
async fn test_invalid_credentials_show_server_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/restaurant/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid credentials" })),
        )
        .mount(&mock_server)
        .await;

    let s = setup(&mock_server.uri());
    let state = submit_form(&s.flow, "owner@bistro.test", "wrong").await;

    assert_eq!(
        state.status,
        LoginStatus::Error("Invalid credentials".to_string())
    );
    assert_eq!(state.credentials.password, "wrong");
    assert!(s.tokens.writes().is_empty());

    s.scheduler.advance(Duration::from_secs(10));
    assert!(s.navigator.visits().is_empty());
}

#[tokio::test]
async fn test_server_error_without_message_uses_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/restaurant/login"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let s = setup(&mock_server.uri());
    let state = submit_form(&s.flow, "owner@bistro.test", "secret").await;

    assert_eq!(
        state.status,
        LoginStatus::Error("An error occurred during login.".to_string())
    );
}

#[tokio::test]
async fn test_network_failure_uses_fallback() {
    // Nothing listens on the discard port
    let s = setup("http://127.0.0.1:9");
    let state = submit_form(&s.flow, "owner@bistro.test", "secret").await;

    assert_eq!(
        state.status,
        LoginStatus::Error(LoginConfig::GENERIC_ERROR_MESSAGE.to_string())
    );
    assert!(s.tokens.writes().is_empty());
}

#[tokio::test]
async fn test_empty_field_never_reaches_backend() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/restaurant/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "T" })))
        .expect(0)
        .mount(&mock_server)
        .await;

    let s = setup(&mock_server.uri());
    let result = s
        .flow
        .submit(Credentials {
            email: String::new(),
            password: "secret".to_string(),
        })
        .await;

    assert!(matches!(result, Err(LoginError::MissingField(Field::Email))));
    assert!(s.tokens.writes().is_empty());
}

#[tokio::test]
async fn test_dismiss_after_failure_keeps_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/restaurant/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid credentials" })),
        )
        .mount(&mock_server)
        .await;

    let s = setup(&mock_server.uri());
    let state = submit_form(&s.flow, "owner@bistro.test", "wrong").await;
    let state = Rc::new(state).reduce(LoginAction::Dismiss);

    assert_eq!(state.status, LoginStatus::Idle);
    assert_eq!(state.credentials.email, "owner@bistro.test");
    assert_eq!(state.credentials.password, "wrong");
}

#[tokio::test]
async fn test_unmount_before_redirect_cancels_navigation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/restaurant/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "T" })))
        .mount(&mock_server)
        .await;

    let s = setup(&mock_server.uri());
    submit_form(&s.flow, "owner@bistro.test", "secret").await;

    s.scheduler.advance(Duration::from_millis(1_000));
    s.flow.teardown();
    s.scheduler.advance(Duration::from_millis(1_000));

    assert!(s.navigator.visits().is_empty());
    assert_eq!(s.tokens.writes().len(), 1);
}
