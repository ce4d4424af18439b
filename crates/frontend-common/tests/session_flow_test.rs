//! End-to-end session flows against a mock authentication API

use arcade_frontend_common::{
    AuthConfig, MemoryStore, NavigationTarget, Navigator, RouteName, SessionConfig,
    SessionRuntime, Transition,
};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Navigator that records every target it is asked to show
#[derive(Default)]
struct RecordingNavigator {
    visited: RefCell<Vec<NavigationTarget>>,
}

impl RecordingNavigator {
    fn last(&self) -> Option<NavigationTarget> {
        self.visited.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: NavigationTarget) {
        self.visited.borrow_mut().push(target);
    }
}

struct Harness {
    runtime: SessionRuntime,
    backend: MemoryStore,
    navigator: Rc<RecordingNavigator>,
}

fn harness(base_url: &str, backend: MemoryStore, validate_on_startup: bool) -> Harness {
    let navigator = Rc::new(RecordingNavigator::default());
    let config = SessionConfig {
        api_base_url: base_url.to_string(),
        validate_on_startup,
        ..SessionConfig::default()
    };
    let runtime =
        SessionRuntime::new(&config, Rc::new(backend.clone()), navigator.clone()).unwrap();
    Harness {
        runtime,
        backend,
        navigator,
    }
}

fn stored_token(backend: &MemoryStore) -> Option<String> {
    use arcade_frontend_common::KeyValueStore;
    backend.get_item(AuthConfig::TOKEN_STORAGE_KEY).unwrap()
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "abc123",
            "user": {"username": "alice", "display_name": "Alice"}
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fresh_load_redirects_protected_route_to_login() {
    let server = MockServer::start().await;
    let h = harness(&server.uri(), MemoryStore::new(), false);

    h.runtime.store().initialize().await;

    assert!(!h.runtime.state().is_authenticated());
    assert_eq!(
        h.runtime.resolve("/profile").unwrap(),
        Transition::Committed(NavigationTarget::with_redirect(RouteName::Login, "/profile"))
    );
}

#[tokio::test]
async fn test_stored_token_rehydrates_without_server_call() {
    let server = MockServer::start().await;
    // Any request would fail the expectation below
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let backend = MemoryStore::with_item(AuthConfig::TOKEN_STORAGE_KEY, "abc123");
    let h = harness(&server.uri(), backend, false);

    h.runtime.store().initialize().await;

    assert_eq!(h.runtime.state().token().as_deref(), Some("abc123"));
    assert_eq!(
        h.runtime.resolve("/profile").unwrap(),
        Transition::Committed(NavigationTarget::route(RouteName::Profile))
    );
    assert!(h.navigator.visited.borrow().is_empty());
}

#[tokio::test]
async fn test_rehydrated_token_is_attached_to_api_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"username": "alice"})))
        .expect(1)
        .mount(&server)
        .await;

    let backend = MemoryStore::with_item(AuthConfig::TOKEN_STORAGE_KEY, "abc123");
    let h = harness(&server.uri(), backend, true);

    h.runtime.store().initialize().await;

    let user = h.runtime.state().current_user().unwrap();
    assert_eq!(user.display_name(), Some("alice"));
}

#[tokio::test]
async fn test_startup_validation_resets_rejected_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let backend = MemoryStore::with_item(AuthConfig::TOKEN_STORAGE_KEY, "expired");
    let h = harness(&server.uri(), backend, true);

    h.runtime.store().initialize().await;

    assert!(!h.runtime.state().is_authenticated());
    assert_eq!(stored_token(&h.backend), None);
    assert_eq!(
        h.navigator.last(),
        Some(NavigationTarget::route(RouteName::Login))
    );
}

#[tokio::test]
async fn test_rejected_credentials_surface_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "Invalid credentials"
        })))
        .mount(&server)
        .await;

    let h = harness(&server.uri(), MemoryStore::new(), false);

    let error = h.runtime.store().login("alice", "wrong").await.unwrap_err();

    assert_eq!(error.to_string(), "Invalid credentials");
    assert!(!h.runtime.state().is_authenticated());
    assert_eq!(stored_token(&h.backend), None);
    assert!(h.navigator.visited.borrow().is_empty());
}

#[tokio::test]
async fn test_unreachable_api_gives_generic_login_failure() {
    let h = harness("http://127.0.0.1:1", MemoryStore::new(), false);

    let error = h.runtime.store().login("alice", "secret").await.unwrap_err();

    assert_eq!(error.to_string(), "Login failed");
    assert!(!h.runtime.state().is_authenticated());
}

#[tokio::test]
async fn test_login_persists_token_and_lands_on_profile() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    let h = harness(&server.uri(), MemoryStore::new(), false);
    h.runtime.store().login("alice", "secret").await.unwrap();

    assert_eq!(stored_token(&h.backend).as_deref(), Some("abc123"));
    assert_eq!(
        h.runtime.state().current_user().unwrap().display_name(),
        Some("Alice")
    );
    assert_eq!(
        h.navigator.last(),
        Some(NavigationTarget::route(RouteName::Profile))
    );
    // The login page is skipped once authenticated
    assert_eq!(
        h.runtime.resolve("/login").unwrap(),
        Transition::Committed(NavigationTarget::route(RouteName::Profile))
    );
}

#[tokio::test]
async fn test_unauthorized_api_call_resets_session() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Invalid token."
        })))
        .mount(&server)
        .await;

    let h = harness(&server.uri(), MemoryStore::new(), false);
    h.runtime.store().login("alice", "secret").await.unwrap();

    let error = h.runtime.store().refresh_profile().await.unwrap_err();

    // Absorbed as a reset and still returned to the caller
    assert!(error.is_auth_expired());
    assert!(!h.runtime.state().is_authenticated());
    assert_eq!(h.runtime.state().current_user(), None);
    assert_eq!(stored_token(&h.backend), None);
    assert_eq!(
        h.navigator.last(),
        Some(NavigationTarget::route(RouteName::Login))
    );
    assert_eq!(
        h.runtime.resolve("/friends").unwrap(),
        Transition::Committed(NavigationTarget::with_redirect(RouteName::Login, "/friends"))
    );
}

async fn assert_logout_resets(logout_response: ResponseTemplate) {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/logout"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(logout_response)
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server.uri(), MemoryStore::new(), false);
    h.runtime.store().login("alice", "secret").await.unwrap();

    h.runtime.store().logout().await;

    assert!(!h.runtime.state().is_authenticated());
    assert_eq!(stored_token(&h.backend), None);
    assert_eq!(h.navigator.last(), Some(NavigationTarget::route(RouteName::Home)));
}

#[tokio::test]
async fn test_logout_success_and_failure_look_the_same() {
    assert_logout_resets(ResponseTemplate::new(200).set_body_json(json!({"message": "bye"}))).await;
    assert_logout_resets(ResponseTemplate::new(500).set_body_string("boom")).await;
}

#[tokio::test]
async fn test_logout_with_unreachable_api_still_clears() {
    let backend = MemoryStore::with_item(AuthConfig::TOKEN_STORAGE_KEY, "abc123");
    let h = harness("http://127.0.0.1:1", backend, false);
    h.runtime.store().initialize().await;

    h.runtime.store().logout().await;

    assert!(!h.runtime.state().is_authenticated());
    assert_eq!(stored_token(&h.backend), None);
    assert_eq!(h.navigator.last(), Some(NavigationTarget::route(RouteName::Home)));
}
