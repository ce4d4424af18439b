//! Explicit wiring of the session layer
//!
//! Construction order matters: the interceptors need the session state and
//! the navigator, the API client needs the interceptors, and the session
//! store needs the client.

use crate::auth::SessionStore;
use crate::config::{AuthConfig, SessionConfig};
use crate::guard::{NavigationGuard, Router, RouterError, Transition};
use crate::interceptor::{AttachCredential, ResetOnUnauthorized};
use crate::navigation::Navigator;
use crate::session::SessionState;
use crate::storage::{KeyValueStore, TokenStore};
use arcade_http::{ApiClient, ClientError};
use std::rc::Rc;

/// One session, its API client, its router and its navigation sink
#[derive(Clone)]
pub struct SessionRuntime {
    state: SessionState,
    store: SessionStore,
    router: Rc<Router>,
    navigator: Rc<dyn Navigator>,
}

impl SessionRuntime {
    pub fn new(
        config: &SessionConfig,
        backend: Rc<dyn KeyValueStore>,
        navigator: Rc<dyn Navigator>,
    ) -> Result<Self, ClientError> {
        let guard = NavigationGuard::default();
        let state = SessionState::new(TokenStore::new(backend, AuthConfig::TOKEN_STORAGE_KEY));

        let mut builder = ApiClient::builder()
            .base_url(&config.api_base_url)
            .request_interceptor(Rc::new(AttachCredential::new(
                state.clone(),
                config.auth_scheme.clone(),
            )))
            .response_interceptor(Rc::new(ResetOnUnauthorized::new(
                state.clone(),
                navigator.clone(),
                guard.login,
            )));
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent);
        }
        let client = builder.build()?;

        let store = SessionStore::new(state.clone(), client, navigator.clone())
            .with_guard(guard)
            .validate_on_startup(config.validate_on_startup);

        tracing::debug!(api = %config.api_base_url, "session runtime ready");

        Ok(Self {
            state,
            store,
            router: Rc::new(Router::new(guard)),
            navigator,
        })
    }

    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    pub const fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn navigator(&self) -> Rc<dyn Navigator> {
        self.navigator.clone()
    }

    /// Resolve a navigation against the current session
    pub fn resolve(&self, location: &str) -> Result<Transition, RouterError> {
        self.router.resolve(location, &self.state.snapshot())
    }

    /// Whether both handles share the same router
    pub fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.router, &other.router)
    }
}

impl std::fmt::Debug for SessionRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRuntime")
            .field("store", &self.store)
            .field("router", &self.router)
            .finish_non_exhaustive()
    }
}
