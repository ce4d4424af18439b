//! Session-aware interceptors for [`ApiClient`](arcade_http::ApiClient)

use crate::navigation::{NavigationTarget, Navigator};
use crate::routes::RouteName;
use crate::session::SessionState;
use arcade_http::client::middleware::{RequestInterceptor, ResponseInterceptor};
use reqwest::header::AUTHORIZATION;
use reqwest::{RequestBuilder, StatusCode};
use std::rc::Rc;

/// Adds `Authorization: <scheme> <token>` while the session holds a token.
///
/// The token is read at send time, so a commit between building the client
/// and issuing a request is always picked up.
pub struct AttachCredential {
    state: SessionState,
    scheme: String,
}

impl AttachCredential {
    pub fn new(state: SessionState, scheme: impl Into<String>) -> Self {
        Self {
            state,
            scheme: scheme.into(),
        }
    }
}

impl RequestInterceptor for AttachCredential {
    fn intercept(&self, request: RequestBuilder) -> RequestBuilder {
        match self.state.token() {
            Some(token) => request.header(AUTHORIZATION, format!("{} {token}", self.scheme)),
            None => request,
        }
    }
}

/// Resets the session and sends the user to the login route on a 401
pub struct ResetOnUnauthorized {
    state: SessionState,
    navigator: Rc<dyn Navigator>,
    login: RouteName,
}

impl ResetOnUnauthorized {
    pub fn new(state: SessionState, navigator: Rc<dyn Navigator>, login: RouteName) -> Self {
        Self {
            state,
            navigator,
            login,
        }
    }
}

impl ResponseInterceptor for ResetOnUnauthorized {
    fn on_response(&self, status: StatusCode) {
        if status != StatusCode::UNAUTHORIZED {
            return;
        }
        tracing::warn!("credential rejected by the API, resetting session");
        self.state.clear_auth();
        self.navigator.navigate(NavigationTarget::route(self.login));
    }
}
