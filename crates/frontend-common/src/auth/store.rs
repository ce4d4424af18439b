//! Session actions
//!
//! [`SessionStore`] orchestrates the API calls around the session. All state
//! changes go through the [`SessionState`] commits; no borrow of the state is
//! held across an `.await`.

use super::error::AuthError;
use crate::guard::NavigationGuard;
use crate::navigation::{NavigationTarget, Navigator};
use crate::routes::RouteName;
use crate::session::{Session, SessionState};
use arcade_http::{ApiClient, ClientError, UserProfile};
use std::rc::Rc;

/// Async session actions bound to one API client and one navigator
#[derive(Clone)]
pub struct SessionStore {
    state: SessionState,
    client: ApiClient,
    navigator: Rc<dyn Navigator>,
    guard: NavigationGuard,
    validate_on_startup: bool,
}

impl SessionStore {
    pub fn new(state: SessionState, client: ApiClient, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            state,
            client,
            navigator,
            guard: NavigationGuard::default(),
            validate_on_startup: false,
        }
    }

    /// Use `guard`'s login and landing routes for post-action navigation
    #[must_use]
    pub fn with_guard(mut self, guard: NavigationGuard) -> Self {
        self.guard = guard;
        self
    }

    /// Fetch the profile after rehydrating a stored token
    #[must_use]
    pub fn validate_on_startup(mut self, enabled: bool) -> Self {
        self.validate_on_startup = enabled;
        self
    }

    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    // Getters

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.state.current_user()
    }

    pub fn token(&self) -> Option<String> {
        self.state.token()
    }

    pub fn snapshot(&self) -> Session {
        self.state.snapshot()
    }

    // Actions

    /// Rehydrate from the token store. Never fails.
    pub async fn initialize(&self) {
        let Some(token) = self.state.token_store().get() else {
            tracing::debug!("no stored token, starting unauthenticated");
            return;
        };
        self.state.restore_token(token);

        if self.validate_on_startup {
            // A 401 has already reset the session through the interceptors
            if let Err(error) = self.refresh_profile().await {
                tracing::warn!(%error, "stored token could not be validated");
            }
        }
    }

    /// Log in and navigate to the authenticated landing route
    pub async fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        self.login_and_return(username, password, None).await
    }

    /// Log in and navigate back to `return_to` when it names a protected
    /// route, otherwise to the authenticated landing route
    pub async fn login_and_return(
        &self,
        username: &str,
        password: &str,
        return_to: Option<&str>,
    ) -> Result<(), AuthError> {
        match self.client.login(username, password).await {
            Ok(response) => {
                self.state.commit_token(&response.token);
                self.state.commit_user(response.user);
                tracing::info!(%username, "logged in");
                self.navigator.navigate(self.after_login(return_to));
                Ok(())
            }
            Err(error) => {
                tracing::info!(%username, %error, "login rejected");
                self.state.clear_auth();
                Err(AuthError::from_login(error))
            }
        }
    }

    /// End the session. Server failures are logged, never returned.
    pub async fn logout(&self) {
        if let Err(error) = self.client.logout().await {
            tracing::warn!(%error, "server-side logout failed");
        }
        self.state.clear_auth();
        tracing::info!("logged out");
        self.navigator.navigate(NavigationTarget::route(RouteName::Home));
    }

    /// Reset the session locally, without a server call or navigation
    pub fn clear_auth(&self) {
        self.state.clear_auth();
    }

    /// Reload the profile of the authenticated user
    pub async fn refresh_profile(&self) -> Result<UserProfile, ClientError> {
        let profile = self.client.profile().await?;
        self.state.commit_user(profile.clone());
        Ok(profile)
    }

    fn after_login(&self, return_to: Option<&str>) -> NavigationTarget {
        return_to
            .and_then(NavigationTarget::parse)
            .filter(|target| target.route.descriptor().requires_auth)
            .map_or(NavigationTarget::route(self.guard.landing), |target| {
                NavigationTarget::route(target.route)
            })
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.state)
            .field("client", &self.client)
            .field("validate_on_startup", &self.validate_on_startup)
            .finish_non_exhaustive()
    }
}
