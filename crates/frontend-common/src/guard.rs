//! Navigation guard and router resolution
//!
//! The guard decides from the in-memory session snapshot only. It never
//! performs I/O, so every transition gets exactly one synchronous decision
//! and a protected view cannot render before its redirect.

use crate::config::AuthConfig;
use crate::navigation::NavigationTarget;
use crate::routes::{RouteDescriptor, RouteName};
use crate::session::Session;
use std::cell::Cell;
use thiserror::Error;

/// Outcome of a guard evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the transition proceed unmodified
    Proceed,
    /// Replace the transition with another target
    Redirect(NavigationTarget),
    /// Abort the transition and stay on the current route
    Cancel,
}

/// Session-based access rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationGuard {
    /// Where unauthenticated users are sent
    pub login: RouteName,
    /// Where authenticated users land after login
    pub landing: RouteName,
}

impl Default for NavigationGuard {
    fn default() -> Self {
        Self {
            login: RouteName::Login,
            landing: RouteName::Profile,
        }
    }
}

impl NavigationGuard {
    /// Decide a transition to `to`. First matching rule wins.
    pub fn evaluate(&self, to: &RouteDescriptor, session: &Session) -> GuardDecision {
        if to.requires_auth && !session.is_authenticated() {
            tracing::debug!(route = %to.name, "unauthenticated access, redirecting to login");
            return GuardDecision::Redirect(NavigationTarget::with_redirect(self.login, to.path));
        }

        if !to.requires_auth && session.is_authenticated() && to.is_auth_entry() {
            tracing::debug!(route = %to.name, "already authenticated, redirecting to landing");
            return GuardDecision::Redirect(NavigationTarget::route(self.landing));
        }

        GuardDecision::Proceed
    }
}

/// Router errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("redirect limit of {limit} exceeded while navigating to {path}")]
    RedirectLoop { path: String, limit: usize },
}

/// Result of resolving a navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The route was entered, possibly after redirects
    Committed(NavigationTarget),
    /// The guard cancelled; the current route is unchanged
    Cancelled,
    /// No route is registered for the path
    NotFound,
}

/// Guard callback: `(to, from, session)` in, exactly one decision out
pub type GuardFn = Box<dyn Fn(&RouteDescriptor, Option<&RouteDescriptor>, &Session) -> GuardDecision>;

/// Sequences navigation between the registered routes
pub struct Router {
    guard: GuardFn,
    current: Cell<Option<RouteName>>,
}

impl Router {
    /// Router evaluating `guard` before every transition
    pub fn new(guard: NavigationGuard) -> Self {
        Self::with_guard(Box::new(
            move |to: &RouteDescriptor, _from: Option<&RouteDescriptor>, session: &Session| {
                guard.evaluate(to, session)
            },
        ))
    }

    /// Router with a custom guard callback
    pub fn with_guard(guard: GuardFn) -> Self {
        Self {
            guard,
            current: Cell::new(None),
        }
    }

    /// Route the router last committed
    pub fn current(&self) -> Option<RouteName> {
        self.current.get()
    }

    /// Resolve a navigation to `location`, following guard redirects
    pub fn resolve(&self, location: &str, session: &Session) -> Result<Transition, RouterError> {
        let Some(mut target) = NavigationTarget::parse(location) else {
            tracing::debug!(%location, "no route registered");
            return Ok(Transition::NotFound);
        };

        for _ in 0..=AuthConfig::MAX_REDIRECTS {
            let to = target.route.descriptor();
            let from = self.current.get().map(RouteName::descriptor);

            match (self.guard)(to, from, session) {
                GuardDecision::Proceed => {
                    self.current.set(Some(to.name));
                    return Ok(Transition::Committed(target));
                }
                GuardDecision::Redirect(next) => target = next,
                GuardDecision::Cancel => return Ok(Transition::Cancelled),
            }
        }

        Err(RouterError::RedirectLoop {
            path: location.to_string(),
            limit: AuthConfig::MAX_REDIRECTS,
        })
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(NavigationGuard::default())
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("current", &self.current.get())
            .finish_non_exhaustive()
    }
}
