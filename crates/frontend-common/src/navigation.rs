//! Navigation targets and the navigator seam

use crate::config::AuthConfig;
use crate::routes::{RouteName, find_by_path};

/// Where a navigation should land
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    pub route: RouteName,
    /// Destination interrupted by a guard redirect, returned to after login
    pub redirect: Option<String>,
}

impl NavigationTarget {
    pub const fn route(route: RouteName) -> Self {
        Self {
            route,
            redirect: None,
        }
    }

    pub fn with_redirect(route: RouteName, redirect: impl Into<String>) -> Self {
        Self {
            route,
            redirect: Some(redirect.into()),
        }
    }

    /// Full location, e.g. `/login?redirect=%2Fprofile`
    pub fn href(&self) -> String {
        let path = self.route.path();
        match &self.redirect {
            Some(redirect) => {
                let query = url::form_urlencoded::Serializer::new(String::new())
                    .append_pair(AuthConfig::REDIRECT_QUERY_KEY, redirect)
                    .finish();
                format!("{path}?{query}")
            }
            None => path.to_string(),
        }
    }

    /// Parse a location produced by [`href`](Self::href)
    pub fn parse(location: &str) -> Option<Self> {
        let route = find_by_path(location)?.name;
        let redirect = location.split_once('?').and_then(|(_, query)| {
            url::form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key == AuthConfig::REDIRECT_QUERY_KEY)
                .map(|(_, value)| value.into_owned())
        });
        Some(Self { route, redirect })
    }
}

/// Sink for navigation requests issued outside the router (actions, interceptors)
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn navigate(&self, target: NavigationTarget);
}

/// Navigator pushing onto the browser history that `yew-router` listens to
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

#[cfg(target_arch = "wasm32")]
impl Navigator for BrowserNavigator {
    fn navigate(&self, target: NavigationTarget) {
        use yew_router::history::{BrowserHistory, History};

        let href = target.href();
        tracing::debug!(%href, "navigating");
        BrowserHistory::new().push(href);
    }
}
