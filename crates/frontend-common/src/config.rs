//! Frontend configuration

use serde::Deserialize;

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// localStorage key holding the session token
    pub const TOKEN_STORAGE_KEY: &'static str = "authToken";
    /// Scheme prefixed to the token in the `Authorization` header
    pub const AUTH_SCHEME: &'static str = "Bearer";
    /// Query parameter carrying the destination a guard redirect interrupted
    pub const REDIRECT_QUERY_KEY: &'static str = "redirect";
    /// Path appended to the page origin when no API base URL is configured
    pub const API_PREFIX: &'static str = "/api";
    /// Upper bound on guard redirects followed for a single navigation
    pub const MAX_REDIRECTS: usize = 8;
}

/// Runtime settings for the session layer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Base URL of the API, e.g. `https://localhost/api`
    pub api_base_url: String,
    /// Scheme used for the `Authorization` header
    pub auth_scheme: String,
    /// Fetch the profile after rehydrating a stored token
    pub validate_on_startup: bool,
    /// User agent sent by the native client
    pub user_agent: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            api_base_url: AuthConfig::API_PREFIX.to_string(),
            auth_scheme: AuthConfig::AUTH_SCHEME.to_string(),
            validate_on_startup: false,
            user_agent: None,
        }
    }
}

impl SessionConfig {
    /// Configuration pointing at `<origin>/api`
    pub fn for_origin(origin: &str) -> Self {
        Self {
            api_base_url: format!(
                "{}{}",
                origin.trim_end_matches('/'),
                AuthConfig::API_PREFIX
            ),
            ..Self::default()
        }
    }

    /// Configuration derived from `window.location.origin`
    #[cfg(target_arch = "wasm32")]
    pub fn from_window() -> Self {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .map_or_else(Self::default, |origin| Self::for_origin(&origin))
    }
}
