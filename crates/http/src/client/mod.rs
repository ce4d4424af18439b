//! Arcade API client

pub mod auth;
pub mod error;
pub mod middleware;

use error::ClientError;
use middleware::{InterceptorChain, RequestInterceptor, ResponseInterceptor};
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use std::rc::Rc;
use std::time::Duration;

const DEFAULT_USER_AGENT: &str = "arcade-client/0.1.0";

/// Arcade API client.
///
/// Requests built with [`request`](Self::request) and sent with
/// [`execute`](Self::execute) pass through the interceptor chain. The
/// `public_*` variants bypass it for endpoints that are reachable without a
/// session.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    interceptors: Rc<InterceptorChain>,
}

impl ApiClient {
    /// Create a new client without interceptors
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder with the outbound interceptors applied
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.interceptors
            .apply_request(self.public_request(method, path))
    }

    /// Create a request builder that skips the interceptor chain
    pub fn public_request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request, run the inbound interceptors and decode the body
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let body = self.send(request, true).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Execute a request through the inbound interceptors, ignoring the body
    pub async fn dispatch(&self, request: reqwest::RequestBuilder) -> Result<(), ClientError> {
        self.send(request, true).await.map(drop)
    }

    /// Execute a request without running the inbound interceptors
    pub async fn execute_public<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let body = self.send(request, false).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        intercept: bool,
    ) -> Result<String, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if intercept {
            self.interceptors.apply_response(status);
        }

        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            tracing::debug!(status = status.as_u16(), "API call failed");
            Err(ClientError::from_status(status, &body))
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("interceptors", &self.interceptors)
            .finish_non_exhaustive()
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    interceptors: InterceptorChain,
}

impl ApiClientBuilder {
    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout (ignored on WASM, where fetch has no timeout)
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Append an outbound interceptor
    #[must_use]
    pub fn request_interceptor(mut self, interceptor: Rc<dyn RequestInterceptor>) -> Self {
        self.interceptors.push_request(interceptor);
        self
    }

    /// Append an inbound interceptor
    #[must_use]
    pub fn response_interceptor(mut self, interceptor: Rc<dyn ResponseInterceptor>) -> Self {
        self.interceptors.push_response(interceptor);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        #[cfg(not(target_arch = "wasm32"))]
        let client = {
            let mut builder = ClientBuilder::new().user_agent(user_agent);
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            builder.build()?
        };

        #[cfg(target_arch = "wasm32")]
        let client = {
            let _ = self.timeout;
            ClientBuilder::new().user_agent(user_agent).build()?
        };

        Ok(ApiClient {
            client,
            base_url,
            interceptors: Rc::new(self.interceptors),
        })
    }
}
