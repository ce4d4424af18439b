//! Authentication API client methods

use super::{ApiClient, ClientError};
use crate::types::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UserProfile};
use reqwest::Method;

pub const LOGIN_PATH: &str = "/login";
pub const LOGOUT_PATH: &str = "/logout";
pub const REGISTER_PATH: &str = "/register";
pub const PROFILE_PATH: &str = "/profile";

impl ApiClient {
    /// Exchange credentials for a token (public endpoint)
    ///
    /// A 401 here means the credentials were rejected, so the inbound
    /// interceptors are not consulted.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, ClientError> {
        let request = self.public_request(Method::POST, LOGIN_PATH).json(&LoginRequest {
            username: username.to_owned(),
            password: password.to_owned(),
        });
        self.execute_public(request).await
    }

    /// End the server-side session; the response body is ignored
    pub async fn logout(&self) -> Result<(), ClientError> {
        let request = self.request(Method::POST, LOGOUT_PATH);
        self.dispatch(request).await
    }

    /// Create an account (public endpoint)
    pub async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ClientError> {
        let request = self.public_request(Method::POST, REGISTER_PATH).json(request);
        self.execute_public(request).await
    }

    /// Fetch the profile of the authenticated user
    pub async fn profile(&self) -> Result<UserProfile, ClientError> {
        let request = self.request(Method::GET, PROFILE_PATH);
        self.execute(request).await
    }
}
