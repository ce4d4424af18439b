//! Authentication errors surfaced to the UI

use arcade_http::ClientError;
use thiserror::Error;

/// Message shown when the server gives no reason for a failed login
pub const LOGIN_FAILED: &str = "Login failed";

/// Errors returned by the session actions
#[derive(Debug, Error)]
pub enum AuthError {
    /// The server rejected the credentials
    #[error("{0}")]
    Credential(String),

    /// The API could not be reached
    #[error("Login failed")]
    Network,

    /// The client itself is misconfigured
    #[error(transparent)]
    Client(ClientError),
}

impl AuthError {
    /// Normalize a login failure into the message the UI displays
    pub fn from_login(error: ClientError) -> Self {
        match error {
            ClientError::Request(_) => Self::Network,
            ClientError::Configuration(_) => Self::Client(error),
            other => Self::Credential(
                other
                    .server_message()
                    .map_or_else(|| LOGIN_FAILED.to_string(), str::to_owned),
            ),
        }
    }

    /// Text suitable for direct display
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_server_message_is_kept() {
        let error = AuthError::from_login(ClientError::from_status(
            StatusCode::BAD_REQUEST,
            r#"{"message":"Invalid credentials"}"#,
        ));
        assert_eq!(error.user_message(), "Invalid credentials");
    }

    #[test]
    fn test_missing_message_falls_back() {
        let error = AuthError::from_login(ClientError::from_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            "<html>oops</html>",
        ));
        assert!(matches!(&error, AuthError::Credential(m) if m == LOGIN_FAILED));

        let error = AuthError::from_login(ClientError::Serialization(
            serde_json::from_str::<u8>("nope").unwrap_err(),
        ));
        assert_eq!(error.user_message(), LOGIN_FAILED);
    }

    #[test]
    fn test_configuration_errors_are_not_credential_errors() {
        let error = AuthError::from_login(ClientError::Configuration("bad url".into()));
        assert!(matches!(error, AuthError::Client(_)));
    }
}
