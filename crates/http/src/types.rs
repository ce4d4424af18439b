//! Wire types shared with the authentication API

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Login request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque credential to attach to subsequent requests
    pub token: String,
    /// Profile of the authenticated user
    #[serde(default)]
    pub user: UserProfile,
}

/// Registration request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Generic `{message}` acknowledgement
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// User profile as returned by the API.
///
/// The payload is treated as data; the client never interprets it beyond
/// the display helpers below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(pub JsonValue);

impl UserProfile {
    /// Best-effort display name (`display_name`, falling back to `username`)
    pub fn display_name(&self) -> Option<&str> {
        self.0
            .get("display_name")
            .and_then(JsonValue::as_str)
            .or_else(|| self.0.get("username").and_then(JsonValue::as_str))
    }

    /// Raw JSON payload
    pub const fn as_json(&self) -> &JsonValue {
        &self.0
    }
}

impl From<JsonValue> for UserProfile {
    fn from(value: JsonValue) -> Self {
        Self(value)
    }
}

/// Error body returned with non-2xx responses.
///
/// The API is not uniform about the field name, so the first present of
/// `message`, `error` and `detail` wins.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
    detail: Option<String>,
}

impl ErrorBody {
    pub(crate) fn into_message(self) -> Option<String> {
        self.message
            .or(self.error)
            .or(self.detail)
            .filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_response_parses_token_and_user() {
        let body = json!({"token": "abc123", "user": {"username": "alice"}});
        let response: LoginResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.token, "abc123");
        assert_eq!(response.user.display_name(), Some("alice"));
    }

    #[test]
    fn test_login_response_without_user() {
        let response: LoginResponse = serde_json::from_str(r#"{"token":"t"}"#).unwrap();
        assert_eq!(response.user, UserProfile::default());
    }

    #[test]
    fn test_display_name_prefers_display_name() {
        let profile = UserProfile(json!({"username": "alice", "display_name": "Alice"}));
        assert_eq!(profile.display_name(), Some("Alice"));
    }

    #[test]
    fn test_error_body_field_precedence() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error":"Username already exists.","detail":"x"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Username already exists."));

        let body: ErrorBody = serde_json::from_str(r#"{"message":"  "}"#).unwrap();
        assert_eq!(body.into_message(), None);
    }

    #[test]
    fn test_register_request_omits_missing_email() {
        let request = RegisterRequest {
            username: "bob".into(),
            password: "pw".into(),
            email: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("email").is_none());
    }
}
