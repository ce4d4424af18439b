//! Arcade HTTP client
//!
//! Typed access to the authentication API together with the request/response
//! interceptor chain every authenticated call passes through.

pub mod client;
pub mod types;

pub use client::{ApiClient, ApiClientBuilder, error::ClientError};
pub use types::UserProfile;
