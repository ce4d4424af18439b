//! Session actions, their errors and the Yew bindings

#[cfg(target_arch = "wasm32")]
pub mod context;
pub mod error;
pub mod store;

#[cfg(target_arch = "wasm32")]
pub use context::{SessionContext, SessionProvider, use_is_authenticated, use_session};
pub use error::{AuthError, LOGIN_FAILED};
pub use store::SessionStore;
