//! Client-side session core: token persistence, session state and actions,
//! credential interceptors, the route table and the navigation guard.

pub mod auth;
pub mod config;
pub mod guard;
pub mod interceptor;
pub mod navigation;
pub mod routes;
pub mod runtime;
pub mod session;
pub mod storage;

pub use auth::{AuthError, SessionStore};
pub use config::{AuthConfig, SessionConfig};
pub use guard::{GuardDecision, NavigationGuard, Router, RouterError, Transition};
pub use navigation::{NavigationTarget, Navigator};
pub use routes::{ROUTES, RouteDescriptor, RouteName};
pub use runtime::SessionRuntime;
pub use session::{Session, SessionState, SubscriptionId};
pub use storage::{KeyValueStore, MemoryStore, StorageError, TokenStore};

#[cfg(target_arch = "wasm32")]
pub use navigation::BrowserNavigator;
#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStorage;
