//! Session state container
//!
//! [`SessionState`] is the only writer of the session. Every token change is
//! written through to the [`TokenStore`] before subscribers are notified, so
//! anything reacting to a commit (the router, the UI) observes a fully
//! applied state.

use crate::storage::TokenStore;
use arcade_http::UserProfile;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Snapshot of the current authentication status and identity
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
    user: Option<UserProfile>,
}

impl Session {
    /// Unauthenticated session
    pub const fn new() -> Self {
        Self {
            token: None,
            user: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn authenticated(token: &str) -> Self {
        Self {
            token: Some(token.to_owned()),
            user: None,
        }
    }

    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub const fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }
}

/// Handle returned by [`SessionState::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&Session)>;

/// Shared, reactive session container. Clones share the same state.
#[derive(Clone)]
pub struct SessionState {
    inner: Rc<Inner>,
}

struct Inner {
    session: RefCell<Session>,
    store: TokenStore,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

impl SessionState {
    /// Create an unauthenticated session backed by `store`
    pub fn new(store: TokenStore) -> Self {
        Self {
            inner: Rc::new(Inner {
                session: RefCell::new(Session::new()),
                store,
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    pub fn token_store(&self) -> &TokenStore {
        &self.inner.store
    }

    // Getters

    pub fn snapshot(&self) -> Session {
        self.inner.session.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.session.borrow().is_authenticated()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.session.borrow().token.clone()
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.inner.session.borrow().user.clone()
    }

    // Commits

    /// Adopt a freshly issued token and persist it
    pub fn commit_token(&self, token: &str) {
        self.inner.store.set(token);
        self.update(|session| session.token = Some(token.to_owned()));
        tracing::debug!("session authenticated");
    }

    /// Adopt a token read back from the store; nothing is written
    pub fn restore_token(&self, token: String) {
        self.update(|session| session.token = Some(token));
        tracing::debug!("session rehydrated from stored token");
    }

    /// Attach the user profile. Ignored while unauthenticated.
    pub fn commit_user(&self, user: UserProfile) {
        if !self.is_authenticated() {
            tracing::warn!("dropping profile commit for an unauthenticated session");
            return;
        }
        self.update(|session| session.user = Some(user));
    }

    /// Reset to unauthenticated. Idempotent; no server call, no navigation.
    pub fn clear_auth(&self) {
        let was_authenticated = self.is_authenticated();
        self.inner.store.clear();
        self.update(|session| {
            session.token = None;
            session.user = None;
        });
        if was_authenticated {
            tracing::debug!("session cleared");
        }
    }

    // Subscriptions

    /// Register a listener invoked after every commit
    pub fn subscribe(&self, listener: Rc<dyn Fn(&Session)>) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner.listeners.borrow_mut().push((id, listener));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .listeners
            .borrow_mut()
            .retain(|(listener_id, _)| *listener_id != id);
    }

    fn update(&self, mutate: impl FnOnce(&mut Session)) {
        let snapshot = {
            let mut session = self.inner.session.borrow_mut();
            mutate(&mut session);
            session.clone()
        };
        // Listeners may commit again, so notify from a copy of the list
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

impl std::fmt::Debug for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let session = self.inner.session.borrow();
        f.debug_struct("SessionState")
            .field("authenticated", &session.is_authenticated())
            .field("has_user", &session.user.is_some())
            .finish_non_exhaustive()
    }
}
