//! Yew context exposing the session runtime

use crate::auth::SessionStore;
use crate::runtime::SessionRuntime;
use crate::session::Session;
use std::rc::Rc;
use yew::prelude::*;

/// Context value: the runtime plus the last committed session
#[derive(Clone)]
pub struct SessionContext {
    runtime: SessionRuntime,
    session: Session,
}

impl SessionContext {
    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub const fn runtime(&self) -> &SessionRuntime {
        &self.runtime
    }

    pub const fn store(&self) -> &SessionStore {
        self.runtime.store()
    }
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session && self.runtime.same(&other.runtime)
    }
}

#[derive(Properties, Clone)]
pub struct SessionProviderProps {
    pub runtime: SessionRuntime,
    pub children: Children,
}

impl PartialEq for SessionProviderProps {
    fn eq(&self, other: &Self) -> bool {
        self.runtime.same(&other.runtime) && self.children == other.children
    }
}

/// Re-renders its children whenever the session is committed
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_state(|| props.runtime.state().snapshot());

    {
        let session = session.clone();
        let state = props.runtime.state().clone();
        use_effect_with((), move |_| {
            let listener = {
                let session = session.clone();
                state.subscribe(Rc::new(move |snapshot: &Session| session.set(snapshot.clone())))
            };
            // Pick up commits made before the subscription existed
            session.set(state.snapshot());
            move || state.unsubscribe(listener)
        });
    }

    let context = SessionContext {
        runtime: props.runtime.clone(),
        session: (*session).clone(),
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Session context, `None` outside a [`SessionProvider`]
#[hook]
pub fn use_session() -> Option<SessionContext> {
    use_context::<SessionContext>()
}

#[hook]
pub fn use_is_authenticated() -> bool {
    use_session().is_some_and(|context| context.session().is_authenticated())
}
