use crate::pages::{Friends, Home, Login, NotFound, Profile, Register};
use arcade_frontend_common::auth::{SessionProvider, use_session};
use arcade_frontend_common::{RouteName, SessionRuntime, Transition};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/profile")]
    Profile,
    #[at("/friends")]
    Friends,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    const fn name(&self) -> Option<RouteName> {
        match self {
            Self::Home => Some(RouteName::Home),
            Self::Login => Some(RouteName::Login),
            Self::Register => Some(RouteName::Register),
            Self::Profile => Some(RouteName::Profile),
            Self::Friends => Some(RouteName::Friends),
            Self::NotFound => None,
        }
    }
}

#[derive(Properties)]
pub struct AppProps {
    pub runtime: SessionRuntime,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        self.runtime.same(&other.runtime)
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <SessionProvider runtime={props.runtime.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </SessionProvider>
    }
}

fn switch(route: Route) -> Html {
    let Some(name) = route.name() else {
        return html! { <NotFound /> };
    };
    let view = match name {
        RouteName::Home => html! { <Home /> },
        RouteName::Login => html! { <Login /> },
        RouteName::Register => html! { <Register /> },
        RouteName::Profile => html! { <Profile /> },
        RouteName::Friends => html! { <Friends /> },
    };
    html! { <Guarded route={name}>{view}</Guarded> }
}

#[derive(Properties, PartialEq)]
struct GuardedProps {
    route: RouteName,
    children: Children,
}

/// Renders its children only once the guard lets `route` through. A
/// redirect renders nothing and pushes the new target instead.
#[function_component(Guarded)]
fn guarded(props: &GuardedProps) -> Html {
    let session = use_session();
    let location = use_location();

    let href = location.map_or_else(
        || props.route.path().to_string(),
        |location| {
            let query = location.query_str();
            if query.is_empty() || query.starts_with('?') {
                format!("{}{query}", location.path())
            } else {
                format!("{}?{query}", location.path())
            }
        },
    );

    let mut allowed = false;
    let redirect = session
        .as_ref()
        .and_then(|context| match context.runtime().resolve(&href) {
            Ok(Transition::Committed(target)) if target.route != props.route => Some(target),
            Ok(Transition::Committed(_)) => {
                allowed = true;
                None
            }
            Ok(Transition::Cancelled | Transition::NotFound) => None,
            Err(error) => {
                tracing::error!(%error, "navigation aborted");
                None
            }
        });

    {
        let navigator = session.as_ref().map(|context| context.runtime().navigator());
        use_effect_with(redirect, move |redirect| {
            if let (Some(target), Some(navigator)) = (redirect.clone(), navigator) {
                navigator.navigate(target);
            }
        });
    }

    if allowed {
        html! { <>{props.children.clone()}</> }
    } else {
        html! {}
    }
}
