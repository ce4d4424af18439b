//! Route views

mod login;
mod register;

pub use login::Login;
pub use register::Register;

use crate::app::Route;
use arcade_frontend_common::auth::{use_is_authenticated, use_session};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    let authenticated = use_is_authenticated();

    html! {
        <div class="max-w-md mx-auto p-6 text-center">
            <h1 class="text-3xl font-bold mb-6">{"Arcade"}</h1>
            if authenticated {
                <Link<Route> to={Route::Profile} classes={classes!("text-blue-600")}>{"Your profile"}</Link<Route>>
            } else {
                <div class="flex gap-4 justify-center">
                    <Link<Route> to={Route::Login} classes={classes!("text-blue-600")}>{"Sign in"}</Link<Route>>
                    <Link<Route> to={Route::Register} classes={classes!("text-blue-600")}>{"Create an account"}</Link<Route>>
                </div>
            }
        </div>
    }
}

#[function_component(Profile)]
pub fn profile() -> Html {
    let session = use_session();
    let status = use_state(|| None::<String>);

    let on_refresh = {
        let store = session.as_ref().map(|context| context.store().clone());
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(store) = store.clone() else {
                return;
            };
            let status = status.clone();
            spawn_local(async move {
                if let Err(error) = store.refresh_profile().await {
                    status.set(Some(error.to_string()));
                }
            });
        })
    };

    let on_logout = {
        let store = session.as_ref().map(|context| context.store().clone());
        Callback::from(move |_: MouseEvent| {
            if let Some(store) = store.clone() {
                spawn_local(async move { store.logout().await });
            }
        })
    };

    let user = session
        .as_ref()
        .and_then(|context| context.session().user().cloned());
    let name = user
        .as_ref()
        .and_then(|user| user.display_name())
        .unwrap_or("there")
        .to_string();

    html! {
        <div class="max-w-md mx-auto p-6">
            <h2 class="text-xl font-semibold mb-4">{format!("Hello, {name}")}</h2>
            if let Some(user) = user {
                <pre class="text-sm bg-gray-100 dark:bg-gray-800 p-3 rounded mb-4">
                    {user.as_json().to_string()}
                </pre>
            }
            if let Some(message) = (*status).clone() {
                <p class="text-red-600 text-sm mb-4">{message}</p>
            }
            <div class="flex gap-2">
                <button class="px-4 py-2 bg-gray-200 rounded-md" onclick={on_refresh}>{"Refresh"}</button>
                <button class="px-4 py-2 bg-gray-200 rounded-md" onclick={on_logout}>{"Sign out"}</button>
                <Link<Route> to={Route::Friends} classes={classes!("px-4 py-2 text-blue-600")}>{"Friends"}</Link<Route>>
            </div>
        </div>
    }
}

#[function_component(Friends)]
pub fn friends() -> Html {
    html! {
        <div class="max-w-md mx-auto p-6">
            <h2 class="text-xl font-semibold mb-4">{"Friends"}</h2>
            <p class="text-gray-600">{"Nobody here yet."}</p>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="max-w-md mx-auto p-6 text-center">
            <h2 class="text-xl font-semibold mb-4">{"Page not found"}</h2>
            <Link<Route> to={Route::Home} classes={classes!("text-blue-600")}>{"Back to home"}</Link<Route>>
        </div>
    }
}
