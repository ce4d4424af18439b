use crate::app::Route;
use arcade_frontend_common::auth::use_session;
use arcade_frontend_common::{NavigationTarget, RouteName};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Login)]
pub fn login() -> Html {
    let session = use_session();
    let location = use_location();

    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let pending = use_state(|| false);

    // Destination interrupted by the guard, if any
    let return_to = location.and_then(|location| {
        let query = location.query_str().trim_start_matches('?');
        NavigationTarget::parse(&format!("{}?{query}", RouteName::Login.path()))
            .and_then(|target| target.redirect)
    });

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let store = session.as_ref().map(|context| context.store().clone());
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let pending = pending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(store) = store.clone() else {
                return;
            };
            let username = (*username).clone();
            let password = (*password).clone();
            let return_to = return_to.clone();
            let error = error.clone();
            let pending = pending.clone();

            pending.set(true);
            error.set(None);
            spawn_local(async move {
                let result = store
                    .login_and_return(&username, &password, return_to.as_deref())
                    .await;
                pending.set(false);
                if let Err(e) = result {
                    error.set(Some(e.user_message()));
                }
            });
        })
    };

    html! {
        <div class="max-w-md mx-auto p-6">
            <h2 class="text-xl font-semibold mb-4">{"Sign in"}</h2>
            <form class="flex flex-col gap-3" {onsubmit}>
                <input
                    class="px-3 py-2 border rounded-md"
                    placeholder="Username"
                    value={(*username).clone()}
                    oninput={on_username}
                />
                <input
                    class="px-3 py-2 border rounded-md"
                    type="password"
                    placeholder="Password"
                    value={(*password).clone()}
                    oninput={on_password}
                />
                if let Some(message) = (*error).clone() {
                    <p class="text-red-600 text-sm">{message}</p>
                }
                <button class="px-4 py-2 bg-blue-600 text-white rounded-md" type="submit" disabled={*pending}>
                    {if *pending { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <p class="text-sm mt-4">
                {"No account? "}
                <Link<Route> to={Route::Register} classes={classes!("text-blue-600")}>{"Register"}</Link<Route>>
            </p>
        </div>
    }
}
