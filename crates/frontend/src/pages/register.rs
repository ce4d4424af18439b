use crate::app::Route;
use arcade_frontend_common::auth::use_session;
use arcade_http::types::RegisterRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

fn text_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

#[function_component(Register)]
pub fn register() -> Html {
    let session = use_session();

    let username = use_state(String::new);
    let password = use_state(String::new);
    let email = use_state(String::new);
    // Ok(server acknowledgement) or Err(error message)
    let outcome = use_state(|| None::<Result<String, String>>);

    let onsubmit = {
        let client = session
            .as_ref()
            .map(|context| context.store().client().clone());
        let username = username.clone();
        let password = password.clone();
        let email = email.clone();
        let outcome = outcome.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(client) = client.clone() else {
                return;
            };
            let request = RegisterRequest {
                username: (*username).clone(),
                password: (*password).clone(),
                email: Some((*email).clone()).filter(|email| !email.is_empty()),
            };
            let outcome = outcome.clone();
            spawn_local(async move {
                let result = match client.register(&request).await {
                    Ok(response) => Ok(response.message),
                    Err(error) => {
                        tracing::info!(%error, "registration rejected");
                        Err(error
                            .server_message()
                            .map_or_else(|| "Registration failed".to_string(), str::to_owned))
                    }
                };
                outcome.set(Some(result));
            });
        })
    };

    html! {
        <div class="max-w-md mx-auto p-6">
            <h2 class="text-xl font-semibold mb-4">{"Create an account"}</h2>
            <form class="flex flex-col gap-3" {onsubmit}>
                <input class="px-3 py-2 border rounded-md" placeholder="Username"
                    value={(*username).clone()} oninput={text_input(&username)} />
                <input class="px-3 py-2 border rounded-md" type="password" placeholder="Password"
                    value={(*password).clone()} oninput={text_input(&password)} />
                <input class="px-3 py-2 border rounded-md" type="email" placeholder="Email (optional)"
                    value={(*email).clone()} oninput={text_input(&email)} />
                <button class="px-4 py-2 bg-blue-600 text-white rounded-md" type="submit">{"Register"}</button>
            </form>
            {match (*outcome).clone() {
                Some(Ok(message)) => html! {
                    <p class="text-green-700 text-sm mt-4">
                        {message}{" "}
                        <Link<Route> to={Route::Login} classes={classes!("text-blue-600")}>{"Sign in"}</Link<Route>>
                    </p>
                },
                Some(Err(message)) => html! { <p class="text-red-600 text-sm mt-4">{message}</p> },
                None => html! {},
            }}
        </div>
    }
}
