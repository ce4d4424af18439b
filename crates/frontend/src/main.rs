#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod pages;

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    use tracing_subscriber::fmt::format::Pretty;
    use tracing_subscriber::prelude::*;
    use tracing_web::{MakeWebConsoleWriter, performance_layer};

    console_error_panic_hook::set_once();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(perf_layer)
        .init();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use arcade_frontend_common::{BrowserNavigator, BrowserStorage, SessionConfig, SessionRuntime};
    use std::rc::Rc;

    init_logging();

    let config = SessionConfig::from_window();
    let runtime = match SessionRuntime::new(
        &config,
        Rc::new(BrowserStorage),
        Rc::new(BrowserNavigator),
    ) {
        Ok(runtime) => runtime,
        Err(error) => {
            tracing::error!(%error, "could not start the session runtime");
            return;
        }
    };

    // Rehydrate before the first guard evaluation; this never fails
    wasm_bindgen_futures::spawn_local(async move {
        runtime.store().initialize().await;
        yew::Renderer::<app::App>::with_props(app::AppProps { runtime }).render();
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("arcade-frontend runs in the browser; build it for wasm32-unknown-unknown");
}
