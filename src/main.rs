//! Storefront navbar - Main Entry Point
//!
//! Launches the Dioxus app; the renderer is picked by cargo features (`web` by default).

use storefront_navbar::app::App;

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] Storefront navbar - WASM initialized!".into());
    dioxus::launch(App);
}

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // Initialize tracing BEFORE launching the app
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting storefront navbar...");
    dioxus::launch(App);
}
