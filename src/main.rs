//! Fitness Coach - Main Entry Point
//!
//! Uses dioxus::serve() pattern for dx serve compatibility.

use fitness_coach::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Fitness Coach...");

    // Read the API key once, before the first request
    let _ = fitness_coach::ai::coach();

    dioxus::serve(|| async move { Ok(dioxus::server::router(App)) });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Fitness Coach - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
