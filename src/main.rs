//! LogSentinel registration frontend
//!
//! A Dioxus application covering account signup, sign-in, and the
//! post-registration redirect into the dashboard. The authentication
//! backend is an external service reached over HTTP.

mod api;
mod components;
mod form;
mod models;
mod routes;

use dioxus::prelude::*;
use routes::Route;

fn main() {
    // On wasm, just run the app
    #[cfg(target_arch = "wasm32")]
    {
        run_app();
    }

    // On native, set up logging and env first
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("logsentinel_ui=info".parse().unwrap()))
            .init();

        // Load environment variables
        dotenvy::dotenv().ok();

        run_app();
    }
}

fn run_app() {
    // Get API URL - on wasm use window location, on native use env var
    #[cfg(target_arch = "wasm32")]
    let api_url = {
        // On web, use the same origin as the page (for same-origin API requests)
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| "http://localhost:3000".to_string())
    };

    #[cfg(not(target_arch = "wasm32"))]
    let api_url = std::env::var("API_URL")
        .unwrap_or_else(|_| "http://localhost:3000".to_string());

    tracing::info!("Starting LogSentinel UI against {}", api_url);

    // Initialize API client
    api::init_api_client(&api_url);

    // Launch the Dioxus app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global styles
        style { {include_str!("../assets/styles.css")} }

        Router::<Route> {}
    }
}
