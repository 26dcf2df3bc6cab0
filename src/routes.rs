use dioxus::prelude::*;

use crate::api;
use crate::components::{login::LoginPage, signup::SignupPage};

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Signup {},

    #[route("/login")]
    Login {},

    #[route("/app/dashboard")]
    Dashboard {},
}

// Route handler components
#[component]
fn Signup() -> Element {
    rsx! {
        SignupPage {}
    }
}

#[component]
fn Login() -> Element {
    rsx! {
        LoginPage {}
    }
}

/// Post-registration landing. The real dashboard lives in the main
/// application; this route is just where the redirect drops the user.
#[component]
fn Dashboard() -> Element {
    let navigator = use_navigator();

    let logout = move |_| {
        spawn(async move {
            api::auth::logout().await;
            navigator.push(Route::Login {});
        });
    };

    rsx! {
        div { class: "min-h-screen bg-gray-100",
            header { class: "bg-white border-b px-6 py-3 flex items-center justify-between",
                div { class: "flex items-center gap-3",
                    span { class: "text-2xl", "\u{1F9E0}" }
                    h1 { class: "text-xl font-bold text-gray-800", "LogSentinel" }
                }
                button {
                    class: "px-4 py-2 text-gray-600 hover:bg-gray-100 rounded-lg",
                    onclick: logout,
                    "Logout"
                }
            }
            div { class: "p-6",
                h2 { class: "text-2xl font-bold mb-2", "Dashboard" }
                p { class: "text-gray-500", "Your monitoring overview will appear here." }
            }
        }
    }
}
