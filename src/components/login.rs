use dioxus::prelude::*;

use crate::api;
use crate::components::common::ErrorMessage;
use crate::routes::Route;

#[component]
pub fn LoginPage() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut is_loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let navigator = use_navigator();

    let mut login = move |_| {
        let email_val = email();
        let password_val = password();

        if email_val.is_empty() || password_val.is_empty() {
            error.set(Some("Please enter email and password".to_string()));
            return;
        }

        is_loading.set(true);
        error.set(None);

        spawn(async move {
            match api::auth::login(&email_val, &password_val).await {
                Ok(_) => {
                    navigator.push(Route::Dashboard {});
                }
                Err(e) => {
                    error.set(Some(format!("Login failed: {}", e)));
                }
            }
            is_loading.set(false);
        });
    };

    rsx! {
        div { class: "min-h-screen flex items-center justify-center bg-gray-100",
            div { class: "bg-white rounded-lg shadow-lg p-8 w-full max-w-md",
                // Logo
                div { class: "text-center mb-8",
                    span { class: "text-5xl", "\u{1F9E0}" }
                    h1 { class: "text-2xl font-bold mt-4", "LogSentinel" }
                    p { class: "text-gray-500", "Sign in to continue" }
                }

                if let Some(err) = error.read().as_ref() {
                    ErrorMessage { message: err.clone() }
                }

                form {
                    onsubmit: move |e| {
                        e.prevent_default();
                        login(e);
                    },

                    div { class: "mb-4",
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Email" }
                        input {
                            class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500",
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }

                    div { class: "mb-6",
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Password" }
                        input {
                            class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500",
                            r#type: "password",
                            placeholder: "Enter your password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }

                    button {
                        class: "w-full py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 font-medium disabled:opacity-50",
                        r#type: "submit",
                        disabled: *is_loading.read(),
                        if *is_loading.read() { "Signing in..." } else { "Sign In" }
                    }
                }

                div { class: "mt-6 text-center text-sm text-gray-600",
                    "Need an account? "
                    Link {
                        class: "text-blue-600 hover:text-blue-700 font-medium",
                        to: Route::Signup {},
                        "Create one"
                    }
                }
            }
        }
    }
}
