//! Account registration page. Field edits go through the copy-on-write
//! form store; submission runs the orchestrator in a component-scoped
//! task so the redirect timer dies with the page.

use dioxus::prelude::*;

use crate::api::auth::HttpAuthApi;
use crate::components::common::{ErrorMessage, LoadingSpinner};
use crate::form::{
    run_submission, validate, Field, FieldValue, Phase, SignupForm, SubmitOutcome,
    DASHBOARD_REDIRECT_MS,
};
use crate::models::{Gender, Role, COUNTRIES};
use crate::routes::Route;

/// Restores `Submitting -> Idle` when the submission task exits for any
/// reason, including cancellation on unmount. `Succeeded` is terminal
/// and is never demoted.
struct SubmitGuard {
    phase: Signal<Phase>,
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        if let Ok(mut phase) = self.phase.try_write() {
            if *phase == Phase::Submitting {
                *phase = Phase::Idle;
            }
        }
    }
}

fn edit(mut form: Signal<SignupForm>, field: Field, value: FieldValue) {
    let next = form.peek().clone().with_field(field, value);
    form.set(next);
}

#[component]
pub fn SignupPage() -> Element {
    let mut form = use_signal(SignupForm::default);
    let mut phase = use_signal(Phase::default);
    let mut error = use_signal(|| None::<String>);
    let mut show_password = use_signal(|| false);
    let mut show_confirm = use_signal(|| false);
    let navigator = use_navigator();

    let mut submit = move |_| {
        error.set(None);
        let current = form.peek().clone();
        if let Err(e) = validate(&current) {
            error.set(Some(e.to_string()));
            return;
        }

        phase.set(Phase::Submitting);
        spawn(async move {
            let _guard = SubmitGuard { phase };
            let mut on_success = phase;
            let outcome =
                run_submission(&HttpAuthApi, &current, move || on_success.set(Phase::Succeeded))
                    .await;
            match outcome {
                SubmitOutcome::Succeeded => {
                    redirect_delay().await;
                    navigator.push(Route::Dashboard {});
                }
                SubmitOutcome::Failed(message) => error.set(Some(message)),
            }
        });
    };

    // The success view fully replaces the form; later edits cannot
    // affect rendering once the phase is terminal.
    if phase() == Phase::Succeeded {
        let f = form.peek().clone();
        let role_name = Role::from_id(&f.role)
            .map(|r| r.display_name())
            .unwrap_or("Member");
        return rsx! {
            SignupSuccess {
                username: f.username,
                email: f.email,
                role_name: role_name.to_string(),
            }
        };
    }

    let f = form();
    let submitting = phase() == Phase::Submitting;
    let today = chrono::Local::now().date_naive().to_string();

    rsx! {
        div { class: "min-h-screen flex items-center justify-center bg-gray-100 py-8",
            div { class: "bg-white rounded-lg shadow-lg p-8 w-full max-w-2xl",
                div { class: "text-center mb-6",
                    span { class: "text-5xl", "\u{1F9E0}" }
                    h1 { class: "text-2xl font-bold mt-4", "Create Account" }
                    p { class: "text-gray-500", "Join thousands of users monitoring their systems with AI" }
                }

                if let Some(err) = error.read().as_ref() {
                    ErrorMessage { message: err.clone() }
                }

                form {
                    onsubmit: move |e| {
                        e.prevent_default();
                        submit(e);
                    },

                    div { class: "grid grid-cols-2 gap-4",
                        div { class: "mb-4",
                            label { class: "block text-sm font-medium text-gray-700 mb-1",
                                "Username ",
                                span { class: "text-red-500", "*" }
                            }
                            input {
                                class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500",
                                r#type: "text",
                                placeholder: "johndoe",
                                value: "{f.username}",
                                oninput: move |e| edit(form, Field::Username, FieldValue::text(e.value())),
                                disabled: submitting,
                            }
                        }
                        div { class: "mb-4",
                            label { class: "block text-sm font-medium text-gray-700 mb-1",
                                "Email ",
                                span { class: "text-red-500", "*" }
                            }
                            input {
                                class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500",
                                r#type: "email",
                                placeholder: "john@example.com",
                                value: "{f.email}",
                                oninput: move |e| edit(form, Field::Email, FieldValue::text(e.value())),
                                disabled: submitting,
                            }
                        }
                    }

                    div { class: "grid grid-cols-2 gap-4",
                        div { class: "mb-4",
                            label { class: "block text-sm font-medium text-gray-700 mb-1",
                                "Password ",
                                span { class: "text-red-500", "*" }
                            }
                            div { class: "relative",
                                input {
                                    class: "w-full px-4 py-2 pr-12 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500",
                                    r#type: if show_password() { "text" } else { "password" },
                                    placeholder: "At least 8 characters",
                                    value: "{f.password}",
                                    oninput: move |e| edit(form, Field::Password, FieldValue::text(e.value())),
                                    disabled: submitting,
                                }
                                button {
                                    class: "absolute inset-y-0 right-0 pr-3 text-gray-400 hover:text-gray-600",
                                    r#type: "button",
                                    onclick: move |_| {
                                        let visible = *show_password.peek();
                                        show_password.set(!visible);
                                    },
                                    if show_password() { "Hide" } else { "Show" }
                                }
                            }
                        }
                        div { class: "mb-4",
                            label { class: "block text-sm font-medium text-gray-700 mb-1",
                                "Confirm Password ",
                                span { class: "text-red-500", "*" }
                            }
                            div { class: "relative",
                                input {
                                    class: "w-full px-4 py-2 pr-12 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500",
                                    r#type: if show_confirm() { "text" } else { "password" },
                                    placeholder: "Re-enter your password",
                                    value: "{f.confirm_password}",
                                    oninput: move |e| edit(form, Field::ConfirmPassword, FieldValue::text(e.value())),
                                    disabled: submitting,
                                }
                                button {
                                    class: "absolute inset-y-0 right-0 pr-3 text-gray-400 hover:text-gray-600",
                                    r#type: "button",
                                    onclick: move |_| {
                                        let visible = *show_confirm.peek();
                                        show_confirm.set(!visible);
                                    },
                                    if show_confirm() { "Hide" } else { "Show" }
                                }
                            }
                            if !f.confirm_password.is_empty() {
                                if f.password == f.confirm_password {
                                    p { class: "text-xs text-green-600 mt-1", "\u{2713} Passwords match" }
                                } else {
                                    p { class: "text-xs text-red-600 mt-1", "\u{2717} Passwords do not match" }
                                }
                            }
                        }
                    }

                    div { class: "grid grid-cols-4 gap-4",
                        div { class: "mb-4",
                            label { class: "block text-sm font-medium text-gray-700 mb-1",
                                "Date of Birth ",
                                span { class: "text-red-500", "*" }
                            }
                            input {
                                class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500",
                                r#type: "date",
                                max: "{today}",
                                value: "{f.date_of_birth}",
                                oninput: move |e| edit(form, Field::DateOfBirth, FieldValue::text(e.value())),
                                disabled: submitting,
                            }
                        }
                        div { class: "mb-4",
                            label { class: "block text-sm font-medium text-gray-700 mb-1",
                                "Gender ",
                                span { class: "text-red-500", "*" }
                            }
                            select {
                                class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500",
                                value: "{f.gender}",
                                onchange: move |e| edit(form, Field::Gender, FieldValue::text(e.value())),
                                disabled: submitting,
                                option { value: "", "Select gender" }
                                for gender in Gender::ALL {
                                    option { value: gender.id(), "{gender.display_name()}" }
                                }
                            }
                        }
                        div { class: "mb-4",
                            label { class: "block text-sm font-medium text-gray-700 mb-1",
                                "Country ",
                                span { class: "text-red-500", "*" }
                            }
                            select {
                                class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500",
                                value: "{f.country}",
                                onchange: move |e| edit(form, Field::Country, FieldValue::text(e.value())),
                                disabled: submitting,
                                option { value: "", "Select country" }
                                for country in COUNTRIES {
                                    option { value: country, "{country}" }
                                }
                            }
                        }
                        div { class: "mb-4",
                            label { class: "block text-sm font-medium text-gray-700 mb-1", "Mobile Number" }
                            input {
                                class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500",
                                r#type: "tel",
                                placeholder: "+1 234 567 8900",
                                value: "{f.mobile}",
                                oninput: move |e| edit(form, Field::Mobile, FieldValue::text(e.value())),
                                disabled: submitting,
                            }
                        }
                    }

                    div { class: "grid grid-cols-2 gap-4",
                        div { class: "mb-4",
                            label { class: "block text-sm font-medium text-gray-700 mb-1",
                                "Role ",
                                span { class: "text-red-500", "*" }
                            }
                            select {
                                class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500",
                                value: "{f.role}",
                                onchange: move |e| edit(form, Field::Role, FieldValue::text(e.value())),
                                disabled: submitting,
                                option { value: "", "Select role" }
                                for role in Role::ALL {
                                    option { value: role.id(), "{role.display_name()}" }
                                }
                            }
                            if let Some(role) = Role::from_id(&f.role) {
                                p { class: "text-xs text-blue-600 mt-1", "{role.display_name()} role selected" }
                            }
                        }
                        div { class: "mb-4 flex items-end",
                            label { class: "flex items-center text-sm text-gray-700",
                                input {
                                    class: "h-4 w-4 mr-2",
                                    r#type: "checkbox",
                                    checked: f.accept_terms,
                                    oninput: move |e| edit(form, Field::AcceptTerms, FieldValue::Flag(e.checked())),
                                    disabled: submitting,
                                }
                                span {
                                    "I agree to the Terms and Privacy Policy ",
                                    span { class: "text-red-500", "*" }
                                }
                            }
                        }
                    }

                    button {
                        class: "w-full py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 font-medium disabled:opacity-50 transition-colors flex items-center justify-center gap-2",
                        r#type: "submit",
                        disabled: submitting,
                        if submitting {
                            LoadingSpinner {}
                            "Creating Account..."
                        } else {
                            "Create Account"
                        }
                    }

                    button {
                        class: "w-full mt-4 py-3 bg-gray-800 text-white rounded-lg hover:bg-gray-900 font-medium transition-colors",
                        r#type: "button",
                        onclick: move |_| form.set(SignupForm::demo()),
                        "\u{2728} Try Demo with Admin Role"
                    }
                }

                div { class: "mt-6 text-center text-sm text-gray-600",
                    "Already have an account? "
                    Link {
                        class: "text-blue-600 hover:text-blue-700 font-medium",
                        to: Route::Login {},
                        "Sign in here"
                    }
                }
            }
        }
    }
}

#[component]
fn SignupSuccess(username: String, email: String, role_name: String) -> Element {
    rsx! {
        div { class: "min-h-screen flex items-center justify-center bg-gray-100",
            div { class: "bg-white rounded-lg shadow-lg p-8 w-full max-w-md text-center",
                span { class: "text-5xl", "\u{2705}" }
                h1 { class: "text-2xl font-bold mt-4 mb-2", "Account Created Successfully!" }
                p { class: "text-gray-500 mb-6", "Welcome, {username}!" }

                div { class: "text-left bg-gray-50 rounded-lg p-4 mb-6",
                    p { class: "text-sm text-gray-500", "Username" }
                    p { class: "font-medium mb-2", "{username}" }
                    p { class: "text-sm text-gray-500", "Email" }
                    p { class: "font-medium mb-2", "{email}" }
                    p { class: "text-sm text-gray-500", "Role" }
                    p { class: "font-medium", "{role_name}" }
                }

                p { class: "text-green-600 font-medium mb-4", "Redirecting to dashboard..." }
                Link {
                    class: "inline-block w-full py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 font-medium",
                    to: Route::Dashboard {},
                    "Go to Dashboard \u{2192}"
                }
            }
        }
    }
}

async fn redirect_delay() {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(DASHBOARD_REDIRECT_MS).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(DASHBOARD_REDIRECT_MS as u64)).await;
}
