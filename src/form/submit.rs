//! Submission orchestration: one signup call, then a best-effort login,
//! then a delayed redirect. Runs only after `validate` has passed.

use async_trait::async_trait;

use crate::api::ApiError;
use crate::models::{SignupProfile, SignupRequest, SignupResponse};

use super::SignupForm;

/// Shown when the server declines the account without a message.
pub const SIGNUP_FAILED_FALLBACK: &str = "Failed to create account";
/// Shown when the signup call itself fails; raw transport detail never
/// reaches the user.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Delay between recording success and pushing the dashboard route.
pub const DASHBOARD_REDIRECT_MS: u32 = 3000;

/// UI phase of the signup page. Exactly one phase is active; an error
/// message only ever accompanies `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded,
    Failed(String),
}

/// Seam between the orchestrator and the HTTP auth client, so the
/// submission sequence can be driven by a recording fake in tests.
/// `?Send` because reqwest futures are not `Send` on wasm.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, ApiError>;
    async fn login(&self, email: &str, password: &str) -> Result<(), ApiError>;
}

impl SignupForm {
    pub fn to_request(&self) -> SignupRequest {
        SignupRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            username: self.username.clone(),
            role: self.role.clone(),
            profile: SignupProfile {
                date_of_birth: self.date_of_birth.clone(),
                gender: self.gender.clone(),
                mobile: self.mobile.clone(),
                country: self.country.clone(),
            },
        }
    }
}

/// Drives one submission attempt. `on_success` fires the moment the
/// server confirms the account, before the follow-up login: the page
/// uses it to flip its phase to `Succeeded` so the login call never
/// delays the success view. The login is strictly sequential after
/// signup and its failure is logged but not surfaced; the user lands on
/// the dashboard either way.
pub async fn run_submission<A: AuthApi + ?Sized>(
    api: &A,
    form: &SignupForm,
    on_success: impl FnOnce(),
) -> SubmitOutcome {
    let request = form.to_request();
    match api.signup(&request).await {
        Ok(response) if response.success => {
            on_success();
            if let Err(err) = api.login(&form.email, &form.password).await {
                tracing::warn!("post-signup login failed: {err}");
            }
            SubmitOutcome::Succeeded
        }
        Ok(response) => SubmitOutcome::Failed(
            response
                .message
                .unwrap_or_else(|| SIGNUP_FAILED_FALLBACK.to_string()),
        ),
        Err(err) => {
            tracing::error!("signup request failed: {err}");
            SubmitOutcome::Failed(UNEXPECTED_ERROR.to_string())
        }
    }
}
