use async_trait::async_trait;

use crate::api::{api_client, ApiError};
use crate::form::AuthApi;
use crate::models::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};

pub async fn signup(request: &SignupRequest) -> Result<SignupResponse, ApiError> {
    api_client().post("/api/auth/signup", request).await
}

pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let response: LoginResponse = api_client().post("/api/auth/login", &request).await?;

    // Store the token for future requests
    api_client().set_token(Some(response.token.clone()));

    Ok(response)
}

pub async fn logout() {
    api_client().set_token(None);
}

/// `AuthApi` backed by the real HTTP client; the signup page hands this
/// to the orchestrator.
pub struct HttpAuthApi;

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, ApiError> {
        signup(request).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        login(email, password).await.map(|_| ())
    }
}
