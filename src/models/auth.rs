use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub username: String,
    pub role: String,
    pub profile: SignupProfile,
}

/// Profile sub-record sent alongside the credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupProfile {
    #[serde(rename = "dob")]
    pub date_of_birth: String,
    pub gender: String,
    pub mobile: String,
    pub country: String,
}

/// Application-level signup result: the server answered, and either
/// accepted the account or declined it with a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// User info returned to the client (no password)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
}
