use serde::{Deserialize, Serialize};

/// Request body for login. Fields are optional so that absence is reported
/// as missing credentials rather than a deserialization error.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
}
