use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct SessionStatus {
    #[serde(rename = "loggedIn")]
    pub logged_in: bool,
}

#[derive(Debug, Deserialize)]
pub struct LoginPageQuery {
    #[serde(rename = "callbackUrl")]
    pub callback_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPage {
    pub login_endpoint: &'static str,
    pub callback_url: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}
