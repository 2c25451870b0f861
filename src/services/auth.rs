//! Authentication service

use crate::api::{self, ApiClient};
use crate::models::{LoginRequest, LoginResponse};
use crate::AppResult;

#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Log in. Returns the backend's outcome either way; callers branch on
    /// `success` and show `error` on failure.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginResponse> {
        api::auth::login(
            &self.client,
            &LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }
}
