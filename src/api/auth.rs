//! Login endpoint

use super::ApiClient;
use crate::models::{LoginRequest, LoginResponse};
use crate::{error::AppError, AppResult};

/// Log in against the backend.
///
/// Unlike every other endpoint, the failure body is meaningful here: the
/// backend answers invalid credentials with a 401 carrying
/// `{"success": false, "error": ...}`, which callers want intact rather
/// than collapsed.
pub async fn login(client: &ApiClient, data: &LoginRequest) -> AppResult<LoginResponse> {
    tracing::debug!("POST /login");
    let response = client
        .http
        .post(client.url("/login"))
        .json(data)
        .send()
        .await?;

    let status = response.status();
    match response.json::<LoginResponse>().await {
        Ok(outcome) => Ok(outcome),
        Err(_) if !status.is_success() => Err(AppError::Api("Failed to log in".to_string())),
        Err(e) => Err(AppError::Http(e)),
    }
}
