//! Export preview endpoint

use serde_json::Value;

use super::ApiClient;
use crate::AppResult;

/// Fetch the backend's export preview. The payload is arbitrary JSON and
/// is rendered verbatim.
pub async fn preview(client: &ApiClient) -> AppResult<Value> {
    client
        .get_json("/export-preview", "Failed to fetch export preview")
        .await
}
