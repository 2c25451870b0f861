//! Generic data item endpoints

use super::ApiClient;
use crate::models::{DataForm, DataItem};
use crate::AppResult;

/// List all data items
pub async fn list(client: &ApiClient) -> AppResult<Vec<DataItem>> {
    client.get_json("/data", "Failed to fetch data").await
}

/// Create a data item
pub async fn create(client: &ApiClient, data: &DataForm) -> AppResult<DataItem> {
    client.post_json("/data", data, "Failed to add data").await
}

/// Update a data item
pub async fn update(client: &ApiClient, id: i64, data: &DataForm) -> AppResult<DataItem> {
    client
        .put_json(&format!("/data/{}", id), data, "Failed to update data")
        .await
}

/// Delete a data item
pub async fn delete(client: &ApiClient, id: i64) -> AppResult<()> {
    client
        .delete(&format!("/data/{}", id), "Failed to delete data")
        .await
}
