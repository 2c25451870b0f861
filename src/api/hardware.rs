//! Hardware endpoints

use serde::Deserialize;

use super::ApiClient;
use crate::models::{CreateHardware, Hardware, UpdateHardware};
use crate::AppResult;

#[derive(Deserialize)]
#[serde(untagged)]
enum HardwareList {
    Wrapped { hardware: Vec<Hardware> },
    Bare(Vec<Hardware>),
}

/// List all hardware
pub async fn list(client: &ApiClient) -> AppResult<Vec<Hardware>> {
    let list: HardwareList = client
        .get_json("/hardware", "Failed to fetch hardware")
        .await?;
    Ok(match list {
        HardwareList::Wrapped { hardware } => hardware,
        HardwareList::Bare(hardware) => hardware,
    })
}

/// Get one hardware record
pub async fn get(client: &ApiClient, id: i64) -> AppResult<Hardware> {
    client
        .get_json(&format!("/hardware/{}", id), "Failed to fetch hardware")
        .await
}

/// Create a hardware record
pub async fn create(client: &ApiClient, data: &CreateHardware) -> AppResult<Hardware> {
    client
        .post_json("/hardware", data, "Failed to add hardware")
        .await
}

/// Update a hardware record (partial)
pub async fn update(client: &ApiClient, id: i64, data: &UpdateHardware) -> AppResult<Hardware> {
    client
        .put_json(&format!("/hardware/{}", id), data, "Failed to update hardware")
        .await
}

/// Delete a hardware record
pub async fn delete(client: &ApiClient, id: i64) -> AppResult<()> {
    client
        .delete(&format!("/hardware/{}", id), "Failed to delete hardware")
        .await
}
