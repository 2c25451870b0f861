//! Software endpoints

use serde::Deserialize;

use super::ApiClient;
use crate::models::{Software, SoftwareForm};
use crate::AppResult;

#[derive(Deserialize)]
#[serde(untagged)]
enum SoftwareList {
    Wrapped { software: Vec<Software> },
    Bare(Vec<Software>),
}

/// List all software licenses
pub async fn list(client: &ApiClient) -> AppResult<Vec<Software>> {
    let list: SoftwareList = client
        .get_json("/software", "Failed to fetch software")
        .await?;
    Ok(match list {
        SoftwareList::Wrapped { software } => software,
        SoftwareList::Bare(software) => software,
    })
}

/// Get one software license
pub async fn get(client: &ApiClient, id: i64) -> AppResult<Software> {
    client
        .get_json(&format!("/software/{}", id), "Failed to fetch software")
        .await
}

/// Create a software license
pub async fn create(client: &ApiClient, data: &SoftwareForm) -> AppResult<Software> {
    client
        .post_json("/software", data, "Failed to add software")
        .await
}

/// Update a software license (full form shape)
pub async fn update(client: &ApiClient, id: i64, data: &SoftwareForm) -> AppResult<Software> {
    client
        .put_json(&format!("/software/{}", id), data, "Failed to update software")
        .await
}

/// Delete a software license
pub async fn delete(client: &ApiClient, id: i64) -> AppResult<()> {
    client
        .delete(&format!("/software/{}", id), "Failed to delete software")
        .await
}
