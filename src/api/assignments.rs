//! Inventory assignment endpoints

use serde::Deserialize;

use super::ApiClient;
use crate::models::{CreateAssignment, InventoryAssignment, UpdateAssignment};
use crate::AppResult;

#[derive(Deserialize)]
struct AssignmentListEnvelope {
    #[serde(default)]
    inventory_assignments: Vec<InventoryAssignment>,
}

/// List all inventory assignments
pub async fn list(client: &ApiClient) -> AppResult<Vec<InventoryAssignment>> {
    let envelope: AssignmentListEnvelope = client
        .get_json(
            "/inventory_assignments",
            "Failed to fetch inventory assignments",
        )
        .await?;
    Ok(envelope.inventory_assignments)
}

/// Create an inventory assignment
pub async fn create(
    client: &ApiClient,
    data: &CreateAssignment,
) -> AppResult<InventoryAssignment> {
    client
        .post_json(
            "/inventory_assignments",
            data,
            "Failed to add inventory assignment",
        )
        .await
}

/// Update an inventory assignment's status and notes
pub async fn update(
    client: &ApiClient,
    inventory_id: i64,
    data: &UpdateAssignment,
) -> AppResult<InventoryAssignment> {
    client
        .put_json(
            &format!("/inventory_assignments/{}", inventory_id),
            data,
            "Failed to update inventory assignment",
        )
        .await
}

/// Delete an inventory assignment
pub async fn delete(client: &ApiClient, inventory_id: i64) -> AppResult<()> {
    client
        .delete(
            &format!("/inventory_assignments/{}", inventory_id),
            "Failed to delete inventory assignment",
        )
        .await
}
