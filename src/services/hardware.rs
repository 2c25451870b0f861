//! Hardware service
//!
//! CRUD pass-through plus the client-side rules living on the hardware
//! record: per-type filtering for the category views, pending-removal
//! staging, and the assignment/loan compatibility rule.

use crate::api::{self, ApiClient};
use crate::models::{
    AssignmentStatus, AssignmentUpdate, CreateHardware, Hardware, HardwareType, LoanStatus,
    UpdateHardware,
};
use crate::AppResult;

#[derive(Clone)]
pub struct HardwareService {
    client: ApiClient,
}

impl HardwareService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List all hardware
    pub async fn list(&self) -> AppResult<Vec<Hardware>> {
        api::hardware::list(&self.client).await
    }

    /// List hardware of one category. The per-type views are this filter
    /// over the unified collection, nothing more.
    pub async fn list_by_type(&self, hardware_type: HardwareType) -> AppResult<Vec<Hardware>> {
        let all = self.list().await?;
        Ok(all
            .into_iter()
            .filter(|item| item.hardware_type == Some(hardware_type))
            .collect())
    }

    pub async fn get(&self, id: i64) -> AppResult<Hardware> {
        api::hardware::get(&self.client, id).await
    }

    pub async fn create(&self, data: &CreateHardware) -> AppResult<Hardware> {
        super::check_valid(data)?;
        api::hardware::create(&self.client, data).await
    }

    pub async fn update(&self, id: i64, data: &UpdateHardware) -> AppResult<Hardware> {
        api::hardware::update(&self.client, id, data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        api::hardware::delete(&self.client, id).await
    }

    /// Apply an assignment form submission. Moving a record out of
    /// circulation (Decommissioned / Pending Removal) also clears the
    /// loan dimension in the same PUT, so a decommissioned device can
    /// never stay "Loaned Out".
    pub async fn update_assignment(
        &self,
        id: i64,
        data: &AssignmentUpdate,
    ) -> AppResult<Hardware> {
        let update = assignment_to_update(data);
        api::hardware::update(&self.client, id, &update).await
    }

    /// Hardware staged for deletion
    pub async fn pending_removals(&self) -> AppResult<Vec<Hardware>> {
        let all = self.list().await?;
        Ok(all
            .into_iter()
            .filter(|item| item.assignment_status() == AssignmentStatus::PendingRemoval)
            .collect())
    }

    /// Stage a record for removal. It disappears from the regular views
    /// and waits in the pending-removals list for approval.
    pub async fn stage_removal(&self, id: i64) -> AppResult<Hardware> {
        self.update_assignment(
            id,
            &AssignmentUpdate {
                employee_id: None,
                assignment_status: AssignmentStatus::PendingRemoval,
            },
        )
        .await
    }

    /// Approve a staged removal: the irreversible DELETE.
    pub async fn approve_removal(&self, id: i64) -> AppResult<()> {
        self.delete(id).await
    }
}

/// Build the partial update for an assignment form submission.
fn assignment_to_update(data: &AssignmentUpdate) -> UpdateHardware {
    let mut update = UpdateHardware {
        employee_id: Some(data.employee_id),
        assignment_status: Some(data.assignment_status),
        ..Default::default()
    };
    if !data.assignment_status.allows_active_loan() {
        update.loan_status = Some(LoanStatus::ReturnedToStock);
        update.loaned_to_employee_id = Some(None);
    }
    update
}
