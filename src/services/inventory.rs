//! Inventory assignment service
//!
//! Creation runs the form's pre-checks before the POST: all required
//! fields present, and the device not already covered by an existing
//! assignment. The duplicate check is a linear scan over the currently
//! fetched list — a local pre-check only, not authoritative.

use chrono::NaiveDate;

use crate::api::{self, ApiClient};
use crate::error::AppError;
use crate::models::{CreateAssignment, InventoryAssignment, InventoryStatus, UpdateAssignment};
use crate::AppResult;

/// Raw form input for a new assignment, before parsing/validation.
/// Everything arrives as text, the way a form submits it.
#[derive(Debug, Clone, Default)]
pub struct AssignmentDraft {
    pub device_id: String,
    pub employee_id: String,
    pub assigned_date: String,
    pub status: String,
    pub notes: String,
}

#[derive(Clone)]
pub struct InventoryService {
    client: ApiClient,
}

impl InventoryService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> AppResult<Vec<InventoryAssignment>> {
        api::assignments::list(&self.client).await
    }

    /// Validate a draft against the current assignments and create it.
    pub async fn create(&self, draft: &AssignmentDraft) -> AppResult<InventoryAssignment> {
        let existing = self.list().await?;
        let data = validate_draft(draft, &existing)?;
        api::assignments::create(&self.client, &data).await
    }

    pub async fn update(
        &self,
        inventory_id: i64,
        status: InventoryStatus,
        notes: Option<String>,
    ) -> AppResult<InventoryAssignment> {
        api::assignments::update(&self.client, inventory_id, &UpdateAssignment { status, notes })
            .await
    }

    pub async fn delete(&self, inventory_id: i64) -> AppResult<()> {
        api::assignments::delete(&self.client, inventory_id).await
    }
}

/// Run the form's pre-checks and parse the draft into a request body.
pub fn validate_draft(
    draft: &AssignmentDraft,
    existing: &[InventoryAssignment],
) -> AppResult<CreateAssignment> {
    let device_id = draft.device_id.trim();
    let employee_id = draft.employee_id.trim();
    let status = draft.status.trim();

    if device_id.is_empty() || employee_id.is_empty() || status.is_empty() {
        return Err(AppError::Validation(
            "Please fill in all required fields.".to_string(),
        ));
    }

    let device_id: i64 = device_id
        .parse()
        .map_err(|_| AppError::Validation("Device ID must be a number.".to_string()))?;
    let employee_id: i64 = employee_id
        .parse()
        .map_err(|_| AppError::Validation("Employee ID must be a number.".to_string()))?;
    let status: InventoryStatus = status.parse().map_err(AppError::Validation)?;

    if existing.iter().any(|item| item.device_id == device_id) {
        return Err(AppError::Validation("Device ID must be unique.".to_string()));
    }

    let assigned_date = match draft.assigned_date.trim() {
        "" => None,
        raw => Some(
            NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                AppError::Validation("Assigned date must be YYYY-MM-DD.".to_string())
            })?,
        ),
    };

    let notes = match draft.notes.trim() {
        "" => None,
        raw => Some(raw.to_string()),
    };

    Ok(CreateAssignment {
        device_id,
        employee_id,
        assigned_date,
        status,
        notes,
    })
}
