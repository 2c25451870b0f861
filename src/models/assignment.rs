//! Inventory assignment model
//!
//! A distinct join record binding one device to one employee, with its own
//! status, date and notes. Independent of the hardware record's two status
//! fields; the backend denormalizes device/employee names into it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull, NoneAsEmptyString};

use super::enums::InventoryStatus;

/// Inventory assignment record
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryAssignment {
    pub inventory_id: i64,
    pub device_id: i64,
    pub employee_id: i64,
    #[serde(default)]
    pub device_name: String,
    #[serde(default)]
    pub employee_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_description: Option<String>,
    #[serde_as(as = "DefaultOnNull<NoneAsEmptyString>")]
    #[serde(default)]
    pub assigned_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: InventoryStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Create assignment request
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAssignment {
    pub device_id: i64,
    pub employee_id: i64,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub assigned_date: Option<NaiveDate>,
    pub status: InventoryStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Update assignment request — only status and notes are editable after
/// creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAssignment {
    pub status: InventoryStatus,
    #[serde(default)]
    pub notes: Option<String>,
}
