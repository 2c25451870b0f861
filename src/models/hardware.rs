//! Hardware model and related request types
//!
//! A hardware record carries two independent status dimensions:
//! `assignment_status` (ownership lifecycle) and `loan_status` (physical
//! possession), each with its own nullable employee foreign key. The
//! backend does not cross-check them; the one client-enforced rule is in
//! `LoansService`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull, NoneAsEmptyString};
use validator::Validate;

use super::enums::{AssignmentStatus, HardwareType, LoanStatus};

/// Hardware record
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hardware {
    pub id: i64,
    pub name: String,
    pub model: String,
    #[serde(rename = "serialNumber", default)]
    pub serial_number: String,
    #[serde(default)]
    pub description: String,
    /// Category code (`computer`, `audio_video`, `video`, `printer`,
    /// `device`); absent on legacy records.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub hardware_type: Option<HardwareType>,
    /// Owning employee, null/absent when unassigned
    #[serde(default)]
    pub employee_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment_status: Option<AssignmentStatus>,
    /// Borrowing employee, non-null only while loaned out
    #[serde(default)]
    pub loaned_to_employee_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_status: Option<LoanStatus>,
    /// The backend stores dates as `YYYY-MM-DD`, with the empty string
    /// standing in for "not set" on older rows.
    #[serde_as(as = "DefaultOnNull<NoneAsEmptyString>")]
    #[serde(default)]
    pub loan_date: Option<NaiveDate>,
}

impl Hardware {
    /// Effective ownership status; absent means the record was created
    /// before the field existed and counts as freshly stocked.
    pub fn assignment_status(&self) -> AssignmentStatus {
        self.assignment_status.unwrap_or_default()
    }

    /// Effective possession status
    pub fn loan_status(&self) -> LoanStatus {
        self.loan_status.unwrap_or_default()
    }
}

/// Create hardware request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateHardware {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Model is required"))]
    pub model: String,
    #[serde(rename = "serialNumber", default)]
    pub serial_number: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub hardware_type: Option<HardwareType>,
}

impl CreateHardware {
    /// Blank form pre-set with a view's type, so items added from a
    /// per-type page land back in that page's filter.
    pub fn for_type(hardware_type: HardwareType) -> Self {
        Self {
            name: String::new(),
            model: String::new(),
            serial_number: String::new(),
            description: String::new(),
            hardware_type: Some(hardware_type),
        }
    }
}

/// Update hardware request (partial)
///
/// Absent fields are left untouched by the backend. The employee foreign
/// keys use a double `Option` so that "leave as is" (outer `None`, not
/// serialized) and "set to null" (`Some(None)`, serialized as `null`) stay
/// distinguishable.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateHardware {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(rename = "serialNumber", skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub hardware_type: Option<HardwareType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_status: Option<AssignmentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loaned_to_employee_id: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_status: Option<LoanStatus>,
    #[serde_as(as = "Option<NoneAsEmptyString>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_date: Option<Option<NaiveDate>>,
}

/// Assignment form submission (the "Edit Assignment" modal)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentUpdate {
    /// Null means explicitly unassigned
    pub employee_id: Option<i64>,
    pub assignment_status: AssignmentStatus,
}

/// Loan form submission (the "Manage Loan" modal), before normalization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanUpdate {
    pub loaned_to_employee_id: Option<i64>,
    pub loan_status: LoanStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_parses_wire_shape() {
        let raw = r#"{
            "id": 7,
            "name": "ThinkPad",
            "model": "T14",
            "serialNumber": "SN-77",
            "description": "dev laptop",
            "type": "computer",
            "employee_id": null,
            "assignment_status": "In Stock",
            "loaned_to_employee_id": null,
            "loan_status": "Available",
            "loan_date": ""
        }"#;
        let hw: Hardware = serde_json::from_str(raw).unwrap();
        assert_eq!(hw.serial_number, "SN-77");
        assert_eq!(hw.hardware_type, Some(HardwareType::Computer));
        assert_eq!(hw.assignment_status(), AssignmentStatus::InStock);
        assert_eq!(hw.loan_date, None);
    }

    #[test]
    fn minimal_record_fills_defaults() {
        // Rows created by the minimal add form carry only name and model
        let hw: Hardware =
            serde_json::from_str(r#"{"id": 1, "name": "Mouse", "model": "M185"}"#).unwrap();
        assert_eq!(hw.serial_number, "");
        assert_eq!(hw.hardware_type, None);
        assert_eq!(hw.loan_status(), LoanStatus::Available);
    }

    #[test]
    fn update_distinguishes_absent_from_null() {
        let update = UpdateHardware {
            loan_status: Some(LoanStatus::Available),
            loaned_to_employee_id: Some(None),
            ..Default::default()
        };
        let body = serde_json::to_value(&update).unwrap();
        assert!(body["loaned_to_employee_id"].is_null());
        assert!(body.as_object().unwrap().contains_key("loaned_to_employee_id"));
        // Untouched fields stay off the wire entirely
        assert!(!body.as_object().unwrap().contains_key("employee_id"));
        assert!(!body.as_object().unwrap().contains_key("name"));
    }
}
