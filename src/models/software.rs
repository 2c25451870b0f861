//! Software license model and form type

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull, NoneAsEmptyString};
use validator::Validate;

use super::enums::SoftwareStatus;

/// Software license record
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Software {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub license_key: String,
    /// `YYYY-MM-DD`; the form submits the empty string when unset
    #[serde_as(as = "DefaultOnNull<NoneAsEmptyString>")]
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    /// Stored only — never compared against "now"; status stays whatever
    /// was last written even past this date.
    #[serde_as(as = "DefaultOnNull<NoneAsEmptyString>")]
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: SoftwareStatus,
    /// Holding employee, null when the license is unassigned
    #[serde(default)]
    pub assigned_to_employee_id: Option<i64>,
}

/// Create/update form data for a software license (the record minus `id`;
/// updates send the same full shape).
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SoftwareForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Brand is required"))]
    pub brand: String,
    #[validate(length(min = 1, message = "Version is required"))]
    pub version: String,
    #[serde(default)]
    pub license_key: String,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: SoftwareStatus,
    pub assigned_to_employee_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_serializes_unset_dates_as_empty_strings() {
        let form = SoftwareForm {
            name: "Photoshop".into(),
            brand: "Adobe".into(),
            version: "2024".into(),
            license_key: "AAAA-BBBB".into(),
            purchase_date: None,
            expiration_date: Some(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()),
            status: SoftwareStatus::Active,
            assigned_to_employee_id: None,
        };
        let body = serde_json::to_value(&form).unwrap();
        assert_eq!(body["purchase_date"], "");
        assert_eq!(body["expiration_date"], "2025-06-30");
        assert_eq!(body["status"], "Active");
        assert!(body["assigned_to_employee_id"].is_null());
    }

    #[test]
    fn record_tolerates_null_and_empty_dates() {
        let raw = r#"{
            "id": 3, "name": "Office", "brand": "Microsoft", "version": "365",
            "license_key": "", "purchase_date": null, "expiration_date": "",
            "status": "Pending Renewal", "assigned_to_employee_id": 12
        }"#;
        let sw: Software = serde_json::from_str(raw).unwrap();
        assert_eq!(sw.purchase_date, None);
        assert_eq!(sw.expiration_date, None);
        assert_eq!(sw.status, SoftwareStatus::PendingRenewal);
        assert_eq!(sw.assigned_to_employee_id, Some(12));
    }
}
