//! Inventory export service
//!
//! CSV export is client-only: the backend is not involved beyond the
//! regular assignment listing. Fields containing commas, quotes or
//! newlines are quoted per RFC 4180; plain values are written bare.

use serde_json::Value;

use crate::api::{self, ApiClient};
use crate::models::InventoryAssignment;
use crate::AppResult;

/// Download name for the generated CSV
pub const EXPORT_FILE_NAME: &str = "inventory_export.csv";

#[derive(Clone)]
pub struct ExportService {
    client: ApiClient,
}

impl ExportService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch assignments and render them as CSV.
    pub async fn inventory_csv(&self) -> AppResult<String> {
        let items = api::assignments::list(&self.client).await?;
        to_csv(&items)
    }

    /// Backend export preview, passed through verbatim.
    pub async fn preview(&self) -> AppResult<Value> {
        api::export::preview(&self.client).await
    }
}

/// Render assignments as CSV: a fixed header plus one row per item, with
/// missing notes shown as `-`. No trailing newline.
pub fn to_csv(items: &[InventoryAssignment]) -> AppResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Device Name", "Assigned To", "Status", "Notes"])?;
    for item in items {
        let notes = match item.notes.as_deref() {
            None | Some("") => "-",
            Some(notes) => notes,
        };
        writer.write_record([
            item.device_name.as_str(),
            item.employee_name.as_str(),
            &item.status.to_string(),
            notes,
        ])?;
    }
    let data = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    let mut out = String::from_utf8_lossy(&data).into_owned();
    while out.ends_with('\n') || out.ends_with('\r') {
        out.pop();
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(device: &str, employee: &str, status: &str, notes: Option<&str>) -> InventoryAssignment {
        serde_json::from_str(&format!(
            r#"{{
                "inventory_id": 1, "device_id": 1, "employee_id": 1,
                "device_name": "{device}", "employee_name": "{employee}",
                "status": "{status}", "notes": {}
            }}"#,
            match notes {
                Some(n) => format!("\"{n}\""),
                None => "null".to_string(),
            }
        ))
        .unwrap()
    }

    #[test]
    fn export_matches_the_legacy_layout_exactly() {
        let items = vec![item("Laptop1", "Jane", "assigned", None)];
        assert_eq!(
            to_csv(&items).unwrap(),
            "Device Name,Assigned To,Status,Notes\nLaptop1,Jane,assigned,-"
        );
    }

    #[test]
    fn empty_inventory_exports_just_the_header() {
        assert_eq!(to_csv(&[]).unwrap(), "Device Name,Assigned To,Status,Notes");
    }

    #[test]
    fn embedded_commas_are_quoted() {
        let items = vec![item("Dock, USB-C", "Jane", "assigned", Some("desk 4, floor 2"))];
        assert_eq!(
            to_csv(&items).unwrap(),
            "Device Name,Assigned To,Status,Notes\n\"Dock, USB-C\",Jane,assigned,\"desk 4, floor 2\""
        );
    }
}
