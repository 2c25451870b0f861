//! Console front-end: command execution and table rendering
//!
//! Each command is one page-load or one form submission; output is the
//! rendered page as a string, errors included, the way the browser pages
//! surfaced them.

pub mod pages;
pub mod table;

use std::path::PathBuf;

use crate::models::{
    AssignmentStatus, AssignmentUpdate, CreateHardware, DataForm, DataItem, Department, Employee,
    Hardware, HardwareType, InventoryAssignment, InventoryStatus, LoanStatus, Software,
    SoftwareForm,
};
use crate::services::directory::display_name;
use crate::services::export::EXPORT_FILE_NAME;
use crate::services::inventory::AssignmentDraft;
use crate::services::loans::LoanForm;
use crate::AppState;
use pages::{HardwareView, ListPage};

pub struct Console {
    state: AppState,
}

impl Console {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    // -- departments --------------------------------------------------

    pub async fn departments(&self) -> String {
        let mut page = ListPage::new("No departments found.");
        page.finish_load(self.state.services.departments.list().await);
        render_departments(&page)
    }

    pub async fn add_department(&self, name: &str) -> String {
        match self.state.services.departments.create(name).await {
            Ok(d) => format!("Department added: {} (id {})", d.name, d.department_id),
            Err(e) => format!("Error: {}", e),
        }
    }

    pub async fn department_employees(&self, department_id: i64) -> String {
        match self
            .state
            .services
            .departments
            .employees_of(department_id)
            .await
        {
            Ok(roster) => {
                let mut page = ListPage::new("No employees found for this department.");
                page.finish_load(Ok(roster.employees));
                let title = if roster.department_name.is_empty() {
                    "Department - Employees".to_string()
                } else {
                    format!("{} Department - Employees", roster.department_name)
                };
                format!("{}\n{}", title, render_roster(&page))
            }
            Err(e) => format!("Error: {}", e),
        }
    }

    // -- employees -----------------------------------------------------

    pub async fn employees(&self) -> String {
        let mut page = ListPage::new("No employees found.");
        page.finish_load(self.state.services.directory.list().await);
        render_page(&page, &["ID", "Name", "Department", "Email", "Phone"], |e: &Employee| {
            vec![
                e.id.to_string(),
                e.name.clone(),
                e.department.clone().unwrap_or_else(|| "-".into()),
                e.email.clone().unwrap_or_else(|| "-".into()),
                e.phone.clone().unwrap_or_else(|| "-".into()),
            ]
        })
    }

    // -- hardware ------------------------------------------------------

    pub async fn hardware(&self, type_filter: Option<HardwareType>) -> String {
        let view = HardwareView::for_type(type_filter);
        let mut page = ListPage::new(view.empty_message);
        page.finish_load(
            self.state
                .services
                .hardware
                .list()
                .await
                .map(|items| view.filter(items)),
        );
        format!("{}\n{}", view.title, render_hardware(&page))
    }

    pub async fn show_hardware(&self, id: i64) -> String {
        match self.state.services.hardware.get(id).await {
            Ok(h) => {
                let mut out = format!(
                    "Name: {}\nModel: {}\nSerial Number: {}\nDescription: {}\n",
                    h.name, h.model, h.serial_number, h.description
                );
                out.push_str(&format!(
                    "Type: {}\nAssignment Status: {}\nLoan Status: {}\n",
                    h.hardware_type
                        .map(|t| t.to_string())
                        .unwrap_or_else(|| "N/A".into()),
                    h.assignment_status(),
                    h.loan_status(),
                ));
                out
            }
            Err(e) => format!("Error: {}", e),
        }
    }

    pub async fn add_hardware(&self, data: CreateHardware) -> String {
        match self.state.services.hardware.create(&data).await {
            Ok(h) => format!("Hardware added: {} (id {})", h.name, h.id),
            Err(e) => format!("Error: {}", e),
        }
    }

    pub async fn delete_hardware(&self, id: i64) -> String {
        let view = HardwareView::ALL;
        let mut page = ListPage::new(view.empty_message);
        page.finish_load(self.state.services.hardware.list().await);
        let result = self.state.services.hardware.delete(id).await;
        page.finish_delete(result, |item: &Hardware| item.id == id);
        render_hardware(&page)
    }

    pub async fn assign_hardware(
        &self,
        id: i64,
        status: AssignmentStatus,
        employee_id: Option<i64>,
    ) -> String {
        let update = AssignmentUpdate {
            employee_id,
            assignment_status: status,
        };
        match self.state.services.hardware.update_assignment(id, &update).await {
            Ok(h) => format!("Assignment updated: {} is now {}", h.name, h.assignment_status()),
            Err(e) => format!("Error: {}", e),
        }
    }

    pub async fn pending_removals(&self) -> String {
        let mut page = ListPage::new("No items are pending removal.");
        page.finish_load(self.state.services.hardware.pending_removals().await);
        render_page(
            &page,
            &["ID", "Device", "Model", "Type", "Serial Number"],
            |item: &Hardware| {
                vec![
                    item.id.to_string(),
                    item.name.clone(),
                    item.model.clone(),
                    item.hardware_type
                        .map(|t| t.to_string())
                        .unwrap_or_else(|| "N/A".into()),
                    item.serial_number.clone(),
                ]
            },
        )
    }

    pub async fn stage_removal(&self, id: i64) -> String {
        match self.state.services.hardware.stage_removal(id).await {
            Ok(h) => format!("{} staged for removal", h.name),
            Err(e) => format!("Error: {}", e),
        }
    }

    pub async fn approve_removal(&self, id: i64) -> String {
        let mut page = ListPage::new("No items are pending removal.");
        page.finish_load(self.state.services.hardware.pending_removals().await);
        let result = self.state.services.hardware.approve_removal(id).await;
        let removed = page.finish_delete(result, |item: &Hardware| item.id == id);
        if removed {
            "Item permanently deleted.".to_string()
        } else {
            format!("Error: {}", page.error().unwrap_or("delete failed"))
        }
    }

    // -- loans ---------------------------------------------------------

    pub async fn loans(&self) -> String {
        let mut page = ListPage::new("No hardware found.");
        let (hardware, employees) = tokio::join!(
            self.state.services.loans.list(),
            self.state.services.directory.list(),
        );
        let employees = employees.unwrap_or_default();
        page.finish_load(hardware);
        render_loans(&page, &employees)
    }

    pub async fn update_loan(
        &self,
        id: i64,
        status: LoanStatus,
        employee_id: Option<i64>,
    ) -> String {
        let form = LoanForm {
            loan_status: status,
            selected_employee_id: employee_id,
        };
        match self.state.services.loans.update_loan(id, &form).await {
            Ok(h) => format!("Loan updated: {} is now {}", h.name, h.loan_status()),
            Err(e) => format!("Error: {}", e),
        }
    }

    // -- software ------------------------------------------------------

    pub async fn software(&self) -> String {
        let mut page = ListPage::new("No software found.");
        page.finish_load(self.state.services.software.list().await);
        render_software(&page)
    }

    pub async fn show_software(&self, id: i64) -> String {
        match self.state.services.software.get(id).await {
            Ok(s) => format!(
                "Name: {}\nBrand: {}\nVersion: {}\nLicense Key: {}\nStatus: {}\nPurchased: {}\nExpires: {}\nAssigned To: {}\n",
                s.name,
                s.brand,
                s.version,
                s.license_key,
                s.status,
                s.purchase_date.map(|d| d.to_string()).unwrap_or_else(|| "-".into()),
                s.expiration_date.map(|d| d.to_string()).unwrap_or_else(|| "-".into()),
                s.assigned_to_employee_id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "N/A".into()),
            ),
            Err(e) => format!("Error: {}", e),
        }
    }

    pub async fn add_software(&self, form: SoftwareForm) -> String {
        match self.state.services.software.create(&form).await {
            Ok(s) => format!("Software added: {} (id {})", s.name, s.id),
            Err(e) => format!("Error: {}", e),
        }
    }

    pub async fn update_software(&self, id: i64, form: SoftwareForm) -> String {
        match self.state.services.software.update(id, &form).await {
            Ok(s) => format!("Software updated: {}", s.name),
            Err(e) => format!("Error: {}", e),
        }
    }

    pub async fn delete_software(&self, id: i64) -> String {
        let mut page = ListPage::new("No software found.");
        page.finish_load(self.state.services.software.list().await);
        let result = self.state.services.software.delete(id).await;
        page.finish_delete(result, |item: &Software| item.id == id);
        render_software(&page)
    }

    // -- inventory -----------------------------------------------------

    pub async fn inventory(&self) -> String {
        let mut page = ListPage::new("No inventory assignments found.");
        page.finish_load(self.state.services.inventory.list().await);
        render_inventory(&page)
    }

    pub async fn add_assignment(&self, draft: AssignmentDraft) -> String {
        match self.state.services.inventory.create(&draft).await {
            Ok(a) => format!(
                "Inventory assignment added (inventory id {})",
                a.inventory_id
            ),
            Err(e) => format!("Error: {}", e),
        }
    }

    pub async fn update_assignment(
        &self,
        inventory_id: i64,
        status: InventoryStatus,
        notes: Option<String>,
    ) -> String {
        match self
            .state
            .services
            .inventory
            .update(inventory_id, status, notes)
            .await
        {
            Ok(a) => format!("Inventory assignment {} is now {}", a.inventory_id, a.status),
            Err(e) => format!("Error: {}", e),
        }
    }

    pub async fn delete_assignment(&self, inventory_id: i64) -> String {
        let mut page = ListPage::new("No inventory assignments found.");
        page.finish_load(self.state.services.inventory.list().await);
        let result = self.state.services.inventory.delete(inventory_id).await;
        let removed = page.finish_delete(result, |item: &InventoryAssignment| {
            item.inventory_id == inventory_id
        });
        let mut out = String::new();
        if removed {
            out.push_str("Inventory assignment deleted successfully!\n");
        }
        out.push_str(&render_inventory(&page));
        out
    }

    pub async fn export_inventory(&self, out: Option<PathBuf>) -> String {
        let path = out.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
        match self.state.services.export.inventory_csv().await {
            Ok(csv) => match tokio::fs::write(&path, &csv).await {
                Ok(()) => format!("Inventory exported to {}", path.display()),
                Err(e) => format!("Error: failed to write {}: {}", path.display(), e),
            },
            Err(e) => format!("Error: {}", e),
        }
    }

    // -- data ----------------------------------------------------------

    pub async fn data(&self) -> String {
        let mut page = ListPage::new("No data found.");
        page.finish_load(self.state.services.data.list().await);
        render_data(&page)
    }

    pub async fn add_data(&self, name: String, value: String) -> String {
        match self.state.services.data.create(&DataForm { name, value }).await {
            Ok(item) => format!("Data added: {} (id {})", item.name, item.id),
            Err(e) => format!("Error: {}", e),
        }
    }

    pub async fn update_data(&self, id: i64, name: String, value: String) -> String {
        match self
            .state
            .services
            .data
            .update(id, &DataForm { name, value })
            .await
        {
            Ok(item) => format!("Data updated: {}", item.name),
            Err(e) => format!("Error: {}", e),
        }
    }

    pub async fn delete_data(&self, id: i64) -> String {
        let mut page = ListPage::new("No data found.");
        page.finish_load(self.state.services.data.list().await);
        let result = self.state.services.data.delete(id).await;
        page.finish_delete(result, |item: &DataItem| item.id == id);
        render_data(&page)
    }

    // -- auth / export preview ----------------------------------------

    pub async fn login(&self, username: &str, password: &str) -> String {
        match self.state.services.auth.login(username, password).await {
            Ok(outcome) if outcome.success => match outcome.role {
                Some(role) => format!("Logged in as {} ({})", username, role),
                None => format!("Logged in as {}", username),
            },
            Ok(outcome) => format!(
                "Login failed: {}",
                outcome.error.unwrap_or_else(|| "Invalid credentials".into())
            ),
            Err(e) => format!("Error: {}", e),
        }
    }

    pub async fn export_preview(&self) -> String {
        match self.state.services.export.preview().await {
            Ok(value) => {
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
            }
            Err(e) => format!("Error: {}", e),
        }
    }
}

// -- rendering ---------------------------------------------------------

fn render_page<T>(
    page: &ListPage<T>,
    headers: &[&str],
    row: impl Fn(&T) -> Vec<String>,
) -> String {
    let mut out = String::new();
    if let Some(error) = page.error() {
        out.push_str("Error: ");
        out.push_str(error);
        out.push('\n');
    }
    match page.placeholder() {
        Some(placeholder) => {
            out.push_str(placeholder);
            out.push('\n');
        }
        None => {
            let rows: Vec<Vec<String>> = page.items().iter().map(row).collect();
            out.push_str(&table::render(headers, &rows));
        }
    }
    out
}

/// Departments table; each row links to its employee view.
pub fn render_departments(page: &ListPage<Department>) -> String {
    render_page(page, &["ID", "Name", "View Employees"], |d| {
        vec![
            d.department_id.to_string(),
            d.name.clone(),
            format!("/departments/{}", d.department_id),
        ]
    })
}

fn render_roster(page: &ListPage<crate::models::DepartmentEmployee>) -> String {
    render_page(page, &["Name", "Email", "Phone"], |e| {
        vec![
            e.full_name(),
            e.email.clone(),
            e.phone.clone().unwrap_or_else(|| "-".into()),
        ]
    })
}

fn render_hardware(page: &ListPage<Hardware>) -> String {
    render_page(
        page,
        &["ID", "Name", "Model", "Serial Number", "Description", "Status"],
        |h| {
            vec![
                h.id.to_string(),
                h.name.clone(),
                h.model.clone(),
                h.serial_number.clone(),
                h.description.clone(),
                h.assignment_status().to_string(),
            ]
        },
    )
}

/// Loaned-devices table; borrower ids resolve through the directory.
pub fn render_loans(page: &ListPage<Hardware>, employees: &[Employee]) -> String {
    render_page(
        page,
        &["ID", "Name", "Model", "Loan Status", "Loaned To", "Loan Date"],
        |h| {
            vec![
                h.id.to_string(),
                h.name.clone(),
                h.model.clone(),
                h.loan_status().to_string(),
                display_name(employees, h.loaned_to_employee_id),
                h.loan_date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".into()),
            ]
        },
    )
}

fn render_software(page: &ListPage<Software>) -> String {
    render_page(
        page,
        &["ID", "Name", "Brand", "Version", "Status", "Expires", "Assigned To"],
        |s| {
            vec![
                s.id.to_string(),
                s.name.clone(),
                s.brand.clone(),
                s.version.clone(),
                s.status.to_string(),
                s.expiration_date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".into()),
                s.assigned_to_employee_id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "N/A".into()),
            ]
        },
    )
}

fn render_inventory(page: &ListPage<InventoryAssignment>) -> String {
    render_page(
        page,
        &["Inventory ID", "Device Name", "Assigned To", "Status"],
        |a| {
            vec![
                a.inventory_id.to_string(),
                a.device_name.clone(),
                a.employee_name.clone(),
                a.status.to_string(),
            ]
        },
    )
}

fn render_data(page: &ListPage<DataItem>) -> String {
    render_page(page, &["ID", "Name", "Value"], |d| {
        vec![d.id.to_string(), d.name.clone(), d.value.clone()]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn departments_render_with_employee_links() {
        let mut page = ListPage::new("No departments found.");
        page.finish_load(Ok(vec![Department {
            department_id: 1,
            name: "IT".into(),
            description: None,
        }]));
        let out = render_departments(&page);
        assert!(out.contains("IT"));
        assert!(out.contains("/departments/1"));
    }

    #[test]
    fn empty_backend_shows_the_placeholder() {
        let mut page: ListPage<Department> = ListPage::new("No departments found.");
        page.finish_load(Ok(Vec::new()));
        assert_eq!(render_departments(&page), "No departments found.\n");
    }

    #[test]
    fn loans_render_resolved_borrower_names() {
        let employees = vec![Employee {
            id: 2,
            name: "Jane Smith".into(),
            department: None,
            email: None,
            phone: None,
        }];
        let mut page = ListPage::new("No hardware found.");
        let items: Vec<Hardware> = serde_json::from_str(
            r#"[{"id": 9, "name": "MacBook", "model": "Air",
                 "loan_status": "Loaned Out", "loaned_to_employee_id": 2}]"#,
        )
        .unwrap();
        page.finish_load(Ok(items));
        let out = render_loans(&page, &employees);
        assert!(out.contains("Loaned Out"));
        assert!(out.contains("Jane Smith"));
    }
}
