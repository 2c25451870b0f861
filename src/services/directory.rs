//! Employee directory collaborator
//!
//! Everything that needs an employee list (loan and assignment forms,
//! software assignment, inventory creation) goes through this one trait
//! instead of fetching ad hoc, so tests can substitute a canned roster.

use async_trait::async_trait;

use crate::api::{self, ApiClient};
use crate::models::Employee;
use crate::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// List all employees known to the backend.
    async fn list(&self) -> AppResult<Vec<Employee>>;
}

/// Production directory backed by `GET /employees`.
#[derive(Clone)]
pub struct ApiDirectory {
    client: ApiClient,
}

impl ApiDirectory {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EmployeeDirectory for ApiDirectory {
    async fn list(&self) -> AppResult<Vec<Employee>> {
        api::employees::list(&self.client).await
    }
}

/// Resolve an employee foreign key to a display name the way the loan
/// view does: "N/A" for unassigned, "Unknown Employee" for a dangling id.
pub fn display_name(employees: &[Employee], employee_id: Option<i64>) -> String {
    match employee_id {
        None => "N/A".to_string(),
        Some(id) => employees
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.name.clone())
            .unwrap_or_else(|| "Unknown Employee".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Employee> {
        vec![
            Employee {
                id: 1,
                name: "John Doe".into(),
                department: None,
                email: None,
                phone: None,
            },
            Employee {
                id: 2,
                name: "Jane Smith".into(),
                department: None,
                email: None,
                phone: None,
            },
        ]
    }

    #[test]
    fn resolves_names_and_dangling_ids() {
        let employees = roster();
        assert_eq!(display_name(&employees, Some(2)), "Jane Smith");
        assert_eq!(display_name(&employees, None), "N/A");
        assert_eq!(display_name(&employees, Some(99)), "Unknown Employee");
    }

    #[test]
    fn mocked_directory_serves_a_canned_roster() {
        let mut directory = MockEmployeeDirectory::new();
        directory
            .expect_list()
            .returning(|| Ok(roster()));

        let listed = tokio_test::block_on(directory.list()).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name, "John Doe");
    }
}
