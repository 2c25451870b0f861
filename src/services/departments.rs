//! Department service

use crate::api::{self, departments::DepartmentRoster, ApiClient};
use crate::error::AppError;
use crate::models::{CreateDepartment, Department};
use crate::AppResult;

#[derive(Clone)]
pub struct DepartmentsService {
    client: ApiClient,
}

impl DepartmentsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List all departments
    pub async fn list(&self) -> AppResult<Vec<Department>> {
        api::departments::list(&self.client).await
    }

    /// Create a department. A blank or whitespace-only name is rejected
    /// before any network request is issued.
    pub async fn create(&self, name: &str) -> AppResult<Department> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation(
                "Department name cannot be empty.".to_string(),
            ));
        }
        api::departments::create(
            &self.client,
            &CreateDepartment {
                name: name.to_string(),
            },
        )
        .await
    }

    /// List the employees of one department
    pub async fn employees_of(&self, department_id: i64) -> AppResult<DepartmentRoster> {
        api::departments::employees(&self.client, department_id).await
    }
}
