//! Department endpoints

use serde::Deserialize;

use super::ApiClient;
use crate::models::{CreateDepartment, Department, DepartmentEmployee};
use crate::AppResult;

/// The backend wraps the collection as `{"departments": [...]}`; older
/// deployments return the bare array. Accept both.
#[derive(Deserialize)]
#[serde(untagged)]
enum DepartmentList {
    Wrapped { departments: Vec<Department> },
    Bare(Vec<Department>),
}

#[derive(Deserialize)]
struct DepartmentEnvelope {
    department: Department,
}

/// Employees of one department, with the department's display name.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentRoster {
    #[serde(default)]
    pub employees: Vec<DepartmentEmployee>,
    #[serde(default)]
    pub department_name: String,
}

/// List all departments
pub async fn list(client: &ApiClient) -> AppResult<Vec<Department>> {
    let list: DepartmentList = client
        .get_json("/departments", "Failed to fetch departments")
        .await?;
    Ok(match list {
        DepartmentList::Wrapped { departments } => departments,
        DepartmentList::Bare(departments) => departments,
    })
}

/// Create a department
pub async fn create(client: &ApiClient, data: &CreateDepartment) -> AppResult<Department> {
    let envelope: DepartmentEnvelope = client
        .post_json("/departments", data, "Failed to add department")
        .await?;
    Ok(envelope.department)
}

/// List employees of a department
pub async fn employees(client: &ApiClient, department_id: i64) -> AppResult<DepartmentRoster> {
    client
        .get_json(
            &format!("/departments/{}/employees", department_id),
            "Failed to fetch employees by department.",
        )
        .await
}
