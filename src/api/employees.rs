//! Employee directory endpoint (read-only)

use serde::Deserialize;

use super::ApiClient;
use crate::models::Employee;
use crate::AppResult;

#[derive(Deserialize)]
#[serde(untagged)]
enum EmployeeList {
    Wrapped { employees: Vec<Employee> },
    Bare(Vec<Employee>),
}

/// List all employees
pub async fn list(client: &ApiClient) -> AppResult<Vec<Employee>> {
    let list: EmployeeList = client
        .get_json("/employees", "Failed to fetch employees")
        .await?;
    Ok(match list {
        EmployeeList::Wrapped { employees } => employees,
        EmployeeList::Bare(employees) => employees,
    })
}
