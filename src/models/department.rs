//! Department model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Department record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub department_id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Create department request. The backend expects `{ "name": ... }`.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateDepartment {
    #[validate(length(min = 1, message = "Department name cannot be empty."))]
    pub name: String,
}
