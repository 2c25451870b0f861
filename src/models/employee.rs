//! Employee models
//!
//! The directory endpoint returns the abbreviated shape (`id` + joined
//! `name`); the per-department roster returns the full record. Both are
//! read-only from this client.

use serde::{Deserialize, Serialize};

/// Employee as listed by the directory (`GET /employees`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Employee as listed in a department roster
/// (`GET /departments/:id/employees`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentEmployee {
    pub employee_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl DepartmentEmployee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
