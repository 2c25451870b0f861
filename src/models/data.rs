//! Generic data item model (the `/data` scratch resource)

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Data item record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataItem {
    pub id: i64,
    pub name: String,
    pub value: String,
}

/// Create/update body for a data item
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DataForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub value: String,
}
