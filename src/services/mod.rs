//! Business logic services
//!
//! Each service owns the client-side rules for one resource and delegates
//! transport to the adapter in `crate::api`. None of them cache: every
//! call is a fresh round trip, and the backend remains authoritative.

pub mod auth;
pub mod data;
pub mod departments;
pub mod directory;
pub mod export;
pub mod hardware;
pub mod inventory;
pub mod loans;
pub mod software;

use std::sync::Arc;

use validator::Validate;

use crate::{api::ApiClient, error::AppError, AppResult};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub departments: departments::DepartmentsService,
    pub directory: Arc<dyn directory::EmployeeDirectory>,
    pub hardware: hardware::HardwareService,
    pub loans: loans::LoansService,
    pub software: software::SoftwareService,
    pub inventory: inventory::InventoryService,
    pub data: data::DataService,
    pub export: export::ExportService,
    pub auth: auth::AuthService,
}

impl Services {
    /// Create all services over one shared API client
    pub fn new(client: ApiClient) -> Self {
        Self {
            departments: departments::DepartmentsService::new(client.clone()),
            directory: Arc::new(directory::ApiDirectory::new(client.clone())),
            hardware: hardware::HardwareService::new(client.clone()),
            loans: loans::LoansService::new(client.clone()),
            software: software::SoftwareService::new(client.clone()),
            inventory: inventory::InventoryService::new(client.clone()),
            data: data::DataService::new(client.clone()),
            export: export::ExportService::new(client.clone()),
            auth: auth::AuthService::new(client),
        }
    }
}

/// Map `validator` failures to the inline validation error, keeping the
/// first field message.
pub(crate) fn check_valid<T: Validate>(data: &T) -> AppResult<()> {
    data.validate().map_err(|errors| {
        let message = errors
            .field_errors()
            .into_values()
            .flat_map(|field| field.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid input".to_string());
        AppError::Validation(message)
    })
}
