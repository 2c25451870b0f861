//! AssetDesk IT Asset Management Console
//!
//! A typed client and console front-end for an IT asset management REST
//! backend: departments, employees, hardware, software licenses, loans
//! and inventory assignments. All state lives behind the backend; this
//! crate owns the entity schemas, the status lifecycle rules, the REST
//! adapter and the list-page controllers.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all console commands
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the state from a loaded configuration: one API client, one
    /// set of services.
    pub fn new(config: AppConfig) -> Self {
        let client = api::ApiClient::new(&config.api);
        Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(client)),
        }
    }
}
