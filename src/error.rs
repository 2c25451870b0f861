//! Error types for the AssetDesk client

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Client-side validation failure. Surfaced inline, never reaches the
    /// network.
    #[error("{0}")]
    Validation(String),

    /// Non-2xx response from the backend, collapsed into a single generic
    /// failure. Carries the response's `error`/`message` field when one is
    /// present, otherwise a fixed "Failed to <verb> <entity>" string; the
    /// HTTP status code is not distinguished.
    #[error("{0}")]
    Api(String),

    /// Network or protocol failure before a response body was obtained.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
}

impl AppError {
    /// True for errors produced without issuing a network request.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
