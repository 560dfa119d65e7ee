//! Error types for the cf-app service layer.

use cf_core::CableId;
use std::path::PathBuf;

/// Application error type shared by every frontend.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Scenario error: {0}")]
    Project(#[from] cf_project::ProjectError),

    #[error("Failed to read scenario file: {path}")]
    ScenarioFileRead {
        path: PathBuf,
        source: cf_project::ProjectError,
    },

    #[error("Failed to write scenario file: {path}")]
    ScenarioFileWrite {
        path: PathBuf,
        source: cf_project::ProjectError,
    },

    #[error("Fill calculation failed: {0}")]
    Fill(#[from] cf_fill::FillError),

    #[error("Cable not found: {0}")]
    CableNotFound(CableId),

    #[error("Sandbox lock poisoned")]
    LockPoisoned,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// True when the caller supplied a bad value rather than the system failing.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            AppError::Fill(e) => e.is_invalid_argument(),
            AppError::InvalidInput(_) => true,
            _ => false,
        }
    }
}

/// Result type for cf-app operations.
pub type AppResult<T> = Result<T, AppError>;
