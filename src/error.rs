use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrackerError>;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Invalid project ID format: {0}")]
    InvalidProjectId(String),

    #[error("Invalid project status: {0}")]
    InvalidStatus(String),

    #[error("Invalid input in field '{field}'")]
    InvalidInput { field: String },

    #[error("Invalid drag transition from {from} to {to}")]
    InvalidDragTransition { from: String, to: String },

    #[error("Drag event carries no project payload")]
    MissingDragPayload,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
