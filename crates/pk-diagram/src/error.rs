//! Diagram errors.

use pk_acid::AcidError;
use pk_core::PkError;
use pk_project::ProjectError;
use thiserror::Error;

/// Result type for diagram operations.
pub type DiagramResult<T> = Result<T, DiagramError>;

#[derive(Error, Debug)]
pub enum DiagramError {
    /// Unknown diagram kind, backend, or diagram id.
    #[error("Invalid argument: {what}")]
    InvalidArgument { what: String },

    #[error("Speciation error: {0}")]
    Acid(#[from] AcidError),

    #[error("Project error: {0}")]
    Project(#[from] ProjectError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<DiagramError> for PkError {
    fn from(err: DiagramError) -> Self {
        match err {
            DiagramError::InvalidArgument { what } => PkError::InvalidArg { what },
            DiagramError::Acid(acid) => acid.into(),
            other => PkError::Invariant {
                what: other.to_string(),
            },
        }
    }
}
