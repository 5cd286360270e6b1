use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ToxError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("substance {0} not found")]
    NotFound(i64),

    #[error("metabolite '{metabolite}' not found for substance '{substance}'")]
    MetaboliteNotFound {
        substance: String,
        metabolite: String,
    },

    #[error("misconfigured thresholds for '{name}': {reason}")]
    MisconfiguredThresholds { name: String, reason: String },

    #[error("failed to load catalog from {path}: {reason}")]
    CatalogLoad { path: PathBuf, reason: String },

    #[error("invalid catalog: {0}")]
    CatalogInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ToxError {
    /// Stable machine-readable kind, used in error payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            ToxError::InvalidInput(_) => "invalid_input",
            ToxError::NotFound(_) | ToxError::MetaboliteNotFound { .. } => "not_found",
            ToxError::MisconfiguredThresholds { .. } => "misconfigured_thresholds",
            ToxError::CatalogLoad { .. } | ToxError::CatalogInvalid(_) => "catalog_error",
            ToxError::Io(_) => "io_error",
            ToxError::Json(_) => "json_error",
        }
    }
}

/// Error shape returned to callers in place of a successful result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub kind: String,
    pub message: String,
}

impl From<&ToxError> for ErrorPayload {
    fn from(err: &ToxError) -> Self {
        ErrorPayload {
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}
