// ==========================================
// Flight Movement Dashboard - Ingestion Errors
// ==========================================
// Every kind here is recoverable at per-branch granularity: the
// orchestrator reports it and moves on to the next slot.
// ==========================================

use crate::domain::IngestFailureKind;
use crate::repository::RepositoryError;
use thiserror::Error;

/// Ingestion pipeline error type.
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== Filename validation =====
    #[error("file name '{filename}' does not match the upload naming template")]
    NamingConvention { filename: String },

    #[error("file '{filename}' is not for branch {expected}; upload the matching branch file")]
    BranchMismatch { filename: String, expected: String },

    // ===== Sheet layout =====
    #[error("unexpected column count in movement sheet: {actual} != {expected}")]
    SchemaMismatch { actual: usize, expected: usize },

    // ===== File reading =====
    #[error("failed to read movement sheet: {0}")]
    Parse(String),

    // ===== Store =====
    #[error("failed to persist movement rows: {0}")]
    Persistence(String),

    #[error("store connection failed: {0}")]
    Connection(String),

    // ===== Catch-all =====
    #[error("internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImportError {
    /// Error class carried into the slot report for the UI host.
    pub fn kind(&self) -> IngestFailureKind {
        match self {
            ImportError::NamingConvention { .. } => IngestFailureKind::NamingConvention,
            ImportError::BranchMismatch { .. } => IngestFailureKind::BranchMismatch,
            ImportError::SchemaMismatch { .. } => IngestFailureKind::SchemaMismatch,
            ImportError::Parse(_) => IngestFailureKind::Parse,
            ImportError::Persistence(_) => IngestFailureKind::Persistence,
            ImportError::Connection(_) => IngestFailureKind::Connection,
            ImportError::Internal(_) | ImportError::Other(_) => IngestFailureKind::Internal,
        }
    }
}

impl From<RepositoryError> for ImportError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::ConnectionError(msg) => ImportError::Connection(msg),
            other => ImportError::Persistence(other.to_string()),
        }
    }
}

impl From<rusqlite::Error> for ImportError {
    fn from(err: rusqlite::Error) -> Self {
        ImportError::from(RepositoryError::from(err))
    }
}

/// Result type alias.
pub type ImportResult<T> = Result<T, ImportError>;
