// ==========================================
// Flight Movement Dashboard - Repository Errors
// ==========================================
// Tool: thiserror derive macro
// ==========================================

use thiserror::Error;

/// Repository layer error type.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("database connection failed: {0}")]
    ConnectionError(String),

    #[error("database lock acquisition failed: {0}")]
    LockError(String),

    #[error("database transaction failed: {0}")]
    TransactionError(String),

    #[error("database statement failed: {0}")]
    QueryError(String),

    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("internal error: {0}")]
    InternalError(String),
}

impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(e, msg) => {
                let text = msg.unwrap_or_else(|| e.to_string());
                match e.code {
                    rusqlite::ErrorCode::CannotOpen | rusqlite::ErrorCode::NotADatabase => {
                        RepositoryError::ConnectionError(text)
                    }
                    rusqlite::ErrorCode::ConstraintViolation => {
                        RepositoryError::ConstraintViolation(text)
                    }
                    _ => RepositoryError::QueryError(text),
                }
            }
            _ => RepositoryError::QueryError(err.to_string()),
        }
    }
}

/// Result type alias.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
