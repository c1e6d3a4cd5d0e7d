// ==========================================
// Flight Movement Dashboard - Flight Repository
// ==========================================
// One statement shape only: a multi-row parameterized INSERT into the
// destination table. Identifiers come from internal constants/config,
// never from user input; cell values are always bound parameters.
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::{SanitizedRow, FLIGHT_COLUMNS, FLIGHT_COLUMN_COUNT};
use crate::repository::error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use tracing::debug;

// ==========================================
// FlightImportRepository Trait
// ==========================================
#[async_trait]
pub trait FlightImportRepository: Send + Sync {
    /// Insert sanitized movement rows as one atomic batch.
    ///
    /// Commits all rows or none: any failure rolls the transaction
    /// back and no partial batch is left behind.
    async fn batch_insert_flights(
        &self,
        table_name: &str,
        rows: &[SanitizedRow],
    ) -> RepositoryResult<usize>;
}

// ==========================================
// FlightImportRepositoryImpl
// ==========================================
pub struct FlightImportRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl FlightImportRepositoryImpl {
    /// Open a fresh store connection scoped to one branch attempt.
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::ConnectionError(e.to_string()))?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Wrap an existing connection (tests, shared in-memory stores).
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Reject anything that is not a plain SQL identifier.
    ///
    /// Table names are orchestrator-supplied constants; this guard
    /// keeps a misconfigured value from ever reaching SQL text.
    fn validate_table_name(table_name: &str) -> RepositoryResult<()> {
        let mut chars = table_name.chars();
        let valid_head = chars
            .next()
            .map(|c| c.is_ascii_alphabetic() || c == '_')
            .unwrap_or(false);
        if valid_head && table_name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            Ok(())
        } else {
            Err(RepositoryError::InvalidIdentifier(table_name.to_string()))
        }
    }

    /// Build the multi-row INSERT statement for `row_count` rows.
    fn insert_statement(table_name: &str, row_count: usize) -> String {
        let row_placeholders = format!(
            "({})",
            vec!["?"; FLIGHT_COLUMN_COUNT].join(", ")
        );
        format!(
            "INSERT INTO {} ({}) VALUES {}",
            table_name,
            FLIGHT_COLUMNS.join(", "),
            vec![row_placeholders; row_count].join(", ")
        )
    }
}

#[async_trait]
impl FlightImportRepository for FlightImportRepositoryImpl {
    async fn batch_insert_flights(
        &self,
        table_name: &str,
        rows: &[SanitizedRow],
    ) -> RepositoryResult<usize> {
        Self::validate_table_name(table_name)?;

        if rows.is_empty() {
            return Ok(0);
        }

        // Positional binding breaks silently on width drift, so the
        // parser-time invariant is re-checked here.
        if let Some(bad) = rows.iter().find(|r| r.len() != FLIGHT_COLUMN_COUNT) {
            return Err(RepositoryError::InternalError(format!(
                "sanitized row width {} does not match schema width {}",
                bad.len(),
                FLIGHT_COLUMN_COUNT
            )));
        }

        let mut conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;

        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::TransactionError(e.to_string()))?;

        let inserted = {
            let sql = Self::insert_statement(table_name, rows.len());
            debug!(rows = rows.len(), table = table_name, "executing batch insert");

            let mut stmt = tx.prepare(&sql)?;
            stmt.execute(rusqlite::params_from_iter(
                rows.iter().flat_map(|row| row.iter()),
            ))?
        };

        tx.commit()
            .map_err(|e| RepositoryError::TransactionError(e.to_string()))?;

        Ok(inserted)
    }
}
