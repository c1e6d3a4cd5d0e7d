// ==========================================
// Flight Movement Dashboard - Config Manager
// ==========================================
// Storage: config_kv table (key-value, global scope), colocated with
// the movement store. Missing keys fall back to built-in defaults so
// a fresh store works without any seeding.
// ==========================================

use crate::config::ingest_config_trait::IngestConfigReader;
use crate::db::open_sqlite_connection;
use crate::domain::BranchCode;
use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::error::Error;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Default destination table for movement rows.
pub const DEFAULT_DESTINATION_TABLE: &str = "flights";

// config_kv keys
const KEY_DESTINATION_TABLE: &str = "ingest.destination_table";
const KEY_REQUIRED_BRANCHES: &str = "ingest.required_branches";

// ==========================================
// ConfigManager
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    pub fn new(db_path: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let conn = open_sqlite_connection(db_path)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Wrap an existing connection, re-applying the uniform PRAGMAs
    /// (idempotent) so behavior matches a fresh open.
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, Box<dyn Error + Send + Sync>> {
        {
            let guard = conn
                .lock()
                .map_err(|e| format!("lock acquisition failed: {}", e))?;
            crate::db::configure_sqlite_connection(&guard)?;
        }

        Ok(Self { conn })
    }

    /// Read a global-scope value; `None` when the key (or the whole
    /// config_kv table) is absent.
    fn get_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error + Send + Sync>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| format!("lock acquisition failed: {}", e))?;

        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            // A store without the config table runs on defaults.
            Err(rusqlite::Error::SqliteFailure(_, Some(msg))) if msg.contains("no such table") => {
                Ok(None)
            }
            Err(e) => Err(Box::new(e)),
        }
    }
}

#[async_trait]
impl IngestConfigReader for ConfigManager {
    async fn destination_table(&self) -> Result<String, Box<dyn Error + Send + Sync>> {
        Ok(self
            .get_config_value(KEY_DESTINATION_TABLE)?
            .unwrap_or_else(|| DEFAULT_DESTINATION_TABLE.to_string()))
    }

    async fn required_branches(&self) -> Result<Vec<BranchCode>, Box<dyn Error + Send + Sync>> {
        let raw = match self.get_config_value(KEY_REQUIRED_BRANCHES)? {
            Some(raw) => raw,
            None => return Ok(BranchCode::ALL.to_vec()),
        };

        // Stored as a JSON array of branch codes. Unknown codes are
        // skipped with a warning instead of failing every slot.
        let names: Vec<String> = serde_json::from_str(&raw)?;
        let mut branches = Vec::with_capacity(names.len());
        for name in names {
            match name.parse::<BranchCode>() {
                Ok(code) => branches.push(code),
                Err(e) => warn!(error = %e, "ignoring unknown configured branch"),
            }
        }
        Ok(branches)
    }
}
