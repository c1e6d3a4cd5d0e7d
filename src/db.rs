// ==========================================
// Flight Movement Dashboard - SQLite Plumbing
// ==========================================
// Goals:
// - one place for Connection::open so every connection carries the
//   same PRAGMA behavior
// - one busy_timeout to absorb writer contention from UI refreshes
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// Default busy_timeout (milliseconds).
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Apply the uniform PRAGMA set to a connection.
///
/// foreign_keys and busy_timeout are per-connection settings, so this
/// must run on every open, not once per process.
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Open a SQLite connection with the uniform configuration applied.
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// Default store location under the platform data directory.
///
/// The destination table inside it is created by operations tooling,
/// not by this pipeline.
pub fn get_default_db_path() -> String {
    let mut path = dirs::data_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    path.push("movement-dashboard");
    path.push("movement.db");
    path.to_string_lossy().to_string()
}
