// ==========================================
// Test helpers
// ==========================================
// Temp store initialization and stub upload/parser plumbing shared by
// the integration suites.
// ==========================================

#![allow(dead_code)]

use calamine::{Data, Range};
use movement_dashboard::importer::file_parser::{bind_rows, ParsedTable};
use movement_dashboard::importer::{FileParser, ImportError, ImportResult};
use movement_dashboard::{UploadedFile, BANNER_ROWS, FLIGHT_COLUMN_COUNT};
use rusqlite::Connection;
use std::collections::HashMap;
use std::error::Error;
use tempfile::NamedTempFile;

/// Create a temp store with the destination schema in place.
///
/// Returns the temp file (keep it alive) and its path.
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file.path().to_str().unwrap().to_string();

    let conn = Connection::open(&db_path)?;
    init_schema(&conn)?;

    Ok((temp_file, db_path))
}

/// Destination table + config_kv. The pipeline itself never creates
/// these; operations tooling does, so tests stand in for it.
fn init_schema(conn: &Connection) -> Result<(), Box<dyn Error>> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS flights (
            TANGGAL TEXT,
            ACID TEXT,
            A_REG TEXT,
            A_TYPE TEXT,
            ADEP TEXT,
            ADES TEXT,
            EOBT TEXT,
            PUSHBACK TEXT,
            TAXI TEXT,
            DEP_ARR_LOCAL TEXT,
            ATD TEXT,
            ETA TEXT,
            ATA TEXT,
            RIU TEXT,
            POB INTEGER,
            REMARK TEXT,
            STATUS_FLIGHT TEXT
        );

        CREATE TABLE IF NOT EXISTS config_kv (
            scope_id TEXT NOT NULL,
            key TEXT NOT NULL,
            value TEXT NOT NULL,
            PRIMARY KEY (scope_id, key)
        );
        "#,
    )?;
    Ok(())
}

/// Set a global-scope config value.
pub fn set_config(conn: &Connection, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
    conn.execute(
        "INSERT OR REPLACE INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)",
        rusqlite::params![key, value],
    )?;
    Ok(())
}

pub fn count_flights(db_path: &str) -> i64 {
    let conn = Connection::open(db_path).unwrap();
    conn.query_row("SELECT COUNT(*) FROM flights", [], |row| row.get(0))
        .unwrap()
}

/// Upload blob whose bytes never reach the stub parser.
pub fn make_upload(name: &str) -> UploadedFile {
    UploadedFile {
        name: name.to_string(),
        content_type: Some("xlsx".to_string()),
        bytes: Vec::new(),
    }
}

/// Build a movement-sheet-shaped range: `banner` filler rows, then
/// `data` rows prefixed with a numeric index column.
pub fn make_sheet(data: &[Vec<Data>]) -> Range<Data> {
    let width = data.first().map(|r| r.len() + 1).unwrap_or(FLIGHT_COLUMN_COUNT + 1);
    let height = BANNER_ROWS + data.len();
    let mut range = Range::new((0, 0), (height as u32 - 1, width as u32 - 1));

    for row in 0..BANNER_ROWS {
        range.set_value((row as u32, 0), Data::String("DATA MOVEMENT".into()));
    }
    for (i, row) in data.iter().enumerate() {
        let sheet_row = (BANNER_ROWS + i) as u32;
        range.set_value((sheet_row, 0), Data::Int(i as i64 + 1));
        for (j, cell) in row.iter().enumerate() {
            range.set_value((sheet_row, j as u32 + 1), cell.clone());
        }
    }
    range
}

/// One plausible movement row (17 cells) with some blanks.
pub fn movement_row(tanggal: &str, acid: &str) -> Vec<Data> {
    let mut row = vec![Data::Empty; FLIGHT_COLUMN_COUNT];
    row[0] = Data::String(tanggal.into()); // TANGGAL
    row[1] = Data::String(acid.into()); // ACID
    row[3] = Data::String("B738".into()); // A_TYPE
    row[4] = Data::String("WARR".into()); // ADEP
    row[5] = Data::String("WIII".into()); // ADES
    row[6] = Data::String("08:15:00".into()); // EOBT
    row[14] = Data::Int(72); // POB
    row[16] = Data::String("DEP".into()); // STATUS_FLIGHT
    row
}

/// Parser substitute: serves prepared sheets keyed by file name,
/// running them through the same positional binding as the real one.
pub struct StubParser {
    sheets: HashMap<String, Range<Data>>,
}

impl StubParser {
    pub fn new() -> Self {
        Self {
            sheets: HashMap::new(),
        }
    }

    pub fn with_sheet(mut self, file_name: &str, sheet: Range<Data>) -> Self {
        self.sheets.insert(file_name.to_string(), sheet);
        self
    }
}

impl FileParser for StubParser {
    fn parse(&self, file: &UploadedFile) -> ImportResult<ParsedTable> {
        let range = self
            .sheets
            .get(&file.name)
            .ok_or_else(|| ImportError::Parse(format!("no prepared sheet for '{}'", file.name)))?;
        bind_rows(range)
    }
}
