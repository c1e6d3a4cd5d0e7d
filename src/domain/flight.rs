// ==========================================
// Flight Movement Dashboard - Flight Entities
// ==========================================
// The movement sheet layout is a fixed contract: a 6-row banner, one
// leftover index column, then exactly 17 data columns in this order.
// Headers inside the banner are never trusted; binding is positional.
// ==========================================

use chrono::NaiveDate;
use rusqlite::types::{ToSqlOutput, Value};
use rusqlite::ToSql;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::BranchCode;

// ==========================================
// Column schema
// ==========================================

/// Ordered column names of the destination flight table.
pub const FLIGHT_COLUMNS: [&str; 17] = [
    "TANGGAL",
    "ACID",
    "A_REG",
    "A_TYPE",
    "ADEP",
    "ADES",
    "EOBT",
    "PUSHBACK",
    "TAXI",
    "DEP_ARR_LOCAL",
    "ATD",
    "ETA",
    "ATA",
    "RIU",
    "POB",
    "REMARK",
    "STATUS_FLIGHT",
];

/// Expected data column count after the index column is dropped.
pub const FLIGHT_COLUMN_COUNT: usize = FLIGHT_COLUMNS.len();

/// Rows of title/banner region at the top of every movement sheet.
pub const BANNER_ROWS: usize = 6;

/// Index of the calendar-date column (TANGGAL).
pub const DATE_COLUMN_INDEX: usize = 0;

// ==========================================
// Uploaded file
// ==========================================

/// Named binary blob handed over by the upload widget.
///
/// The pipeline only ever reads the display name and the bytes; the
/// blob is consumed exactly once and never mutated.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Display name as shown by the upload widget (untrusted text).
    pub name: String,
    /// Declared content type ("xls" / "xlsx"), informational only.
    pub content_type: Option<String>,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

// ==========================================
// Cell values
// ==========================================

/// Storage-safe cell value.
///
/// Every spreadsheet cell is coerced into exactly one of these after
/// sanitization. Missing-value sentinels (NaN floats, error cells,
/// empty cells, invalid datetimes) never survive as themselves; they
/// all collapse to `Null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Date(NaiveDate),
    Integer(i64),
    Real(f64),
    Text(String),
    Null,
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// Cell values always travel to the store as bound parameters.
impl ToSql for CellValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            // Dates are stored as ISO text, same convention the report
            // layer queries with.
            CellValue::Date(d) => Ok(ToSqlOutput::Owned(Value::Text(
                d.format("%Y-%m-%d").to_string(),
            ))),
            CellValue::Integer(i) => Ok(ToSqlOutput::Owned(Value::Integer(*i))),
            CellValue::Real(f) => Ok(ToSqlOutput::Owned(Value::Real(*f))),
            CellValue::Text(s) => Ok(ToSqlOutput::Borrowed(s.as_str().into())),
            CellValue::Null => Ok(ToSqlOutput::Owned(Value::Null)),
        }
    }
}

/// One sanitized row, aligned 1:1 with [`FLIGHT_COLUMNS`].
pub type SanitizedRow = Vec<CellValue>;

// ==========================================
// Per-slot ingestion outcome
// ==========================================

/// Error class behind a failed slot, preserved for the UI host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IngestFailureKind {
    NamingConvention,
    BranchMismatch,
    SchemaMismatch,
    Parse,
    Persistence,
    Connection,
    Internal,
}

/// Terminal state of one branch slot after an orchestration run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SlotState {
    /// No file attached to this slot yet.
    Empty,
    /// Pipeline completed; rows are committed in the store.
    Succeeded { rows_inserted: usize },
    /// Pipeline aborted at some stage; nothing was committed.
    Failed {
        kind: IngestFailureKind,
        message: String,
    },
}

/// One independent outcome per required branch code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotReport {
    pub branch: BranchCode,
    /// Display name of the consumed upload, when one was attached.
    pub file_name: Option<String>,
    /// Per-attempt id for log correlation; absent for empty slots.
    pub run_id: Option<Uuid>,
    pub state: SlotState,
}

impl SlotReport {
    pub fn empty(branch: BranchCode) -> Self {
        Self {
            branch,
            file_name: None,
            run_id: None,
            state: SlotState::Empty,
        }
    }
}
