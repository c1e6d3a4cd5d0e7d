// ==========================================
// Flight Movement Dashboard - Domain Layer
// ==========================================
// Entities and closed type sets. No data access, no pipeline logic.
// ==========================================

pub mod flight;
pub mod types;

pub use flight::{
    CellValue, IngestFailureKind, SanitizedRow, SlotReport, SlotState, UploadedFile,
    BANNER_ROWS, DATE_COLUMN_INDEX, FLIGHT_COLUMNS, FLIGHT_COLUMN_COUNT,
};
pub use types::{BranchCode, UnknownBranchCode};
