// ==========================================
// Flight Movement Dashboard - Ingestion Layer
// ==========================================
// Upload bytes in, committed movement rows out. One independent
// outcome per required branch slot.
// ==========================================

pub mod error;
pub mod file_parser;
pub mod filename_validator;
pub mod ingest_trait;
pub mod orchestrator;
pub mod row_sanitizer;

pub use error::{ImportError, ImportResult};
pub use file_parser::{ExcelParser, ParsedTable};
pub use filename_validator::FilenameValidator;
pub use orchestrator::IngestOrchestrator;
pub use row_sanitizer::RowSanitizer;

pub use ingest_trait::{FileParser, InMemoryUploadSource, MovementIngestor, UploadSource};
