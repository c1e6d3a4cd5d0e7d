// ==========================================
// Flight Movement Dashboard - Core Library
// ==========================================
// Ingests airport movement spreadsheets into the relational store the
// reporting pages query. The host UI owns rendering and the upload
// widget; this crate owns validation, parsing, sanitization, loading.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Repository layer - data access
pub mod repository;

// Ingestion layer - upload pipeline
pub mod importer;

// Config layer - system configuration
pub mod config;

// Database infrastructure (connection init / uniform PRAGMAs)
pub mod db;

// Logging
pub mod logging;

// API layer - host-facing interface
pub mod api;

// ==========================================
// Core type re-exports
// ==========================================

// Domain types
pub use domain::{
    BranchCode, CellValue, IngestFailureKind, SanitizedRow, SlotReport, SlotState, UploadedFile,
    BANNER_ROWS, FLIGHT_COLUMNS, FLIGHT_COLUMN_COUNT,
};

// Pipeline
pub use importer::{
    ExcelParser, FileParser, FilenameValidator, ImportError, IngestOrchestrator,
    InMemoryUploadSource, MovementIngestor, ParsedTable, RowSanitizer, UploadSource,
};

// Data access
pub use repository::{FlightImportRepository, FlightImportRepositoryImpl};

// API
pub use api::{IngestApi, SlotReportDto};

// ==========================================
// Constants
// ==========================================

// System version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// System name
pub const APP_NAME: &str = "Flight Movement Dashboard";
