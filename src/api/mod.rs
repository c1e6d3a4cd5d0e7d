// ==========================================
// Flight Movement Dashboard - API Layer
// ==========================================
// Business API for the dashboard host. The host owns rendering and
// the upload widget; this layer owns the ingestion contract.
// ==========================================

pub mod dto;
pub mod ingest_api;

pub use dto::SlotReportDto;
pub use ingest_api::{ApiError, IngestApi};
