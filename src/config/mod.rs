// ==========================================
// Flight Movement Dashboard - Config Layer
// ==========================================

pub mod config_manager;
pub mod ingest_config_trait;

pub use config_manager::{ConfigManager, DEFAULT_DESTINATION_TABLE};
pub use ingest_config_trait::IngestConfigReader;
