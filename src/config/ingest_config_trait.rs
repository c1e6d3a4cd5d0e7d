// ==========================================
// Flight Movement Dashboard - Ingest Config Trait
// ==========================================
// Read-only configuration surface the pipeline depends on. No writes,
// no pipeline logic.
// ==========================================

use crate::domain::BranchCode;
use async_trait::async_trait;
use std::error::Error;

// ==========================================
// IngestConfigReader Trait
// ==========================================
// Implementor: ConfigManager (reads the config_kv table)
#[async_trait]
pub trait IngestConfigReader: Send + Sync {
    /// Destination table for movement rows.
    ///
    /// # Default
    /// - "flights"
    async fn destination_table(&self) -> Result<String, Box<dyn Error + Send + Sync>>;

    /// Branch codes that must each deliver one upload.
    ///
    /// # Default
    /// - the full fixed branch set
    async fn required_branches(&self) -> Result<Vec<BranchCode>, Box<dyn Error + Send + Sync>>;
}
