// ==========================================
// Flight Movement Dashboard - Ingest API
// ==========================================
// The seam the dashboard host calls whenever upload state changes.
// Each call re-evaluates every slot from scratch; nothing is resumed
// from a prior run.
// ==========================================

use crate::api::dto::SlotReportDto;
use crate::config::ConfigManager;
use crate::importer::{IngestOrchestrator, MovementIngestor, UploadSource};
use thiserror::Error;
use tracing::instrument;

/// API layer error type.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("store unavailable: {0}")]
    Store(String),
}

pub struct IngestApi {
    db_path: String,
}

impl IngestApi {
    pub fn new(db_path: &str) -> Self {
        Self {
            db_path: db_path.to_string(),
        }
    }

    /// API over the store at the platform-default location.
    pub fn with_default_store() -> Self {
        Self::new(&crate::db::get_default_db_path())
    }

    /// Evaluate every required branch slot once and report per-slot
    /// outcomes for rendering.
    #[instrument(skip(self, source))]
    pub async fn process_uploads(
        &self,
        source: &mut dyn UploadSource,
    ) -> Result<Vec<SlotReportDto>, ApiError> {
        let config = ConfigManager::new(&self.db_path).map_err(|e| ApiError::Store(e.to_string()))?;
        let orchestrator = IngestOrchestrator::new(config, &self.db_path);

        let reports = orchestrator.ingest_all(source).await;
        Ok(reports.into_iter().map(SlotReportDto::from).collect())
    }
}
