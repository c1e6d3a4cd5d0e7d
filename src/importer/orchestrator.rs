// ==========================================
// Flight Movement Dashboard - Ingestion Orchestrator
// ==========================================
// Per branch slot: Empty -> Validating -> Parsing -> Sanitizing ->
// Loading -> {Succeeded, Failed(reason)}. Failures are isolated per
// branch; there is no automatic retry and no cross-branch rollback.
// ==========================================

use crate::config::IngestConfigReader;
use crate::domain::{BranchCode, SlotReport, SlotState, UploadedFile};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::ExcelParser;
use crate::importer::filename_validator::FilenameValidator;
use crate::importer::ingest_trait::{FileParser, MovementIngestor, UploadSource};
use crate::importer::row_sanitizer::RowSanitizer;
use crate::repository::{FlightImportRepository, FlightImportRepositoryImpl};
use async_trait::async_trait;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// IngestOrchestrator
// ==========================================
pub struct IngestOrchestrator<C>
where
    C: IngestConfigReader,
{
    // Configuration reader
    config: C,

    // Store location; each branch attempt opens its own connection
    db_path: String,

    // Pipeline components
    validator: FilenameValidator,
    parser: Box<dyn FileParser>,
    sanitizer: RowSanitizer,
}

impl<C> IngestOrchestrator<C>
where
    C: IngestConfigReader,
{
    /// Orchestrator with the default calamine-backed parser.
    pub fn new(config: C, db_path: &str) -> Self {
        Self::with_parser(config, db_path, Box::new(ExcelParser))
    }

    /// Orchestrator with an injected parser (tests, alternate codecs).
    pub fn with_parser(config: C, db_path: &str, parser: Box<dyn FileParser>) -> Self {
        Self {
            config,
            db_path: db_path.to_string(),
            validator: FilenameValidator::new(),
            parser,
            sanitizer: RowSanitizer::new(),
        }
    }

    /// Validate -> parse -> sanitize -> load for one upload.
    ///
    /// The repository (and with it the store connection) lives only
    /// for the load step of this one attempt; it is released on every
    /// exit path when it drops at the end of this scope.
    async fn run_pipeline(&self, branch: BranchCode, file: &UploadedFile) -> ImportResult<usize> {
        debug!("validating file name");
        self.validator.validate(&file.name, branch)?;

        debug!("parsing movement sheet");
        let table = self.parser.parse(file)?;
        info!(rows = table.len(), "sheet parsed");

        debug!("sanitizing rows");
        let rows = self.sanitizer.sanitize(table);

        debug!("loading rows");
        let destination = self
            .config
            .destination_table()
            .await
            .map_err(|e| ImportError::Internal(format!("config read failed: {}", e)))?;

        let repo = FlightImportRepositoryImpl::new(&self.db_path)?;
        let inserted = repo.batch_insert_flights(&destination, &rows).await?;

        Ok(inserted)
    }
}

#[async_trait]
impl<C> MovementIngestor for IngestOrchestrator<C>
where
    C: IngestConfigReader + Send + Sync,
{
    async fn ingest_all(&self, source: &mut dyn UploadSource) -> Vec<SlotReport> {
        let branches = match self.config.required_branches().await {
            Ok(branches) => branches,
            Err(e) => {
                warn!(error = %e, "cannot read required branch list, using full set");
                BranchCode::ALL.to_vec()
            }
        };

        info!(slots = branches.len(), "evaluating upload slots");

        let mut reports = Vec::with_capacity(branches.len());
        for branch in branches {
            match source.take(branch) {
                Some(file) => reports.push(self.ingest_branch(branch, file).await),
                None => {
                    info!(branch = %branch, "not yet uploaded");
                    reports.push(SlotReport::empty(branch));
                }
            }
        }

        info!(
            succeeded = reports
                .iter()
                .filter(|r| matches!(r.state, SlotState::Succeeded { .. }))
                .count(),
            failed = reports
                .iter()
                .filter(|r| matches!(r.state, SlotState::Failed { .. }))
                .count(),
            "upload slot evaluation finished"
        );

        reports
    }

    #[instrument(skip(self, file), fields(branch = %branch, file = %file.name, run_id))]
    async fn ingest_branch(&self, branch: BranchCode, file: UploadedFile) -> SlotReport {
        let run_id = Uuid::new_v4();
        tracing::Span::current().record("run_id", tracing::field::display(run_id));
        let started = Instant::now();

        let state = match self.run_pipeline(branch, &file).await {
            Ok(rows_inserted) => {
                info!(
                    rows = rows_inserted,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "branch upload ingested"
                );
                SlotState::Succeeded { rows_inserted }
            }
            Err(e) => {
                error!(error = %e, "branch upload failed");
                SlotState::Failed {
                    kind: e.kind(),
                    // The UI shows this verbatim; it must name the
                    // branch and the offending file.
                    message: format!("branch {}, file '{}': {}", branch, file.name, e),
                }
            }
        };

        SlotReport {
            branch,
            file_name: Some(file.name),
            run_id: Some(run_id),
            state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IngestFailureKind;
    use crate::importer::ingest_trait::InMemoryUploadSource;
    use std::error::Error;

    struct StaticConfig;

    #[async_trait]
    impl IngestConfigReader for StaticConfig {
        async fn destination_table(&self) -> Result<String, Box<dyn Error + Send + Sync>> {
            Ok("flights".to_string())
        }

        async fn required_branches(&self) -> Result<Vec<BranchCode>, Box<dyn Error + Send + Sync>> {
            Ok(vec![BranchCode::WARE, BranchCode::WARR])
        }
    }

    #[tokio::test]
    async fn test_empty_slots_report_empty_and_stay_empty() {
        let orchestrator = IngestOrchestrator::new(StaticConfig, ":memory:");
        let mut source = InMemoryUploadSource::new();

        let reports = orchestrator.ingest_all(&mut source).await;
        assert_eq!(reports.len(), 2);
        for report in &reports {
            assert_eq!(report.state, SlotState::Empty);
            assert!(report.file_name.is_none());
        }
    }

    #[tokio::test]
    async fn test_misnamed_upload_fails_before_any_io() {
        let orchestrator = IngestOrchestrator::new(StaticConfig, ":memory:");
        let mut source = InMemoryUploadSource::new();
        source.attach(
            BranchCode::WARE,
            UploadedFile {
                name: "movements.xlsx".to_string(),
                content_type: Some("xlsx".to_string()),
                bytes: Vec::new(),
            },
        );

        let reports = orchestrator.ingest_all(&mut source).await;
        match &reports[0].state {
            SlotState::Failed { kind, message } => {
                assert_eq!(*kind, IngestFailureKind::NamingConvention);
                assert!(message.contains("WARE"));
                assert!(message.contains("movements.xlsx"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
        // The WARR slot is unaffected.
        assert_eq!(reports[1].state, SlotState::Empty);
    }
}
