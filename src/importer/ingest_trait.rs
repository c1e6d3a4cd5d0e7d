// ==========================================
// Flight Movement Dashboard - Ingestion Traits
// ==========================================
// Interface seams of the ingestion pipeline (no implementations).
// The upload widget and the parser sit behind traits so the host UI
// and the tests can substitute their own.
// ==========================================

use crate::domain::{BranchCode, SlotReport, UploadedFile};
use crate::importer::error::ImportResult;
use crate::importer::file_parser::ParsedTable;
use async_trait::async_trait;
use std::collections::HashMap;

// ==========================================
// UploadSource Trait
// ==========================================
// Role: the upload widget collaborator. Yields, per branch slot,
// either nothing or one named binary blob.
pub trait UploadSource: Send + Sync {
    /// Take the upload attached to a branch slot, if any.
    ///
    /// Consumes the blob: a second call for the same branch returns
    /// `None` until the user attaches a new file.
    fn take(&mut self, branch: BranchCode) -> Option<UploadedFile>;
}

/// Upload source over a prepared slot map. Used by tests and by hosts
/// that buffer widget uploads in memory.
#[derive(Debug, Default)]
pub struct InMemoryUploadSource {
    slots: HashMap<BranchCode, UploadedFile>,
}

impl InMemoryUploadSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, branch: BranchCode, file: UploadedFile) {
        self.slots.insert(branch, file);
    }
}

impl UploadSource for InMemoryUploadSource {
    fn take(&mut self, branch: BranchCode) -> Option<UploadedFile> {
        self.slots.remove(&branch)
    }
}

// ==========================================
// FileParser Trait
// ==========================================
// Role: decode one upload's bytes into a schema-aligned table.
// Implementor: ExcelParser (calamine).
pub trait FileParser: Send + Sync {
    /// Parse upload bytes into a [`ParsedTable`].
    ///
    /// Must be side-effect free and deterministic over the same bytes.
    fn parse(&self, file: &UploadedFile) -> ImportResult<ParsedTable>;
}

// ==========================================
// MovementIngestor Trait
// ==========================================
// Role: drive validate -> parse -> sanitize -> load per branch slot.
// Implementor: IngestOrchestrator.
#[async_trait]
pub trait MovementIngestor: Send + Sync {
    /// Evaluate every required branch slot once.
    ///
    /// One independent outcome per branch; a failed branch never
    /// blocks or rolls back another branch's success.
    async fn ingest_all(&self, source: &mut dyn UploadSource) -> Vec<SlotReport>;

    /// Run the pipeline for a single branch's upload.
    async fn ingest_branch(&self, branch: BranchCode, file: UploadedFile) -> SlotReport;
}
