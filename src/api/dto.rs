// ==========================================
// Flight Movement Dashboard - API DTOs
// ==========================================
// Serialized shapes the dashboard host renders. Messages are shown to
// the user verbatim.
// ==========================================

use crate::domain::{IngestFailureKind, SlotReport, SlotState};
use serde::{Deserialize, Serialize};

/// Per-slot outcome for the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotReportDto {
    /// Branch code the slot is labeled with.
    pub branch: String,
    /// Display name of the consumed upload, when one was attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Per-attempt id for log correlation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
    /// "empty" | "succeeded" | "failed"
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows_inserted: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<IngestFailureKind>,
    /// Human-readable status line for the slot.
    pub message: String,
}

impl From<SlotReport> for SlotReportDto {
    fn from(report: SlotReport) -> Self {
        let branch = report.branch.to_string();
        let (status, rows_inserted, error_kind, message) = match report.state {
            SlotState::Empty => (
                "empty",
                None,
                None,
                format!("File for branch {} not yet uploaded", branch),
            ),
            SlotState::Succeeded { rows_inserted } => (
                "succeeded",
                Some(rows_inserted),
                None,
                format!(
                    "Movement data for branch {} stored successfully ({} rows)",
                    branch, rows_inserted
                ),
            ),
            SlotState::Failed { kind, message } => ("failed", None, Some(kind), message),
        };

        Self {
            branch,
            file_name: report.file_name,
            run_id: report.run_id.map(|id| id.to_string()),
            status: status.to_string(),
            rows_inserted,
            error_kind,
            message,
        }
    }
}
