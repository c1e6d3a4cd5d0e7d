// ==========================================
// Flight Movement Dashboard - Filename Validator
// ==========================================
// Upload naming contract:
//   (Data Movement Cabang <BRANCH>) <anything>.<xls|xlsx>
// The branch token must equal the code of the slot the file was
// uploaded to. Extensions are case-sensitive.
// ==========================================

use crate::domain::BranchCode;
use crate::importer::error::{ImportError, ImportResult};
use regex::Regex;

/// Naming template for movement uploads.
const FILE_TEMPLATE: &str = r"^\(Data Movement Cabang (\w+)\) .+\.(xls|xlsx)$";

pub struct FilenameValidator {
    template: Regex,
}

impl Default for FilenameValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl FilenameValidator {
    pub fn new() -> Self {
        Self {
            // The template is a compile-time constant.
            template: Regex::new(FILE_TEMPLATE).expect("upload filename template is valid"),
        }
    }

    /// Check an upload's display name against the naming template and
    /// confirm its declared branch.
    ///
    /// No side effects; the returned code always equals `expected`.
    pub fn validate(&self, filename: &str, expected: BranchCode) -> ImportResult<BranchCode> {
        let captures =
            self.template
                .captures(filename)
                .ok_or_else(|| ImportError::NamingConvention {
                    filename: filename.to_string(),
                })?;

        // Group 1 is the parenthesized branch token. A token outside
        // the closed branch set is still a mismatch for this slot.
        let token = &captures[1];
        if token != expected.as_str() {
            return Err(ImportError::BranchMismatch {
                filename: filename.to_string(),
                expected: expected.to_string(),
            });
        }

        Ok(expected)
    }
}
