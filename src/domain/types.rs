// ==========================================
// Flight Movement Dashboard - Domain Types
// ==========================================
// Branch codes are a closed set: every upload slot is labeled with one
// of these facility identifiers and nothing else is accepted.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// Branch Code (4-letter facility identifier)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BranchCode {
    /// Waingapu
    WARE,
    /// Surabaya (Juanda)
    WARR,
    /// Bawean
    WARW,
    /// Cepu
    WARC,
    /// Blora
    WARD,
    /// Sumenep
    WADY,
    /// Abdulrachman Saleh
    WARA,
    /// Kediri (Dhoho)
    WART,
}

impl BranchCode {
    /// The fixed set of branches that must each deliver one upload.
    pub const ALL: [BranchCode; 8] = [
        BranchCode::WARE,
        BranchCode::WARR,
        BranchCode::WARW,
        BranchCode::WARC,
        BranchCode::WARD,
        BranchCode::WADY,
        BranchCode::WARA,
        BranchCode::WART,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BranchCode::WARE => "WARE",
            BranchCode::WARR => "WARR",
            BranchCode::WARW => "WARW",
            BranchCode::WARC => "WARC",
            BranchCode::WARD => "WARD",
            BranchCode::WADY => "WADY",
            BranchCode::WARA => "WARA",
            BranchCode::WART => "WART",
        }
    }
}

impl fmt::Display for BranchCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BranchCode {
    type Err = UnknownBranchCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WARE" => Ok(BranchCode::WARE),
            "WARR" => Ok(BranchCode::WARR),
            "WARW" => Ok(BranchCode::WARW),
            "WARC" => Ok(BranchCode::WARC),
            "WARD" => Ok(BranchCode::WARD),
            "WADY" => Ok(BranchCode::WADY),
            "WARA" => Ok(BranchCode::WARA),
            "WART" => Ok(BranchCode::WART),
            _ => Err(UnknownBranchCode(s.to_string())),
        }
    }
}

/// Returned when a string is not one of the fixed branch codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown branch code: {0}")]
pub struct UnknownBranchCode(pub String);
