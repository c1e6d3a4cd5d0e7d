// ==========================================
// Flight Movement Dashboard - Spreadsheet Parser
// ==========================================
// Fixed-layout movement sheet: 6-row banner, then one leftover index
// column followed by exactly 17 data columns. Column names bind by
// position against FLIGHT_COLUMNS; banner headers are not trusted.
// ==========================================

use crate::domain::{UploadedFile, BANNER_ROWS, FLIGHT_COLUMN_COUNT};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::ingest_trait::FileParser;
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use std::io::Cursor;

// ==========================================
// ParsedTable
// ==========================================

/// Raw table read out of one movement sheet.
///
/// Every row has exactly [`FLIGHT_COLUMN_COUNT`] cells, aligned 1:1
/// with `FLIGHT_COLUMNS`; the width assertion happened at parse time.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTable {
    pub rows: Vec<Vec<Data>>,
}

impl ParsedTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ==========================================
// Excel Parser
// ==========================================

/// calamine-backed parser for xls/xlsx upload bytes.
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse(&self, file: &UploadedFile) -> ImportResult<ParsedTable> {
        // Format (xls vs xlsx) is detected from the bytes themselves,
        // not from the display name.
        let cursor = Cursor::new(file.bytes.clone());
        let mut workbook = open_workbook_auto_from_rs(cursor).map_err(|e| {
            ImportError::Parse(format!("cannot open workbook '{}': {}", file.name, e))
        })?;

        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ImportError::Parse(format!("workbook '{}' has no sheets", file.name)))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::Parse(format!("cannot read sheet '{}': {}", sheet_name, e)))?;

        bind_rows(&range)
    }
}

/// Bind a used range onto the fixed schema.
///
/// Skips the banner region, drops the leading index column, asserts
/// the remaining width, and returns the data rows in sheet order.
/// Deterministic over the same input; no side effects.
pub fn bind_rows(range: &Range<Data>) -> ImportResult<ParsedTable> {
    // The banner occupies absolute sheet rows 0..BANNER_ROWS. The used
    // range may begin below the origin when leading rows are fully
    // blank, so the skip count is offset by where the range starts.
    let start_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);
    let data_rows: Vec<&[Data]> = range
        .rows()
        .skip(BANNER_ROWS.saturating_sub(start_row))
        .collect();

    if data_rows.is_empty() {
        return Ok(ParsedTable { rows: Vec::new() });
    }

    // Width is measured over the data region only. A stray banner cell
    // to the right of the table (a "printed on" stamp) widens the used
    // range but must not widen the contract.
    let data_width = data_rows.iter().map(|row| row_width(row)).max().unwrap_or(0);
    let actual = data_width.saturating_sub(1);
    if actual != FLIGHT_COLUMN_COUNT {
        return Err(ImportError::SchemaMismatch {
            actual,
            expected: FLIGHT_COLUMN_COUNT,
        });
    }

    let rows = data_rows
        .iter()
        .map(|row| row.iter().skip(1).take(FLIGHT_COLUMN_COUNT).cloned().collect())
        .collect();

    Ok(ParsedTable { rows })
}

/// Width of one row with trailing blank cells trimmed.
fn row_width(row: &[Data]) -> usize {
    row.iter()
        .rposition(|cell| !matches!(cell, Data::Empty))
        .map_or(0, |i| i + 1)
}
