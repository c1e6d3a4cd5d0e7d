// ==========================================
// Flight Movement Dashboard - Row Sanitizer
// ==========================================
// Pure, total normalization of spreadsheet cells into storage-safe
// values. Every missing-value sentinel (NaN float, error cell, empty
// cell, invalid datetime) becomes an explicit Null; nothing else is
// reinterpreted. Time-of-day cells are NOT reformatted to a canonical
// shape here.
// ==========================================

use crate::domain::{CellValue, SanitizedRow, DATE_COLUMN_INDEX};
use crate::importer::file_parser::ParsedTable;
use calamine::{Data, DataType};
use chrono::{NaiveDate, NaiveDateTime};

/// Accepted textual date shapes for the TANGGAL column.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d", "%d-%m-%Y"];

#[derive(Default)]
pub struct RowSanitizer;

impl RowSanitizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize a parsed table into database-safe rows.
    ///
    /// Total function: there is no failure path, every input cell has
    /// a defined output. Row order and width are preserved.
    pub fn sanitize(&self, table: ParsedTable) -> Vec<SanitizedRow> {
        table
            .rows
            .into_iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(col, cell)| {
                        if col == DATE_COLUMN_INDEX {
                            sanitize_date_cell(cell)
                        } else {
                            sanitize_cell(cell)
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

/// TANGGAL: parse as a calendar date; unparseable values become Null.
///
/// Date parse failures are tolerated here because the destination
/// column is nullable; they are not an import error.
fn sanitize_date_cell(cell: &Data) -> CellValue {
    match cell {
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_datetime()
            .map(|dt| CellValue::Date(dt.date()))
            .unwrap_or(CellValue::Null),
        Data::String(s) => parse_date_text(s.trim())
            .map(CellValue::Date)
            .unwrap_or(CellValue::Null),
        _ => CellValue::Null,
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }
    // Datetime text such as "2025-01-15 00:00:00" still carries a date.
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.date())
        .ok()
}

/// Any column other than TANGGAL.
fn sanitize_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        // Text passes through as-is; only sentinels are normalized.
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => {
            if f.is_nan() {
                CellValue::Null
            } else {
                CellValue::Real(*f)
            }
        }
        Data::Int(i) => CellValue::Integer(*i),
        Data::Bool(b) => CellValue::Integer(i64::from(*b)),
        // Formula/reference errors carry no value.
        Data::Error(_) => CellValue::Null,
        Data::DateTime(excel_dt) => {
            let serial = excel_dt.as_f64();
            if !serial.is_finite() {
                // Not-a-time sentinel.
                CellValue::Null
            } else if serial < 1.0 {
                // Serials below one day are pure time-of-day cells
                // (EOBT, ATD, ...); they stay plain text scalars.
                let seconds = (serial * 86_400.0).round() as u32;
                CellValue::Text(format!(
                    "{:02}:{:02}:{:02}",
                    seconds / 3600,
                    (seconds % 3600) / 60,
                    seconds % 60
                ))
            } else {
                cell.as_datetime()
                    .map(|dt| CellValue::Text(dt.format("%Y-%m-%d %H:%M:%S").to_string()))
                    .unwrap_or(CellValue::Null)
            }
        }
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
