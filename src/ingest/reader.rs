//! CSV reading
//!
//! Turns an attendee export into header-keyed rows. Header spellings are kept
//! exactly as exported; mapping them onto contact fields is the normalizer's job.

use std::collections::HashMap;
use crate::utils::errors::Result;

/// One CSV data row keyed by its column header
pub type RawRow = HashMap<String, String>;

const BOM: char = '\u{feff}';

/// Parse CSV text with a header row.
///
/// Blank lines are skipped and rows shorter than the header simply lack the
/// trailing columns.
pub fn read_rows(text: &str) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(index, header)| {
            if index == 0 {
                header.trim_start_matches(BOM).to_string()
            } else {
                header.to_string()
            }
        })
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.clone(), value.to_string()))
            .collect();
        rows.push(row);
    }

    tracing::debug!(rows = rows.len(), columns = headers.len(), "CSV parsed");
    Ok(rows)
}
