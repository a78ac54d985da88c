//! Parsing of the uploaded CSV into an [`UploadedTable`].

use std::collections::HashMap;

use crate::domain::model::UploadedTable;
use crate::utils::error::{PrepError, Result};

const BOM: char = '\u{feff}';

/// Parses CSV bytes with a mandatory header row.
///
/// Cells are kept verbatim. Short rows are padded with empty cells, rows wider
/// than the header are rejected. Blank header cells are named `Unnamed: <i>`
/// and repeated names get `.1`, `.2`, ... suffixes so every column is
/// addressable by name.
pub fn parse_csv(data: &[u8]) -> Result<UploadedTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let raw_headers: Vec<String> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let h = if i == 0 { h.trim_start_matches(BOM) } else { h };
            if h.is_empty() {
                format!("Unnamed: {}", i)
            } else {
                h.to_string()
            }
        })
        .collect();

    if raw_headers.is_empty() {
        return Err(PrepError::ProcessingError {
            message: "No columns to parse from file".to_string(),
        });
    }

    let headers = dedupe_headers(raw_headers);
    let width = headers.len();
    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record?;
        if record.len() > width {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(PrepError::ProcessingError {
                message: format!(
                    "Expected {} fields in line {}, saw {}",
                    width,
                    line,
                    record.len()
                ),
            });
        }

        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        row.resize(width, String::new());
        rows.push(row);
    }

    tracing::debug!("Parsed {} columns and {} rows", width, rows.len());
    Ok(UploadedTable::new(headers, rows))
}

fn dedupe_headers(names: Vec<String>) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut out = Vec::with_capacity(names.len());

    for name in names {
        let mut col = name;
        let mut cur = counts.get(&col).copied().unwrap_or(0);
        while cur > 0 {
            counts.insert(col.clone(), cur + 1);
            col = format!("{}.{}", col, cur);
            cur = counts.get(&col).copied().unwrap_or(0);
        }
        counts.insert(col.clone(), cur + 1);
        out.push(col);
    }

    out
}
