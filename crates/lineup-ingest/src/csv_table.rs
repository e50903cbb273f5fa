use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// A CSV file held as trimmed text cells.
///
/// Every row has exactly `headers.len()` cells; short records are padded with
/// empty strings and extra cells are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Position of the column whose header equals `name`.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Position of the column whose header equals `name`, ignoring ASCII case.
    pub fn column_ignore_case(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a CSV file, discarding `skip_lines` physical lines before the header.
///
/// Lineup exports carry a one-line title banner above the header row, so
/// season and interval tables are read with `skip_lines = 1`. The banner may
/// be blank or hold unbalanced quotes; it is never parsed as CSV.
pub fn read_csv_table(path: &Path, skip_lines: usize) -> Result<CsvTable> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file_read = |source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    };
    let mut input = BufReader::new(File::open(path).map_err(file_read)?);
    let mut banner = Vec::new();
    for _ in 0..skip_lines {
        banner.clear();
        if input.read_until(b'\n', &mut banner).map_err(file_read)? == 0 {
            return Err(IngestError::EmptyCsv {
                path: path.to_path_buf(),
            });
        }
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    let mut records = reader.records();
    let headers: Vec<String> = match records.next() {
        Some(record) => {
            let record = record.map_err(|source| IngestError::csv(path, source))?;
            record.iter().map(normalize_header).collect()
        }
        None => {
            return Err(IngestError::EmptyCsv {
                path: path.to_path_buf(),
            });
        }
    };
    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(|source| IngestError::csv(path, source))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(record.get(idx).map(normalize_cell).unwrap_or_default());
        }
        rows.push(row);
    }
    Ok(CsvTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_header_collapses_whitespace() {
        assert_eq!(normalize_header("  Net   Rtg "), "Net Rtg");
        assert_eq!(normalize_header("\u{feff}PID1"), "PID1");
    }

    #[test]
    fn column_lookup_respects_case_mode() {
        let table = CsvTable {
            headers: vec!["pId1".to_string(), "Net Rtg".to_string()],
            rows: Vec::new(),
        };
        assert_eq!(table.column("pId1"), Some(0));
        assert_eq!(table.column("PID1"), None);
        assert_eq!(table.column_ignore_case("PID1"), Some(0));
        assert_eq!(table.column_ignore_case("NET RTG"), Some(1));
    }
}
