use std::collections::BTreeMap;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, Trim};
use thiserror::Error;

use super::model::{CellValue, Dataset, RowRecord};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong while turning a file into a [`Dataset`].
/// All of these surface as a status notice; none of them is fatal and none
/// of them replaces a previously loaded dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Invalid file type: please select a .csv file")]
    InvalidFileType,

    #[error("The CSV file appears to be empty")]
    Empty,

    #[error("Error reading file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error parsing CSV: {0}")]
    Malformed(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a dataset from a file on disk. Only `.csv` files are accepted; the
/// extension check runs before any I/O so a rejected upload touches nothing.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    if ext != "csv" {
        return Err(LoadError::InvalidFileType);
    }

    let text = std::fs::read_to_string(path)?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.csv")
        .to_string();

    parse_csv(&text, &file_name)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse CSV text into a [`Dataset`].
///
/// The first line is the header and becomes the schema; every following
/// non-blank line becomes one [`RowRecord`] numbered from 1 in input order.
/// Fields are trimmed and zipped against the header by position: ragged rows
/// leave their missing trailing columns absent, surplus fields are dropped.
pub fn parse_csv(text: &str, file_name: &str) -> Result<Dataset, LoadError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows: Vec<RowRecord> = Vec::new();

    for result in reader.records() {
        let record = result?;

        // A whitespace-only line trims down to a single empty field.
        if record.len() == 0 || (record.len() == 1 && record.get(0).unwrap_or("").is_empty()) {
            continue;
        }

        let mut cells = BTreeMap::new();
        for (i, column) in columns.iter().enumerate() {
            let Some(field) = record.get(i) else { break };
            cells.insert(column.clone(), coerce_field(field));
        }

        rows.push(RowRecord {
            index: rows.len() + 1,
            cells,
        });
    }

    if columns.is_empty() || rows.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(Dataset {
        file_name: file_name.to_string(),
        columns,
        rows,
    })
}

// ---------------------------------------------------------------------------
// Field coercion
// ---------------------------------------------------------------------------

/// Number → Date → Text ladder. Date parsing is attempted only after the
/// numeric parse fails, so numeric fields can never be shadowed by a
/// calendar interpretation.
fn coerce_field(field: &str) -> CellValue {
    if let Ok(n) = field.parse::<f64>() {
        if n.is_finite() {
            return CellValue::Number(n);
        }
    }
    if let Some(date) = parse_date(field) {
        return CellValue::Date(date);
    }
    CellValue::Text(field.to_string())
}

/// Accepted calendar formats. The list is short and unambiguous; anything
/// else stays text.
fn parse_date(field: &str) -> Option<NaiveDate> {
    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
    const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(field, fmt) {
            return Some(d);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(field, fmt) {
            return Some(dt.date());
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_and_falls_back_to_text() {
        let ds = parse_csv("a,b\n1,2\n3,x\n", "t.csv").unwrap();
        assert_eq!(ds.columns, vec!["a", "b"]);
        assert_eq!(ds.len(), 2);

        assert_eq!(ds.rows[0].index, 1);
        assert_eq!(ds.rows[0].get("a"), Some(&CellValue::Number(1.0)));
        assert_eq!(ds.rows[0].get("b"), Some(&CellValue::Number(2.0)));

        assert_eq!(ds.rows[1].index, 2);
        assert_eq!(ds.rows[1].get("a"), Some(&CellValue::Number(3.0)));
        assert_eq!(ds.rows[1].get("b"), Some(&CellValue::Text("x".into())));
    }

    #[test]
    fn every_row_is_indexed_in_input_order() {
        let ds = parse_csv("v\n10\n20\n30\n40\n", "t.csv").unwrap();
        let indices: Vec<usize> = ds.rows.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
    }

    #[test]
    fn fields_are_trimmed() {
        let ds = parse_csv("name , value\n  hello ,  7.5 \n", "t.csv").unwrap();
        assert_eq!(ds.columns, vec!["name", "value"]);
        assert_eq!(ds.rows[0].get("name"), Some(&CellValue::Text("hello".into())));
        assert_eq!(ds.rows[0].get("value"), Some(&CellValue::Number(7.5)));
    }

    #[test]
    fn blank_lines_are_discarded() {
        let ds = parse_csv("a\n1\n\n   \n2\n", "t.csv").unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows[1].get("a"), Some(&CellValue::Number(2.0)));
    }

    #[test]
    fn ragged_rows_leave_cells_absent() {
        let ds = parse_csv("a,b,c\n1,2\n", "t.csv").unwrap();
        assert_eq!(ds.rows[0].get("a"), Some(&CellValue::Number(1.0)));
        assert_eq!(ds.rows[0].get("b"), Some(&CellValue::Number(2.0)));
        assert_eq!(ds.rows[0].get("c"), None);
    }

    #[test]
    fn surplus_fields_are_ignored() {
        let ds = parse_csv("a\n1,2,3\n", "t.csv").unwrap();
        assert_eq!(ds.rows[0].cells.len(), 1);
        assert_eq!(ds.rows[0].get("a"), Some(&CellValue::Number(1.0)));
    }

    #[test]
    fn non_finite_numerics_stay_text() {
        let ds = parse_csv("a,b\ninf,NaN\n", "t.csv").unwrap();
        assert_eq!(ds.rows[0].get("a"), Some(&CellValue::Text("inf".into())));
        assert_eq!(ds.rows[0].get("b"), Some(&CellValue::Text("NaN".into())));
    }

    #[test]
    fn dates_are_coerced_only_when_numeric_parse_fails() {
        let ds = parse_csv("day,code\n2024-01-15,20240115\n", "t.csv").unwrap();

        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(ds.rows[0].get("day"), Some(&CellValue::Date(expected)));
        // A numeric-looking field must never become a date.
        assert_eq!(ds.rows[0].get("code"), Some(&CellValue::Number(20240115.0)));
    }

    #[test]
    fn datetime_fields_keep_their_calendar_date() {
        let ds = parse_csv("ts\n2024-03-01T12:30:00\n", "t.csv").unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(ds.rows[0].get("ts"), Some(&CellValue::Date(expected)));
    }

    #[test]
    fn header_only_input_is_empty() {
        assert!(matches!(parse_csv("a,b\n", "t.csv"), Err(LoadError::Empty)));
    }

    #[test]
    fn blank_input_is_empty() {
        assert!(matches!(parse_csv("", "t.csv"), Err(LoadError::Empty)));
        assert!(matches!(parse_csv("\n\n  \n", "t.csv"), Err(LoadError::Empty)));
    }

    #[test]
    fn non_csv_extension_is_rejected_before_io() {
        // The path does not exist; the extension gate must fire first.
        let err = load_file(Path::new("/nonexistent/notes.txt")).unwrap_err();
        assert!(matches!(err, LoadError::InvalidFileType));

        let err = load_file(Path::new("/nonexistent/archive")).unwrap_err();
        assert!(matches!(err, LoadError::InvalidFileType));
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        // Passes the gate, then fails on I/O since the file is absent.
        let err = load_file(Path::new("/nonexistent/DATA.CSV")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
