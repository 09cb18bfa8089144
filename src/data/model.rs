use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// CellValue – a single parsed field of a data row
// ---------------------------------------------------------------------------

/// A dynamically-typed cell produced by ingestion.
///
/// Coercion order is fixed: a field that parses as a finite number is a
/// `Number`; otherwise, if it matches one of the supported calendar formats,
/// it is a `Date`; everything else stays the trimmed `Text`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Date(NaiveDate),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Date(d) => write!(f, "{d}"),
        }
    }
}

impl CellValue {
    /// Interpret the cell as an `f64` where possible.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, CellValue::Number(_))
    }
}

// ---------------------------------------------------------------------------
// RowRecord – one data line of the source file
// ---------------------------------------------------------------------------

/// A single parsed data line: column name → cell, plus the 1-based line
/// number among data lines. Ragged input leaves the missing columns absent.
#[derive(Debug, Clone)]
pub struct RowRecord {
    pub index: usize,
    pub cells: BTreeMap<String, CellValue>,
}

impl RowRecord {
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Numeric view of one cell, `None` when absent or non-numeric.
    pub fn number(&self, column: &str) -> Option<f64> {
        self.cells.get(column).and_then(CellValue::as_f64)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset. The schema (`columns`) is carried explicitly in
/// header order rather than re-derived from the first row.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Name of the originating file, for display and noise seeding.
    pub file_name: String,
    /// Ordered column names from the header line.
    pub columns: Vec<String>,
    /// All rows, in input order. `rows[i].index == i + 1`.
    pub rows: Vec<RowRecord>,
}

impl Dataset {
    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The column charted as the "actual" series: the first schema column
    /// whose present cells are numeric in every row. One stray text cell
    /// disqualifies the whole column.
    pub fn primary_numeric_column(&self) -> Option<&str> {
        self.columns.iter().map(String::as_str).find(|col| {
            let mut seen = false;
            for row in &self.rows {
                match row.get(col) {
                    Some(cell) if cell.is_number() => seen = true,
                    Some(_) => return false,
                    None => {}
                }
            }
            seen
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
