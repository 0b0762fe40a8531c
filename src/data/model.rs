use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell in a column
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common spreadsheet dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => Ok(()),
        }
    }
}

impl CellValue {
    /// Equality against a textual literal, the way a user types it on the
    /// command line. `Null` never matches; every other variant matches when
    /// its canonical text form equals the literal (so an `Integer(12)` cell
    /// matches the literal `"12"`).
    pub fn matches(&self, literal: &str) -> bool {
        match self {
            CellValue::Null => false,
            CellValue::String(s) => s == literal,
            other => other.to_string() == literal,
        }
    }

    /// Try to interpret the value as an `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the table
// ---------------------------------------------------------------------------

/// One row, keyed by column name. A column absent from the map reads as
/// [`CellValue::Null`].
pub type Record = BTreeMap<String, CellValue>;

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table: header order plus rows in file order.
/// Immutable for the lifetime of the pipeline once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Column names in the order the header row listed them.
    pub columns: Vec<String>,
    /// All rows, in file order.
    pub rows: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, rows: Vec<Record>) -> Self {
        Dataset { columns, rows }
    }

    /// Number of data rows (the header is not a row).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Cell at `(row, column)`; `Null` when the row does not carry the column.
    pub fn cell(&self, row: usize, column: &str) -> &CellValue {
        self.rows[row].get(column).unwrap_or(&CellValue::Null)
    }
}
