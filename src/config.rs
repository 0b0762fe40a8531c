use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Reference defaults: the dispatch workbook the tool was written around.
pub const DEFAULT_OUTPUT: &str = "JD_clean.xlsx";
pub const DEFAULT_FILTER_COLUMN: &str = "Работа через сток";
pub const DEFAULT_FILTER_VALUE: &str = "Да";
pub const DEFAULT_ROW_LIMIT: usize = 12;

/// One filter-and-export job: which file to read, which rows to keep,
/// where to write them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterJob {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Column whose value decides whether a row is kept.
    pub filter_column: String,
    /// Literal the column must equal.
    pub filter_value: String,
    /// Keep at most this many matching rows (first matches, file order).
    pub row_limit: usize,
}

impl FilterJob {
    /// Job over `input_path` with the reference defaults for everything else.
    pub fn with_defaults(input_path: PathBuf) -> Self {
        FilterJob {
            input_path,
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            filter_column: DEFAULT_FILTER_COLUMN.to_string(),
            filter_value: DEFAULT_FILTER_VALUE.to_string(),
            row_limit: DEFAULT_ROW_LIMIT,
        }
    }
}
