use anyhow::{Result, bail};
use log::debug;

use super::model::Dataset;
use crate::error::DataError;

/// Return a new [`Dataset`] holding the first `limit` rows whose cell at
/// `column` equals `value`, in original relative order.
///
/// * Fewer than `limit` matches → all of them.
/// * Zero matches → an empty dataset with the same columns, not an error.
/// * `column` absent from the dataset → [`DataError::MissingColumn`].
///
/// Pure function of its inputs; calling it twice yields an identical result.
pub fn filter_equals(dataset: &Dataset, column: &str, value: &str, limit: usize) -> Result<Dataset> {
    if !dataset.has_column(column) {
        bail!(DataError::MissingColumn(column.to_string()));
    }

    let rows: Vec<_> = dataset
        .rows
        .iter()
        .filter(|row| {
            row.get(column)
                .map(|cell| cell.matches(value))
                .unwrap_or(false)
        })
        .take(limit)
        .cloned()
        .collect();

    debug!(
        "filter {column} == {value:?}: kept {} of {} rows (limit {limit})",
        rows.len(),
        dataset.len()
    );
    Ok(Dataset::new(dataset.columns.clone(), rows))
}
