use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{ArrayRef, BooleanArray, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use log::debug;
use parquet::arrow::ArrowWriter;
use rust_xlsxwriter::Workbook;
use serde_json::{Map as JsonMap, Value as JsonValue};

use super::model::{CellValue, Dataset};
use crate::error::DataError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Write a dataset to a file.  Dispatch by extension, mirroring the loader.
///
/// The first row (or the schema, for Parquet) carries the column headers in
/// the dataset's column order; data rows follow in dataset order.  No
/// row-index column is written.  Creates or overwrites `path`; an empty
/// dataset still produces a header-only file.
pub fn save_file(dataset: &Dataset, path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "xlsx" => save_xlsx(dataset, path),
        "csv" => save_csv(dataset, path),
        "json" => save_json(dataset, path),
        "parquet" | "pq" => save_parquet(dataset, path),
        other => bail!(DataError::UnsupportedExtension(other.to_string())),
    }?;

    debug!(
        "wrote {} rows x {} columns to {}",
        dataset.len(),
        dataset.columns.len(),
        path.display()
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// XLSX writer
// ---------------------------------------------------------------------------

fn save_xlsx(dataset: &Dataset, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in dataset.columns.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, name)
            .context("writing header row")?;
    }

    for (row_idx, _) in dataset.rows.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        for (col_idx, name) in dataset.columns.iter().enumerate() {
            let col = col_idx as u16;
            match dataset.cell(row_idx, name) {
                CellValue::String(s) => worksheet.write_string(row, col, s),
                CellValue::Integer(i) => worksheet.write_number(row, col, *i as f64),
                CellValue::Float(f) => worksheet.write_number(row, col, *f),
                CellValue::Bool(b) => worksheet.write_boolean(row, col, *b),
                CellValue::Null => continue,
            }
            .with_context(|| format!("writing cell ({row}, {col})"))?;
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("saving workbook {}", path.display()))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

/// Canonical text forms; `Null` becomes an empty field.
fn save_csv(dataset: &Dataset, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating CSV {}", path.display()))?;

    writer
        .write_record(&dataset.columns)
        .context("writing CSV header")?;

    for (row_idx, _) in dataset.rows.iter().enumerate() {
        let fields: Vec<String> = dataset
            .columns
            .iter()
            .map(|name| dataset.cell(row_idx, name).to_string())
            .collect();
        writer
            .write_record(&fields)
            .with_context(|| format!("writing CSV row {row_idx}"))?;
    }

    writer.flush().context("flushing CSV")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON writer
// ---------------------------------------------------------------------------

/// Records orientation, matching the loader's expected schema.
fn save_json(dataset: &Dataset, path: &Path) -> Result<()> {
    let records: Vec<JsonValue> = dataset
        .rows
        .iter()
        .enumerate()
        .map(|(row_idx, _)| {
            let mut obj = JsonMap::new();
            for name in &dataset.columns {
                obj.insert(name.clone(), cell_to_json(dataset.cell(row_idx, name)));
            }
            JsonValue::Object(obj)
        })
        .collect();

    let file = std::fs::File::create(path)
        .with_context(|| format!("creating JSON {}", path.display()))?;
    serde_json::to_writer_pretty(file, &records).context("serialising JSON records")?;
    Ok(())
}

fn cell_to_json(cell: &CellValue) -> JsonValue {
    match cell {
        CellValue::String(s) => JsonValue::String(s.clone()),
        CellValue::Integer(i) => JsonValue::from(*i),
        CellValue::Float(f) => {
            serde_json::Number::from_f64(*f).map_or(JsonValue::Null, JsonValue::Number)
        }
        CellValue::Bool(b) => JsonValue::Bool(*b),
        CellValue::Null => JsonValue::Null,
    }
}

// ---------------------------------------------------------------------------
// Parquet writer
// ---------------------------------------------------------------------------

/// Narrowest Arrow type a column fits in, judged from its non-null cells.
#[derive(Clone, Copy, PartialEq)]
enum ColumnType {
    Int64,
    Float64,
    Boolean,
    Utf8,
}

fn infer_column_type(dataset: &Dataset, column: &str) -> ColumnType {
    let mut seen: Option<ColumnType> = None;
    for row_idx in 0..dataset.len() {
        let cell_type = match dataset.cell(row_idx, column) {
            CellValue::Null => continue,
            CellValue::Integer(_) => ColumnType::Int64,
            CellValue::Float(_) => ColumnType::Float64,
            CellValue::Bool(_) => ColumnType::Boolean,
            CellValue::String(_) => ColumnType::Utf8,
        };
        seen = Some(match (seen, cell_type) {
            (None, t) => t,
            (Some(prev), t) if prev == t => t,
            // int/float mixes widen to float, anything else falls back to text
            (Some(ColumnType::Int64), ColumnType::Float64)
            | (Some(ColumnType::Float64), ColumnType::Int64) => ColumnType::Float64,
            _ => ColumnType::Utf8,
        });
    }
    seen.unwrap_or(ColumnType::Utf8)
}

fn save_parquet(dataset: &Dataset, path: &Path) -> Result<()> {
    let mut fields = Vec::with_capacity(dataset.columns.len());
    let mut arrays: Vec<ArrayRef> = Vec::with_capacity(dataset.columns.len());

    for name in &dataset.columns {
        let column_type = infer_column_type(dataset, name);
        let cells = (0..dataset.len()).map(|row_idx| dataset.cell(row_idx, name));

        let (data_type, array): (DataType, ArrayRef) = match column_type {
            ColumnType::Int64 => {
                let values: Vec<Option<i64>> = cells
                    .map(|c| match c {
                        CellValue::Integer(i) => Some(*i),
                        _ => None,
                    })
                    .collect();
                (DataType::Int64, Arc::new(Int64Array::from(values)))
            }
            ColumnType::Float64 => {
                let values: Vec<Option<f64>> = cells.map(|c| c.as_f64()).collect();
                (DataType::Float64, Arc::new(Float64Array::from(values)))
            }
            ColumnType::Boolean => {
                let values: Vec<Option<bool>> = cells
                    .map(|c| match c {
                        CellValue::Bool(b) => Some(*b),
                        _ => None,
                    })
                    .collect();
                (DataType::Boolean, Arc::new(BooleanArray::from(values)))
            }
            ColumnType::Utf8 => {
                let values: Vec<Option<String>> = cells
                    .map(|c| match c {
                        CellValue::Null => None,
                        other => Some(other.to_string()),
                    })
                    .collect();
                (DataType::Utf8, Arc::new(StringArray::from(values)))
            }
        };

        fields.push(Field::new(name, data_type, true));
        arrays.push(array);
    }

    let schema = Arc::new(Schema::new(fields));
    let batch =
        RecordBatch::try_new(schema.clone(), arrays).context("building parquet record batch")?;

    let file = std::fs::File::create(path)
        .with_context(|| format!("creating parquet file {}", path.display()))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn one_column(cells: Vec<CellValue>) -> Dataset {
        let rows = cells
            .into_iter()
            .map(|c| {
                let mut r = Record::new();
                r.insert("v".to_string(), c);
                r
            })
            .collect();
        Dataset::new(vec!["v".to_string()], rows)
    }

    #[test]
    fn column_type_widens_int_to_float() {
        let ds = one_column(vec![CellValue::Integer(1), CellValue::Float(2.5)]);
        assert!(infer_column_type(&ds, "v") == ColumnType::Float64);
    }

    #[test]
    fn mixed_column_falls_back_to_text() {
        let ds = one_column(vec![CellValue::Integer(1), CellValue::String("x".into())]);
        assert!(infer_column_type(&ds, "v") == ColumnType::Utf8);
    }

    #[test]
    fn all_null_column_is_text() {
        let ds = one_column(vec![CellValue::Null, CellValue::Null]);
        assert!(infer_column_type(&ds, "v") == ColumnType::Utf8);
    }
}
