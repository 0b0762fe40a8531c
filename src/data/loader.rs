use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, AsArray, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray,
};
use arrow::datatypes::DataType;
use calamine::{Data as XlsCell, Reader, open_workbook_auto};
use log::debug;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{CellValue, Dataset, Record};
use crate::error::DataError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a tabular dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xlsm` / `.xls` / `.ods` – first worksheet; first row is the header
/// * `.csv`     – header row then records, cell types guessed per value
/// * `.json`    – `[{ "col": value, ... }, ...]` with flat scalar values
/// * `.parquet` – flat scalar columns (recommended for large tables)
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "xlsx" | "xlsm" | "xls" | "ods" => load_workbook(path),
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!(DataError::UnsupportedExtension(other.to_string())),
    }?;

    debug!(
        "loaded {} rows x {} columns from {}",
        dataset.len(),
        dataset.columns.len(),
        path.display()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Workbook loader (xlsx / xls / ods)
// ---------------------------------------------------------------------------

/// Read the first worksheet of a workbook.  Row 0 is the header; columns with
/// an empty header cell are dropped.
fn load_workbook(path: &Path) -> Result<Dataset> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("opening workbook {}", path.display()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(DataError::EmptyWorkbook)?
        .context("reading first worksheet")?;

    let mut rows = range.rows();
    let header_row = rows.next().ok_or(DataError::MissingHeader)?;

    // (cell index, column name) for every non-empty header cell
    let columns: Vec<(usize, String)> = header_row
        .iter()
        .enumerate()
        .filter(|(_, cell)| !matches!(cell, XlsCell::Empty))
        .map(|(i, cell)| (i, cell.to_string()))
        .collect();
    if columns.is_empty() {
        bail!(DataError::MissingHeader);
    }

    let mut records = Vec::new();
    for row in rows {
        let mut record = Record::new();
        for (idx, name) in &columns {
            let value = row.get(*idx).map(workbook_cell).unwrap_or(CellValue::Null);
            record.insert(name.clone(), value);
        }
        records.push(record);
    }

    let column_names = columns.into_iter().map(|(_, name)| name).collect();
    Ok(Dataset::new(column_names, records))
}

fn workbook_cell(cell: &XlsCell) -> CellValue {
    match cell {
        XlsCell::Empty => CellValue::Null,
        XlsCell::String(s) => CellValue::String(s.clone()),
        XlsCell::Int(i) => CellValue::Integer(*i),
        XlsCell::Float(f) => CellValue::Float(*f),
        XlsCell::Bool(b) => CellValue::Bool(*b),
        // Dates and durations are kept as their text form.
        other => CellValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, then one record per line.
/// Cell types are guessed per value (int, float, bool, else string).
fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;
    let columns: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        let mut record = Record::new();
        for (col_idx, value) in row.iter().enumerate() {
            if let Some(name) = columns.get(col_idx) {
                record.insert(name.clone(), guess_cell_type(value));
            }
        }
        records.push(record);
    }

    Ok(Dataset::new(columns, records))
}

fn guess_cell_type(s: &str) -> CellValue {
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    CellValue::String(s.to_string())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "Деталь": "Фильтр", "Работа через сток": "Да", "Количество": 4 },
///   ...
/// ]
/// ```
///
/// Column order is first-seen order across the records.
fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading JSON {}", path.display()))?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut columns: Vec<String> = Vec::new();
    let mut rows = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let mut record = Record::new();
        for (key, val) in obj {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
            record.insert(key.clone(), json_to_cell(val));
        }
        rows.push(record);
    }

    Ok(Dataset::new(columns, rows))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with flat scalar columns (strings, ints, floats,
/// bools).  Works with files written by both **Pandas** (`df.to_parquet()`)
/// and **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening parquet file {}", path.display()))?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut columns: Vec<String> = Vec::new();
    let mut rows = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        if columns.is_empty() {
            columns = schema.fields().iter().map(|f| f.name().clone()).collect();
        }

        for row in 0..batch.num_rows() {
            let mut record = Record::new();
            for (col_idx, name) in columns.iter().enumerate() {
                let value = extract_cell_value(batch.column(col_idx), row);
                record.insert(name.clone(), value);
            }
            rows.push(record);
        }
    }

    Ok(Dataset::new(columns, rows))
}

/// Extract a single cell from an Arrow column at a given row.
fn extract_cell_value(col: &Arc<dyn Array>, row: usize) -> CellValue {
    if col.is_null(row) {
        return CellValue::Null;
    }
    match col.data_type() {
        DataType::Utf8 | DataType::LargeUtf8 => {
            if let Some(s) = col.as_any().downcast_ref::<StringArray>() {
                CellValue::String(s.value(row).to_string())
            } else {
                // LargeStringArray
                let s = col.as_string::<i64>();
                CellValue::String(s.value(row).to_string())
            }
        }
        DataType::Int32 => {
            let arr = col.as_any().downcast_ref::<Int32Array>().unwrap();
            CellValue::Integer(arr.value(row) as i64)
        }
        DataType::Int64 => {
            let arr = col.as_any().downcast_ref::<Int64Array>().unwrap();
            CellValue::Integer(arr.value(row))
        }
        DataType::Float32 => {
            let arr = col.as_any().downcast_ref::<Float32Array>().unwrap();
            CellValue::Float(arr.value(row) as f64)
        }
        DataType::Float64 => {
            let arr = col.as_any().downcast_ref::<Float64Array>().unwrap();
            CellValue::Float(arr.value(row))
        }
        DataType::Boolean => {
            let arr = col.as_any().downcast_ref::<BooleanArray>().unwrap();
            CellValue::Bool(arr.value(row))
        }
        _ => CellValue::String(format!("{:?}", col.data_type())),
    }
}
