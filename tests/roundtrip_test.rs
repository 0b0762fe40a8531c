use std::path::PathBuf;

use rowsieve::config::FilterJob;
use rowsieve::data::loader::load_file;
use rowsieve::data::model::{CellValue, Dataset, Record};
use rowsieve::data::writer::save_file;
use rowsieve::error::DataError;
use tempfile::TempDir;

const STOCK_COLUMN: &str = "Работа через сток";

fn scratch(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

/// Parts table with explicit values in every cell, suitable for exact
/// round-trip comparison in text-typed formats.
fn parts_dataset(answers: &[&str]) -> Dataset {
    let columns = vec![
        "Деталь".to_string(),
        "Количество".to_string(),
        STOCK_COLUMN.to_string(),
    ];
    let rows = answers
        .iter()
        .enumerate()
        .map(|(i, answer)| {
            let mut record = Record::new();
            record.insert("Деталь".to_string(), CellValue::String(format!("part-{i}")));
            record.insert("Количество".to_string(), CellValue::Integer(i as i64 + 1));
            record.insert(
                STOCK_COLUMN.to_string(),
                CellValue::String(answer.to_string()),
            );
            record
        })
        .collect();
    Dataset::new(columns, rows)
}

#[test]
fn csv_round_trip_preserves_rows_and_columns() {
    let dir = TempDir::new().unwrap();
    let path = scratch(&dir, "parts.csv");
    let original = parts_dataset(&["Да", "Нет", "Да"]);

    save_file(&original, &path).unwrap();
    let loaded = load_file(&path).unwrap();

    assert_eq!(loaded, original);
}

#[test]
fn json_round_trip_preserves_rows_and_columns() {
    let dir = TempDir::new().unwrap();
    let path = scratch(&dir, "parts.json");
    let original = parts_dataset(&["Да", "Нет"]);

    save_file(&original, &path).unwrap();
    let loaded = load_file(&path).unwrap();

    assert_eq!(loaded, original);
}

#[test]
fn parquet_round_trip_preserves_cell_types() {
    let dir = TempDir::new().unwrap();
    let path = scratch(&dir, "parts.parquet");

    let columns = vec![
        "name".to_string(),
        "qty".to_string(),
        "weight".to_string(),
        "in_stock".to_string(),
    ];
    let mut record = Record::new();
    record.insert("name".to_string(), CellValue::String("фильтр".into()));
    record.insert("qty".to_string(), CellValue::Integer(4));
    record.insert("weight".to_string(), CellValue::Float(2.5));
    record.insert("in_stock".to_string(), CellValue::Bool(true));
    let mut sparse = Record::new();
    sparse.insert("name".to_string(), CellValue::Null);
    sparse.insert("qty".to_string(), CellValue::Integer(7));
    sparse.insert("weight".to_string(), CellValue::Null);
    sparse.insert("in_stock".to_string(), CellValue::Bool(false));
    let original = Dataset::new(columns, vec![record, sparse]);

    save_file(&original, &path).unwrap();
    let loaded = load_file(&path).unwrap();

    assert_eq!(loaded, original);
}

#[test]
fn xlsx_round_trip_preserves_header_and_text_cells() {
    let dir = TempDir::new().unwrap();
    let path = scratch(&dir, "parts.xlsx");
    let original = parts_dataset(&["Да", "Нет", "Да"]);

    save_file(&original, &path).unwrap();
    let loaded = load_file(&path).unwrap();

    assert_eq!(loaded.columns, original.columns);
    assert_eq!(loaded.len(), original.len());
    for i in 0..original.len() {
        // Text cells survive as-is; numbers come back as numbers, though a
        // workbook stores them as floats.
        assert_eq!(
            loaded.cell(i, "Деталь"),
            original.cell(i, "Деталь")
        );
        assert_eq!(
            loaded.cell(i, STOCK_COLUMN),
            original.cell(i, STOCK_COLUMN)
        );
        assert_eq!(
            loaded.cell(i, "Количество").as_f64(),
            original.cell(i, "Количество").as_f64()
        );
    }
}

#[test]
fn empty_dataset_writes_header_only_file() {
    let dir = TempDir::new().unwrap();
    let path = scratch(&dir, "empty.csv");
    let original = Dataset::new(
        vec!["Деталь".to_string(), STOCK_COLUMN.to_string()],
        Vec::new(),
    );

    save_file(&original, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 1);

    let loaded = load_file(&path).unwrap();
    assert!(loaded.is_empty());
    assert_eq!(loaded.columns, original.columns);
}

#[test]
fn empty_dataset_writes_header_only_workbook() {
    let dir = TempDir::new().unwrap();
    let path = scratch(&dir, "empty.xlsx");
    let original = Dataset::new(
        vec!["Деталь".to_string(), STOCK_COLUMN.to_string()],
        Vec::new(),
    );

    save_file(&original, &path).unwrap();
    let loaded = load_file(&path).unwrap();

    assert!(loaded.is_empty());
    assert_eq!(loaded.columns, original.columns);
}

#[test]
fn save_rejects_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let path = scratch(&dir, "parts.docx");
    let ds = parts_dataset(&["Да"]);

    let err = save_file(&ds, &path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DataError>(),
        Some(DataError::UnsupportedExtension(_))
    ));
    assert!(!path.exists());
}

#[test]
fn load_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = scratch(&dir, "no_such_file.xlsx");
    assert!(load_file(&path).is_err());
}

#[test]
fn end_to_end_job_caps_output_at_limit() {
    let dir = TempDir::new().unwrap();
    let input = scratch(&dir, "parts.xlsx");
    let output = scratch(&dir, "JD_clean.xlsx");

    // 15 matching and 5 non-matching rows.
    let answers: Vec<&str> = (0..20)
        .map(|i| if i % 4 == 3 { "Нет" } else { "Да" })
        .collect();
    save_file(&parts_dataset(&answers), &input).unwrap();

    let job = FilterJob {
        input_path: input,
        output_path: output.clone(),
        filter_column: STOCK_COLUMN.to_string(),
        filter_value: "Да".to_string(),
        row_limit: 12,
    };
    let written = rowsieve::run_job(&job).unwrap();
    assert_eq!(written, 12);

    let result = load_file(&output).unwrap();
    assert_eq!(result.len(), 12);

    // The first 12 of the 15 matches, in original order.
    let expected: Vec<String> = (0..20)
        .filter(|i| i % 4 != 3)
        .take(12)
        .map(|i| format!("part-{i}"))
        .collect();
    let got: Vec<String> = (0..result.len())
        .map(|i| result.cell(i, "Деталь").to_string())
        .collect();
    assert_eq!(got, expected);
}

#[test]
fn end_to_end_job_with_three_matches_writes_three_rows() {
    let dir = TempDir::new().unwrap();
    let input = scratch(&dir, "parts.csv");
    let output = scratch(&dir, "clean.csv");

    save_file(
        &parts_dataset(&["Нет", "Да", "Нет", "Да", "Да"]),
        &input,
    )
    .unwrap();

    let job = FilterJob {
        input_path: input,
        output_path: output.clone(),
        filter_column: STOCK_COLUMN.to_string(),
        filter_value: "Да".to_string(),
        row_limit: 12,
    };
    let written = rowsieve::run_job(&job).unwrap();
    assert_eq!(written, 3);

    let text = std::fs::read_to_string(&output).unwrap();
    assert_eq!(text.lines().count(), 4); // header + 3 data rows, no padding
}
