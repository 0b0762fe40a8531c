//! Writes a deterministic sample workbook so the default pipeline can be
//! exercised end to end:
//!
//! ```sh
//! cargo run --bin generate_sample
//! cargo run -- sample_parts.xlsx
//! ```

use anyhow::Result;
use rowsieve::data::model::{CellValue, Dataset, Record};
use rowsieve::data::writer::save_file;

fn main() -> Result<()> {
    env_logger::init();

    let parts = [
        "Фильтр масляный",
        "Фильтр топливный",
        "Ремень приводной",
        "Подшипник ступицы",
        "Свеча зажигания",
        "Насос водяной",
        "Прокладка ГБЦ",
        "Датчик давления",
        "Радиатор",
        "Термостат",
    ];

    let columns = vec![
        "Деталь".to_string(),
        "Артикул".to_string(),
        "Количество".to_string(),
        "Работа через сток".to_string(),
    ];

    // 20 rows: every fourth row is off-stock, the rest go through stock,
    // so the default job (limit 12) has more matches than it keeps.
    let mut rows = Vec::new();
    for i in 0..20 {
        let through_stock = if i % 4 == 3 { "Нет" } else { "Да" };
        let mut record = Record::new();
        record.insert(
            "Деталь".to_string(),
            CellValue::String(parts[i % parts.len()].to_string()),
        );
        record.insert(
            "Артикул".to_string(),
            CellValue::String(format!("JD-{:04}", 1000 + i * 7)),
        );
        record.insert(
            "Количество".to_string(),
            CellValue::Integer((i as i64 % 5) + 1),
        );
        record.insert(
            "Работа через сток".to_string(),
            CellValue::String(through_stock.to_string()),
        );
        rows.push(record);
    }

    let dataset = Dataset::new(columns, rows);
    let output_path = "sample_parts.xlsx";
    save_file(&dataset, std::path::Path::new(output_path))?;

    println!("Wrote {} rows to {output_path}", dataset.len());
    Ok(())
}
