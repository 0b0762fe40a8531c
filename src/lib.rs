//! `rowsieve` loads a tabular dataset, keeps the first N rows whose cell in
//! a chosen column equals a chosen literal, and writes them to a new file.
//!
//! The pipeline is strictly sequential: load → filter → save, with each file
//! handle scoped to its own step.

use anyhow::Result;
use log::info;

pub mod config;
pub mod data;
pub mod error;

use config::FilterJob;
use data::{filter::filter_equals, loader::load_file, writer::save_file};

/// Run one filter-and-export job.  Returns the number of rows written
/// (excluding the header).  Nothing is written when load or filter fails.
pub fn run_job(job: &FilterJob) -> Result<usize> {
    let dataset = load_file(&job.input_path)?;
    info!(
        "loaded {} rows from {}",
        dataset.len(),
        job.input_path.display()
    );

    let filtered = filter_equals(&dataset, &job.filter_column, &job.filter_value, job.row_limit)?;
    info!(
        "{} rows match {} == {:?} (limit {})",
        filtered.len(),
        job.filter_column,
        job.filter_value,
        job.row_limit
    );

    save_file(&filtered, &job.output_path)?;
    info!("wrote {}", job.output_path.display());
    Ok(filtered.len())
}
