use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use rowsieve::config::{
    DEFAULT_FILTER_COLUMN, DEFAULT_FILTER_VALUE, DEFAULT_OUTPUT, DEFAULT_ROW_LIMIT, FilterJob,
};

/// Filter a tabular file by column value and export the first N matches.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file (.xlsx, .xls, .ods, .csv, .json or .parquet).
    input: PathBuf,

    /// Output file; format follows the extension.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Column whose value decides whether a row is kept.
    #[arg(short, long, default_value = DEFAULT_FILTER_COLUMN)]
    column: String,

    /// Literal the column must equal.
    #[arg(short, long, default_value = DEFAULT_FILTER_VALUE)]
    value: String,

    /// Keep at most this many matching rows (first matches, file order).
    #[arg(short, long, default_value_t = DEFAULT_ROW_LIMIT)]
    limit: usize,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let job = FilterJob {
        input_path: args.input,
        output_path: args.output,
        filter_column: args.column,
        filter_value: args.value,
        row_limit: args.limit,
    };

    rowsieve::run_job(&job)?;
    println!(
        "Filtered data has been saved to {}",
        job.output_path.display()
    );
    Ok(())
}
