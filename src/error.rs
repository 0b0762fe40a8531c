use thiserror::Error;

/// Failure taxonomy for the load → filter → save pipeline.
///
/// Library functions return `anyhow::Result` and bail with one of these
/// where the classification matters, so callers can still
/// `downcast_ref::<DataError>()` on the chain.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("Column '{0}' not found in dataset")]
    MissingColumn(String),

    #[error("Workbook contains no worksheets")]
    EmptyWorkbook,

    #[error("Worksheet has no header row")]
    MissingHeader,
}
