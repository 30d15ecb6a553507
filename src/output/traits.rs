//! Output handler traits and error types

use crate::model::EnrichedCompany;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// A sink for enriched companies
///
/// Handlers may buffer; `finish` must be called to flush everything written.
pub trait OutputHandler {
    /// Writes a batch of companies
    fn write_companies(&mut self, companies: &[EnrichedCompany]) -> OutputResult<()>;

    /// Flushes buffered output
    fn finish(&mut self) -> OutputResult<()>;

    /// Number of rows written so far
    fn rows_written(&self) -> usize;
}
