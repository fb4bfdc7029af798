//! Error types for the evaluation pipeline.

use intrinsic_data::DataError;
use intrinsic_output::{ExportError, ReportError};
use intrinsic_valuation::ValuationError;
use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur while evaluating and reporting stocks.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Snapshot loading or date handling failed
    #[error(transparent)]
    Data(#[from] DataError),

    /// Valuation failed
    #[error(transparent)]
    Valuation(#[from] ValuationError),

    /// Report could not be written
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Batch export failed
    #[error(transparent)]
    Export(#[from] ExportError),
}
