//! Error types for data loading.

use thiserror::Error;

/// Errors surfaced by the CSV loaders.
///
/// Callers never see a panic from this crate; a failed load becomes one of
/// these variants and is rendered as inline error text by the UI.
#[derive(Error, Debug)]
pub enum DataError {
    /// The fetched resource had no content at all.
    #[error("no data loaded")]
    Empty,

    /// Rows were present but none survived validation.
    #[error("no valid data after transformation")]
    NoValidRows,

    /// The CSV reader itself failed.
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A demographic name outside the four tracked categories.
    #[error("unknown demographic: {0}")]
    UnknownDemographic(String),
}
