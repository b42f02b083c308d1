//! Error types for loading and metric computation.

use thiserror::Error;

/// Result type for workforce operations.
pub type Result<T> = std::result::Result<T, WorkforceError>;

/// Errors that can occur while loading data or computing metrics.
///
/// Bad cell values never show up here: unparseable dates and numbers are
/// recovered as missing values during normalization.
#[derive(Debug, Error)]
pub enum WorkforceError {
    /// Missing required column in input data
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Year outside the reporting window or not a year at all
    #[error("Invalid year: {0} (expected \"all\" or a year between 2020 and 2025)")]
    InvalidYear(String),

    /// Month label that is neither "All" nor a month name
    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    /// Metric cannot be computed because source columns are absent
    #[error("Metric {metric} unavailable, missing columns: {}", missing.join(", "))]
    Unavailable {
        /// Metric name
        metric: String,
        /// Source columns the dataset does not provide
        missing: Vec<String>,
    },

    /// Polars DataFrame error
    #[error("DataFrame error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Metric not found in registry
    #[error("Metric not found: {0}")]
    NotFound(String),
}
