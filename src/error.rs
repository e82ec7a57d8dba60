//! Custom error types for the EDA pipeline.
//!
//! Only two conditions are fatal to a run: a missing input file and content
//! that cannot be parsed as a delimited table. Everything else (missing
//! column classes, chart backend failures, a failed final save) is reported
//! and the run continues.

use std::path::PathBuf;

use thiserror::Error;

use crate::charts::ChartError;

/// The main error type for the EDA pipeline.
#[derive(Error, Debug)]
pub enum EdaError {
    /// Input path does not exist on the filesystem.
    #[error("Input file not found: {path}")]
    NotFound { path: PathBuf },

    /// Input exists but is not a valid delimited table.
    #[error("File '{path}' is not a valid delimited table: {reason}")]
    InvalidFormat { path: PathBuf, reason: String },

    /// Loaded table has no columns at all.
    #[error("Loaded table has no columns")]
    EmptyTable,

    /// A numeric column contains no present values, so its mean is undefined.
    #[error("Column '{column}' has no present values to compute a mean from")]
    AllMissing { column: String },

    /// Chart rendering failed.
    #[error("Chart rendering failed: {0}")]
    Chart(#[from] ChartError),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<EdaError>,
    },
}

impl EdaError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        EdaError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Stable error code, e.g. for machine-readable output.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::InvalidFormat { .. } => "INVALID_FORMAT",
            Self::EmptyTable => "EMPTY_TABLE",
            Self::AllMissing { .. } => "ALL_MISSING",
            Self::Chart(_) => "CHART_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// True for the two conditions that abort the pipeline before any
    /// table-dependent stage runs.
    pub fn is_fatal_load_error(&self) -> bool {
        match self {
            Self::NotFound { .. } | Self::InvalidFormat { .. } | Self::EmptyTable => true,
            Self::WithContext { source, .. } => source.is_fatal_load_error(),
            _ => false,
        }
    }
}

/// Result type alias for EDA operations.
pub type Result<T> = std::result::Result<T, EdaError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| EdaError::Polars(e).with_context(context))
    }
}
