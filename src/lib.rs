//! Linear EDA Pipeline Library
//!
//! A small exploratory data analysis (EDA) pass over a delimited text
//! file, built on Polars and plotters:
//!
//! - **Loading**: CSV into a DataFrame, header row, inferred dtypes
//! - **Inspection**: shape, per-column classification, null counts and
//!   descriptive statistics for numeric columns
//! - **Imputation**: missing numeric cells filled with the column mean
//! - **Simple analysis**: mean of the first numeric column, value
//!   frequencies of the first categorical column
//! - **Visualization**: histogram and bar chart written as PNG files
//! - **Persistence**: the imputed table written back out as CSV
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use eda_pipeline::{EdaConfig, EdaPipeline};
//! use std::path::Path;
//!
//! let config = EdaConfig::builder()
//!     .output_dir("outputs")
//!     .histogram_bins(30)
//!     .build()?;
//!
//! let report = EdaPipeline::new(config).run(Path::new("data.csv"))?;
//! println!("Imputed {} cells", report.cells_imputed());
//! ```
//!
//! The pipeline is strictly sequential: once the table loads, every
//! stage runs exactly once. Only a missing input file or unparsable
//! content abort a run.

pub mod analyzer;
pub mod charts;
pub mod config;
pub mod error;
pub mod imputers;
pub mod loader;
pub mod pipeline;
pub mod profiler;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use analyzer::SimpleAnalyzer;
pub use charts::{ChartError, ChartOutputs, Visualizer};
pub use config::{
    AllMissingPolicy, ChartSink, ConfigValidationError, EdaConfig, EdaConfigBuilder,
};
pub use error::{EdaError, Result as EdaResult, ResultExt};
pub use imputers::MeanImputer;
pub use loader::{load_table, write_table};
pub use pipeline::{EdaPipeline, EdaStage};
pub use profiler::TableInspector;
pub use types::{
    AnalysisReport, CategoricalFrequencies, ColumnKind, ColumnProfile, FrequencyEntry,
    ImputationRecord, NumericMean, NumericSummary, RunReport, TableProfile,
};
pub use utils::{column_kind, first_column_of_kind, is_numeric_dtype};
