//! Configuration types for the EDA pipeline.
//!
//! This module provides configuration options using the builder pattern
//! for flexible and ergonomic pipeline setup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where rendered charts end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ChartSink {
    /// Write PNG files only. Safe in headless environments.
    #[default]
    FileOnly,
    /// Write PNG files and additionally ask the platform viewer to open
    /// them. Best-effort; failure to open is logged, never an error.
    FileAndDisplay,
}

/// Policy for numeric columns where every cell is missing and the mean is
/// therefore undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AllMissingPolicy {
    /// Leave the column untouched and record it in the run report.
    #[default]
    Leave,
    /// Fail the imputation stage with a reportable error.
    Fail,
}

/// Configuration for the EDA pipeline.
///
/// Use [`EdaConfig::builder()`] to create a new configuration with a
/// fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use eda_pipeline::config::{ChartSink, EdaConfig};
///
/// let config = EdaConfig::builder()
///     .histogram_bins(20)
///     .output_dir("outputs")
///     .chart_sink(ChartSink::FileOnly)
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdaConfig {
    /// Number of rows shown in the inspection preview.
    /// Default: 5
    pub preview_rows: usize,

    /// Number of bins for the numeric histogram.
    /// Default: 30
    pub histogram_bins: usize,

    /// Directory where all output files are written.
    /// Default: "."
    pub output_dir: PathBuf,

    /// File name for the histogram chart.
    /// Default: "histogram.png"
    pub histogram_name: String,

    /// File name for the categorical bar chart.
    /// Default: "bar_chart.png"
    pub bar_chart_name: String,

    /// File name for the cleaned (imputed) table.
    /// Default: "dados_tratados_para_powerbi.csv"
    pub cleaned_name: String,

    /// Chart output sink (file-only vs file+display).
    /// Default: FileOnly
    pub chart_sink: ChartSink,

    /// Policy for fully-missing numeric columns.
    /// Default: Leave
    pub all_missing_policy: AllMissingPolicy,

    /// Whether stages print their findings to stdout.
    /// Disabled for machine-readable output modes.
    /// Default: true
    pub report_stream: bool,
}

impl Default for EdaConfig {
    fn default() -> Self {
        Self {
            preview_rows: 5,
            histogram_bins: 30,
            output_dir: PathBuf::from("."),
            histogram_name: "histogram.png".to_string(),
            bar_chart_name: "bar_chart.png".to_string(),
            cleaned_name: "dados_tratados_para_powerbi.csv".to_string(),
            chart_sink: ChartSink::default(),
            all_missing_policy: AllMissingPolicy::default(),
            report_stream: true,
        }
    }
}

impl EdaConfig {
    /// Create a new configuration builder.
    pub fn builder() -> EdaConfigBuilder {
        EdaConfigBuilder::default()
    }

    /// Full path of the histogram file.
    pub fn histogram_path(&self) -> PathBuf {
        self.output_dir.join(&self.histogram_name)
    }

    /// Full path of the bar chart file.
    pub fn bar_chart_path(&self) -> PathBuf {
        self.output_dir.join(&self.bar_chart_name)
    }

    /// Full path of the cleaned output table.
    pub fn cleaned_path(&self) -> PathBuf {
        self.output_dir.join(&self.cleaned_name)
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.histogram_bins == 0 {
            return Err(ConfigValidationError::InvalidHistogramBins(
                self.histogram_bins,
            ));
        }
        if self.preview_rows == 0 {
            return Err(ConfigValidationError::InvalidPreviewRows(self.preview_rows));
        }
        for (field, name) in [
            ("histogram_name", &self.histogram_name),
            ("bar_chart_name", &self.bar_chart_name),
            ("cleaned_name", &self.cleaned_name),
        ] {
            if name.is_empty() {
                return Err(ConfigValidationError::EmptyFileName {
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid histogram bins: {0} (must be at least 1)")]
    InvalidHistogramBins(usize),

    #[error("Invalid preview rows: {0} (must be at least 1)")]
    InvalidPreviewRows(usize),

    #[error("File name for '{field}' must not be empty")]
    EmptyFileName { field: String },
}

/// Builder for [`EdaConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct EdaConfigBuilder {
    preview_rows: Option<usize>,
    histogram_bins: Option<usize>,
    output_dir: Option<PathBuf>,
    histogram_name: Option<String>,
    bar_chart_name: Option<String>,
    cleaned_name: Option<String>,
    chart_sink: Option<ChartSink>,
    all_missing_policy: Option<AllMissingPolicy>,
    report_stream: Option<bool>,
}

impl EdaConfigBuilder {
    /// Set the number of preview rows printed during inspection.
    pub fn preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = Some(rows);
        self
    }

    /// Set the number of histogram bins.
    pub fn histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = Some(bins);
        self
    }

    /// Set the output directory for charts and the cleaned table.
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Set the histogram file name.
    pub fn histogram_name(mut self, name: impl Into<String>) -> Self {
        self.histogram_name = Some(name.into());
        self
    }

    /// Set the bar chart file name.
    pub fn bar_chart_name(mut self, name: impl Into<String>) -> Self {
        self.bar_chart_name = Some(name.into());
        self
    }

    /// Set the cleaned output table file name.
    pub fn cleaned_name(mut self, name: impl Into<String>) -> Self {
        self.cleaned_name = Some(name.into());
        self
    }

    /// Set the chart output sink.
    pub fn chart_sink(mut self, sink: ChartSink) -> Self {
        self.chart_sink = Some(sink);
        self
    }

    /// Set the policy for fully-missing numeric columns.
    pub fn all_missing_policy(mut self, policy: AllMissingPolicy) -> Self {
        self.all_missing_policy = Some(policy);
        self
    }

    /// Enable or disable the human-readable report stream.
    pub fn report_stream(mut self, enabled: bool) -> Self {
        self.report_stream = Some(enabled);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `EdaConfig` or an error if validation fails.
    pub fn build(self) -> Result<EdaConfig, ConfigValidationError> {
        let defaults = EdaConfig::default();
        let config = EdaConfig {
            preview_rows: self.preview_rows.unwrap_or(defaults.preview_rows),
            histogram_bins: self.histogram_bins.unwrap_or(defaults.histogram_bins),
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
            histogram_name: self.histogram_name.unwrap_or(defaults.histogram_name),
            bar_chart_name: self.bar_chart_name.unwrap_or(defaults.bar_chart_name),
            cleaned_name: self.cleaned_name.unwrap_or(defaults.cleaned_name),
            chart_sink: self.chart_sink.unwrap_or_default(),
            all_missing_policy: self.all_missing_policy.unwrap_or_default(),
            report_stream: self.report_stream.unwrap_or(defaults.report_stream),
        };

        config.validate()?;
        Ok(config)
    }
}
