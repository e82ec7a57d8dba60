//! The pipeline driver: fixed-order orchestration of the five EDA stages
//! plus the final save.
//!
//! Only the load transition can abort the run. Once a table is loaded,
//! every later stage runs exactly once, whatever the previous stage
//! found; an empty report is a valid outcome, not a skip condition. A
//! failed final save is reported as a warning and the run still counts
//! as complete, since all the analysis work already happened.

use std::path::Path;

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::analyzer::SimpleAnalyzer;
use crate::charts::{ChartOutputs, Visualizer};
use crate::config::EdaConfig;
use crate::error::Result;
use crate::imputers::MeanImputer;
use crate::loader;
use crate::profiler::TableInspector;
use crate::types::RunReport;

/// Stages of the EDA pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdaStage {
    Load,
    Inspect,
    Impute,
    Analyze,
    Visualize,
    Save,
}

impl EdaStage {
    /// Human-readable stage name for logs and progress output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Load => "Loading data",
            Self::Inspect => "Inspecting table",
            Self::Impute => "Imputing missing values",
            Self::Analyze => "Running simple analysis",
            Self::Visualize => "Rendering charts",
            Self::Save => "Saving cleaned table",
        }
    }

    /// All stages in execution order.
    pub fn all() -> [EdaStage; 6] {
        [
            Self::Load,
            Self::Inspect,
            Self::Impute,
            Self::Analyze,
            Self::Visualize,
            Self::Save,
        ]
    }
}

/// The EDA pipeline: load, inspect, impute, analyze, visualize, save.
pub struct EdaPipeline {
    config: EdaConfig,
}

impl EdaPipeline {
    /// Create a pipeline with the given configuration.
    pub fn new(config: EdaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EdaConfig {
        &self.config
    }

    /// Run the full pipeline on a file path.
    ///
    /// Fails fast with [`crate::EdaError::NotFound`] or
    /// [`crate::EdaError::InvalidFormat`] before any table-dependent
    /// stage runs; no output files are written in that case.
    pub fn run(&self, path: &Path) -> Result<RunReport> {
        debug!(
            "Stage order: {}",
            EdaStage::all()
                .iter()
                .map(|s| s.display_name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        info!("{}: {}", EdaStage::Load.display_name(), path.display());
        let df = loader::load_table(path)?;
        self.process(df)
    }

    /// Run every stage after loading on an already-built table.
    ///
    /// Exposed separately so the table-dependent behavior is testable
    /// without touching the filesystem for input.
    pub fn process(&self, mut df: DataFrame) -> Result<RunReport> {
        let report_stream = self.config.report_stream;

        // Inspect
        info!("{}", EdaStage::Inspect.display_name());
        let profile = TableInspector::profile_table(&df)?;
        if report_stream {
            TableInspector::print_inspection(&df, &profile, self.config.preview_rows);
        }

        // Impute (the one in-place mutation of the table)
        info!("{}", EdaStage::Impute.display_name());
        let imputations = MeanImputer::impute(&mut df, &profile, self.config.all_missing_policy)?;
        if report_stream {
            MeanImputer::print_records(&profile, &imputations);
        }

        // Analyze
        info!("{}", EdaStage::Analyze.display_name());
        let analysis = SimpleAnalyzer::analyze(&df)?;
        if report_stream {
            SimpleAnalyzer::print_report(&analysis);
        }

        let mut warnings = Vec::new();

        // Visualize. An unusable output directory does not abort the run;
        // the charts and the save below just fail individually.
        info!("{}", EdaStage::Visualize.display_name());
        let mut charts = match std::fs::create_dir_all(&self.config.output_dir) {
            Ok(()) => match Visualizer::render(&df, &self.config) {
                Ok(charts) => charts,
                Err(e) => {
                    error!("Chart rendering failed: {}", e);
                    warnings.push(format!("Chart rendering failed: {}", e));
                    ChartOutputs::default()
                }
            },
            Err(e) => {
                error!(
                    "Failed to create output directory '{}': {}",
                    self.config.output_dir.display(),
                    e
                );
                warnings.push(format!(
                    "Failed to create output directory '{}': {}",
                    self.config.output_dir.display(),
                    e
                ));
                ChartOutputs::default()
            }
        };
        warnings.append(&mut charts.warnings);
        if report_stream {
            match &charts.histogram {
                Some(path) => println!("\nHistogram saved as '{}'", path.display()),
                None => println!("\nNo histogram generated (no numeric column or rendering failed)."),
            }
            match &charts.bar_chart {
                Some(path) => println!("Bar chart saved as '{}'", path.display()),
                None => println!("No bar chart generated (no categorical column or rendering failed)."),
            }
        }

        // Save. A write failure here is reported, not fatal: the
        // analysis above already happened.
        info!("{}", EdaStage::Save.display_name());
        let cleaned_path = self.config.cleaned_path();
        let cleaned_output = match loader::write_table(&mut df, &cleaned_path) {
            Ok(()) => {
                if report_stream {
                    println!("\nCleaned table saved as '{}'", cleaned_path.display());
                }
                Some(cleaned_path)
            }
            Err(e) => {
                error!("Failed to save cleaned table: {}", e);
                warnings.push(format!(
                    "Failed to save cleaned table to '{}': {}",
                    cleaned_path.display(),
                    e
                ));
                None
            }
        };

        Ok(RunReport {
            profile,
            imputations,
            analysis,
            histogram: charts.histogram,
            bar_chart: charts.bar_chart,
            cleaned_output,
            warnings,
        })
    }
}
