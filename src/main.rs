//! CLI entry point for the EDA pipeline.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use eda_pipeline::{ChartSink, EdaConfig, EdaPipeline, RunReport};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Linear exploratory data analysis over a delimited text file",
    long_about = "Loads a CSV file, summarizes its shape and column types, fills\n\
                  missing numeric values with the column mean, reports simple\n\
                  statistics, renders a histogram and a bar chart, and writes the\n\
                  cleaned table back out as CSV.\n\n\
                  EXAMPLES:\n  \
                  # Analyze a file, writing outputs next to it\n  \
                  eda-pipeline data.csv\n\n  \
                  # Prompt for the path interactively\n  \
                  eda-pipeline\n\n  \
                  # Machine-readable report\n  \
                  eda-pipeline data.csv --json"
)]
struct Args {
    /// Path to the CSV file to analyze. Prompted on stdin when omitted.
    input: Option<PathBuf>,

    /// Output directory for charts and the cleaned table
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Number of histogram bins
    #[arg(long, default_value = "30")]
    bins: usize,

    /// Number of preview rows printed during inspection
    #[arg(long, default_value = "5")]
    preview_rows: usize,

    /// Open rendered charts in the platform viewer (best-effort)
    #[arg(long)]
    display: bool,

    /// Output the run report as JSON to stdout instead of the
    /// human-readable report stream
    ///
    /// Disables all logging; only the JSON report is written to stdout.
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress logs (only show warnings and errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Read the input path from stdin, as a single interactive prompt.
fn prompt_for_path() -> Result<PathBuf> {
    print!("Path to the CSV file to analyze (e.g. titanic.csv): ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Err(anyhow!("No input path provided"));
    }
    Ok(PathBuf::from(trimmed))
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    let input = match args.input.clone() {
        Some(path) => path,
        None => prompt_for_path()?,
    };

    let config = EdaConfig::builder()
        .output_dir(&args.output)
        .histogram_bins(args.bins)
        .preview_rows(args.preview_rows)
        .chart_sink(if args.display {
            ChartSink::FileAndDisplay
        } else {
            ChartSink::FileOnly
        })
        .report_stream(!args.json)
        .build()?;

    let pipeline = EdaPipeline::new(config);

    info!("Starting exploratory data analysis of '{}'", input.display());

    let report = match pipeline.run(&input) {
        Ok(report) => report,
        Err(e) if e.is_fatal_load_error() => {
            // Missing file / unparsable content: diagnostic, no crash.
            error!("Could not load '{}': {}", input.display(), e);
            return Err(anyhow!("EDA run failed [{}]: {}", e.error_code(), e));
        }
        Err(e) => {
            error!("{}", e);
            return Err(anyhow!("EDA run failed [{}]: {}", e.error_code(), e));
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_summary(&report);
    Ok(())
}

/// Print a closing summary of the run.
fn print_summary(report: &RunReport) {
    println!();
    println!("{}", "=".repeat(70));
    println!("EDA COMPLETE");
    println!("{}", "=".repeat(70));
    println!(
        "Table: {} rows x {} columns",
        report.profile.shape.0, report.profile.shape.1
    );
    println!("Missing cells imputed: {}", report.cells_imputed());

    if let Some(ref path) = report.cleaned_output {
        println!("Cleaned table: {}", path.display());
    }
    if let Some(ref path) = report.histogram {
        println!("Histogram: {}", path.display());
    }
    if let Some(ref path) = report.bar_chart {
        println!("Bar chart: {}", path.display());
    }

    if !report.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &report.warnings {
            println!("  ! {}", warning);
        }
    }
    println!("{}", "=".repeat(70));
}
