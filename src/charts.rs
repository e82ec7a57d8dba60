//! Chart rendering for the visualization stage.
//!
//! Uses the [`plotters`] bitmap backend so rendering works headless;
//! charts are written as fixed 1200x800 PNG files. An optional display
//! sink can additionally hand the file to the platform viewer, but that
//! is best-effort and never fails the stage.

use std::path::{Path, PathBuf};
use std::process::Command;

use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::prelude::*;
use polars::prelude::DataFrame;
use thiserror::Error;
use tracing::{info, warn};

use crate::analyzer::value_frequencies;
use crate::config::{ChartSink, EdaConfig};
use crate::types::{ColumnKind, FrequencyEntry};
use crate::utils::{collect_present_f64, first_column_of_kind};

/// Errors that can occur during chart generation.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, ChartError>;

const CHART_SIZE: (u32, u32) = (1200, 800);

/// skyblue
const BAR_COLOR: RGBColor = RGBColor(135, 206, 235);

/// Paths of the charts actually rendered, plus non-fatal problems hit
/// along the way.
#[derive(Debug, Default)]
pub struct ChartOutputs {
    pub histogram: Option<PathBuf>,
    pub bar_chart: Option<PathBuf>,
    pub warnings: Vec<String>,
}

/// Renders the two charts of the pipeline.
pub struct Visualizer;

impl Visualizer {
    /// Render a histogram for the first numeric column and a bar chart
    /// for the first categorical column, writing PNG files under the
    /// configured output directory.
    ///
    /// Absence of a qualifying column skips that chart. A rendering
    /// failure (e.g. no fonts available) is downgraded to a warning so a
    /// headless run still completes the remaining stages.
    pub fn render(df: &DataFrame, config: &EdaConfig) -> crate::error::Result<ChartOutputs> {
        let mut outputs = ChartOutputs::default();

        if let Some(series) = first_column_of_kind(df, ColumnKind::Numeric) {
            let values = collect_present_f64(series)?;
            let path = config.histogram_path();
            match render_histogram(&values, series.name().as_str(), config.histogram_bins, &path) {
                Ok(()) => {
                    info!("Histogram saved to '{}'", path.display());
                    maybe_display(&path, config.chart_sink);
                    outputs.histogram = Some(path);
                }
                Err(e) => {
                    warn!("Histogram rendering failed: {}", e);
                    outputs
                        .warnings
                        .push(format!("Histogram rendering failed: {}", e));
                }
            }
        }

        if let Some(series) = first_column_of_kind(df, ColumnKind::Categorical) {
            let frequencies = value_frequencies(series)?;
            let path = config.bar_chart_path();
            match render_bar_chart(&frequencies, series.name().as_str(), &path) {
                Ok(()) => {
                    info!("Bar chart saved to '{}'", path.display());
                    maybe_display(&path, config.chart_sink);
                    outputs.bar_chart = Some(path);
                }
                Err(e) => {
                    warn!("Bar chart rendering failed: {}", e);
                    outputs
                        .warnings
                        .push(format!("Bar chart rendering failed: {}", e));
                }
            }
        }

        Ok(outputs)
    }
}

/// Creates a histogram of the given values and saves it as a PNG file.
///
/// Bins span the value range evenly; values landing on the upper edge go
/// into the last bin. The column name is used for the title and x-axis.
pub fn render_histogram(
    values: &[f64],
    column: &str,
    bins: usize,
    output_path: &Path,
) -> Result<()> {
    let bars = histogram_bins(values, bins)?;

    let x_min = bars[0].0;
    let x_max = bars[bars.len() - 1].1;
    let y_max = bars.iter().map(|b| b.2).max().unwrap_or(1).max(1);
    let y_max = y_max + y_max / 10 + 1;

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Histogram of {}", column), ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, 0u32..y_max)
        .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(column)
        .y_desc("Frequency")
        .label_style(("sans-serif", 25))
        .draw()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    chart
        .draw_series(
            bars.iter()
                .map(|&(lo, hi, count)| Rectangle::new([(lo, 0), (hi, count)], BAR_COLOR.filled())),
        )
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    // Bin edges, for readability of adjacent bars.
    chart
        .draw_series(
            bars.iter()
                .map(|&(lo, hi, count)| Rectangle::new([(lo, 0), (hi, count)], BLACK.stroke_width(1))),
        )
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    Ok(())
}

/// Creates a bar chart of value counts and saves it as a PNG file.
///
/// Bars are drawn in the order given (descending counts from the
/// analyzer); category labels are rotated for legibility.
pub fn render_bar_chart(
    frequencies: &[FrequencyEntry],
    column: &str,
    output_path: &Path,
) -> Result<()> {
    if frequencies.is_empty() {
        return Err(ChartError::InvalidData(
            "No values to chart".to_string(),
        ));
    }

    let n = frequencies.len() as i32;
    let y_max = frequencies.iter().map(|f| f.count).max().unwrap_or(1) as u32;
    let y_max = y_max + y_max / 10 + 1;

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Value counts of {}", column), ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(140)
        .y_label_area_size(80)
        .build_cartesian_2d((0..n).into_segmented(), 0u32..y_max)
        .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(column)
        .y_desc("Count")
        .x_labels(frequencies.len())
        .x_label_style(
            ("sans-serif", 20)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .x_label_formatter(&|seg| {
            let idx = match seg {
                SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => *i,
                SegmentValue::Last => return String::new(),
            };
            frequencies
                .get(idx as usize)
                .map(|f| f.value.clone())
                .unwrap_or_default()
        })
        .label_style(("sans-serif", 25))
        .draw()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    chart
        .draw_series(frequencies.iter().enumerate().map(|(i, f)| {
            let i = i as i32;
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0u32),
                    (SegmentValue::Exact(i + 1), f.count as u32),
                ],
                BAR_COLOR.filled(),
            );
            bar.set_margin(0, 0, 5, 5);
            bar
        }))
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    Ok(())
}

/// Bucket values into `bins` evenly-spaced bins over their range.
///
/// Returns `(lower_edge, upper_edge, count)` per bin. A degenerate range
/// (all values equal) is widened so the single spike is still drawable.
pub(crate) fn histogram_bins(values: &[f64], bins: usize) -> Result<Vec<(f64, f64, u32)>> {
    if values.is_empty() {
        return Err(ChartError::InvalidData(
            "No values to build a histogram from".to_string(),
        ));
    }
    if bins == 0 {
        return Err(ChartError::InvalidData(
            "Histogram needs at least one bin".to_string(),
        ));
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (min, max) = if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };

    let width = (max - min) / bins as f64;
    let mut counts = vec![0u32; bins];
    for &v in values {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Ok(counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let lo = min + i as f64 * width;
            (lo, lo + width, count)
        })
        .collect())
}

/// Hand a rendered chart to the platform viewer when the sink asks for
/// it. Best-effort: failure is logged and swallowed.
fn maybe_display(path: &Path, sink: ChartSink) {
    if sink != ChartSink::FileAndDisplay {
        return;
    }

    #[cfg(target_os = "macos")]
    const OPENER: &str = "open";
    #[cfg(target_os = "windows")]
    const OPENER: &str = "explorer";
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    const OPENER: &str = "xdg-open";

    if let Err(e) = Command::new(OPENER).arg(path).spawn() {
        warn!("Could not open '{}' in a viewer: {}", path.display(), e);
    }
}
