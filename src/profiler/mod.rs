//! Table inspection: shape, per-column classification and descriptive
//! statistics.
//!
//! Profiling is where each column's [`ColumnKind`] is decided, once, from
//! the dtype the loader inferred. Every later stage (imputation, analysis,
//! charts) consumes that classification instead of re-inspecting dtypes.

mod statistics;

use polars::prelude::*;

use crate::error::Result;
use crate::types::{ColumnKind, ColumnProfile, TableProfile};
use crate::utils::column_kind;

pub(crate) use statistics::describe_numeric;

/// Table profiler.
pub struct TableInspector;

impl TableInspector {
    /// Profile every column of the table: kind, null counts and (for
    /// numeric columns) descriptive statistics.
    pub fn profile_table(df: &DataFrame) -> Result<TableProfile> {
        let height = df.height();
        let mut columns = Vec::with_capacity(df.width());
        let mut numeric_summaries = Vec::new();

        for col in df.get_columns() {
            let series = col.as_materialized_series();
            let kind = column_kind(series.dtype());
            let null_count = series.null_count();
            let null_percentage = if height > 0 {
                (null_count as f64 / height as f64) * 100.0
            } else {
                0.0
            };

            if kind == ColumnKind::Numeric
                && let Some(summary) = describe_numeric(series)?
            {
                numeric_summaries.push(summary);
            }

            columns.push(ColumnProfile {
                name: series.name().to_string(),
                dtype: format!("{:?}", series.dtype()),
                kind,
                null_count,
                null_percentage,
                non_null_count: height - null_count,
            });
        }

        Ok(TableProfile {
            shape: df.shape(),
            columns,
            numeric_summaries,
        })
    }

    /// Print the inspection report: first N rows, per-column type and
    /// non-null count, and descriptive statistics for numeric columns.
    ///
    /// Uses `println!` intentionally: this is the user-facing report
    /// stream, always visible regardless of log level.
    pub fn print_inspection(df: &DataFrame, profile: &TableProfile, preview_rows: usize) {
        println!("\n--- First {} rows ---", preview_rows);
        println!("{}", df.head(Some(preview_rows)));

        println!("\n--- Columns ---");
        println!(
            "{:<24} {:<12} {:<12} {:>9} {:>10}",
            "Column", "Dtype", "Kind", "Non-null", "Missing %"
        );
        println!("{}", "-".repeat(70));
        for col in &profile.columns {
            println!(
                "{:<24} {:<12} {:<12} {:>9} {:>9.1}%",
                col.name, col.dtype, col.kind, col.non_null_count, col.null_percentage
            );
        }

        println!("\n--- Descriptive statistics (numeric columns) ---");
        if profile.numeric_summaries.is_empty() {
            println!("No numeric columns.");
            return;
        }

        println!(
            "{:<24} {:>7} {:>11} {:>11} {:>11} {:>11} {:>11} {:>11} {:>11}",
            "Column", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
        );
        println!("{}", "-".repeat(114));
        for s in &profile.numeric_summaries {
            println!(
                "{:<24} {:>7} {:>11.4} {:>11.4} {:>11.4} {:>11.4} {:>11.4} {:>11.4} {:>11.4}",
                s.column, s.count, s.mean, s.std, s.min, s.q1, s.median, s.q3, s.max
            );
        }
    }
}
