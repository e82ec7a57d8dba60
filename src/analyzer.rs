//! Simple analysis: mean of the first numeric column and value
//! frequencies of the first categorical column.

use std::collections::HashMap;

use polars::prelude::*;

use crate::error::Result;
use crate::types::{
    AnalysisReport, CategoricalFrequencies, ColumnKind, FrequencyEntry, NumericMean,
};
use crate::utils::first_column_of_kind;

/// Computes the two headline findings of the pipeline.
pub struct SimpleAnalyzer;

impl SimpleAnalyzer {
    /// Analyze the first numeric and first categorical columns, in
    /// original column order. A missing class on either side yields
    /// `None`; it never fails the stage.
    pub fn analyze(df: &DataFrame) -> Result<AnalysisReport> {
        let numeric = match first_column_of_kind(df, ColumnKind::Numeric) {
            Some(series) => series.mean().map(|mean| NumericMean {
                column: series.name().to_string(),
                mean,
            }),
            None => None,
        };

        let categorical = match first_column_of_kind(df, ColumnKind::Categorical) {
            Some(series) => Some(CategoricalFrequencies {
                column: series.name().to_string(),
                frequencies: value_frequencies(series)?,
            }),
            None => None,
        };

        Ok(AnalysisReport {
            numeric,
            categorical,
        })
    }

    /// Print the analysis findings to the report stream.
    pub fn print_report(report: &AnalysisReport) {
        println!("\n--- Simple analysis ---");

        match &report.numeric {
            Some(n) => println!("\nMean of column '{}': {:.2}", n.column, n.mean),
            None => println!("\nNo numeric column to compute a mean from."),
        }

        match &report.categorical {
            Some(c) => {
                println!("\nValue counts for column '{}':", c.column);
                for entry in &c.frequencies {
                    println!("{:<24} {}", entry.value, entry.count);
                }
            }
            None => println!("\nNo categorical column to count values in."),
        }
    }
}

/// Frequency table of the present values of a column, ordered by
/// descending count. Ties keep first-appearance order.
pub fn value_frequencies(series: &Series) -> Result<Vec<FrequencyEntry>> {
    let str_series = series.cast(&DataType::String)?;
    let chunked = str_series.str()?;

    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    let mut order = 0usize;
    for val in chunked.into_iter().flatten() {
        let entry = counts.entry(val.to_string()).or_insert_with(|| {
            let first_seen = order;
            order += 1;
            (0, first_seen)
        });
        entry.0 += 1;
    }

    let mut entries: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(value, (count, first_seen))| (value, count, first_seen))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    Ok(entries
        .into_iter()
        .map(|(value, count, _)| FrequencyEntry { value, count })
        .collect())
}
