//! Descriptive statistics for numeric columns.

use polars::prelude::*;

use crate::error::Result;
use crate::types::NumericSummary;
use crate::utils::collect_present_f64;

/// Compute count, mean, std, min, quartiles and max over the present
/// values of a numeric column. Returns `None` when the column has no
/// present values (all cells missing).
pub(crate) fn describe_numeric(series: &Series) -> Result<Option<NumericSummary>> {
    let mut values = collect_present_f64(series)?;
    if values.is_empty() {
        return Ok(None);
    }

    values.sort_by(|a, b| a.total_cmp(b));

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let std = sample_std(&values, mean);

    Ok(Some(NumericSummary {
        column: series.name().to_string(),
        count,
        mean,
        std,
        min: values[0],
        q1: quantile_sorted(&values, 0.25),
        median: quantile_sorted(&values, 0.5),
        q3: quantile_sorted(&values, 0.75),
        max: values[count - 1],
    }))
}

/// Sample standard deviation (n - 1 denominator). Zero for fewer than
/// two values.
pub(crate) fn sample_std(values: &[f64], mean: f64) -> f64 {
    let n = values.len() as f64;
    if n <= 1.0 {
        return 0.0;
    }

    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

/// Quantile of an ascending-sorted slice using linear interpolation
/// between the two nearest ranks.
pub(crate) fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    debug_assert!((0.0..=1.0).contains(&q));

    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let rank = q * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;

    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
