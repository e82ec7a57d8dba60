//! Shared helpers for working with polars columns.

use polars::prelude::*;

use crate::types::ColumnKind;

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Classify a column by its dtype. Everything that is not numeric is
/// treated as categorical for the purposes of this pipeline.
pub fn column_kind(dtype: &DataType) -> ColumnKind {
    if is_numeric_dtype(dtype) {
        ColumnKind::Numeric
    } else {
        ColumnKind::Categorical
    }
}

/// First column of the given kind, in original column order.
pub fn first_column_of_kind(df: &DataFrame, kind: ColumnKind) -> Option<&Series> {
    df.get_columns()
        .iter()
        .map(|c| c.as_materialized_series())
        .find(|s| column_kind(s.dtype()) == kind)
}

/// Collect the present (non-null) values of a column as f64, preserving
/// row order.
pub fn collect_present_f64(series: &Series) -> PolarsResult<Vec<f64>> {
    let float_series = series.cast(&DataType::Float64)?;
    Ok(float_series.f64()?.into_iter().flatten().collect())
}

/// Fill null cells in a numeric Series with a specific value. The result
/// is always Float64 since the fill value is fractional in general.
pub fn fill_numeric_nulls(series: &Series, fill_value: f64) -> PolarsResult<Series> {
    let mask = series.is_null();
    let len = series.len();
    let mut result_vec = Vec::with_capacity(len);

    for i in 0..len {
        if mask.get(i).unwrap_or(false) {
            result_vec.push(Some(fill_value));
        } else {
            let val = series.get(i)?;
            result_vec.push(Some(val.try_extract::<f64>()?));
        }
    }

    Ok(Series::new(series.name().clone(), result_vec))
}
