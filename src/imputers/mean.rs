//! Mean imputation for numeric columns.

use polars::prelude::*;
use tracing::{debug, warn};

use crate::config::AllMissingPolicy;
use crate::error::{EdaError, Result};
use crate::types::{ColumnKind, ImputationRecord, TableProfile};
use crate::utils::fill_numeric_nulls;

/// Fills missing numeric cells with the per-column arithmetic mean.
pub struct MeanImputer;

impl MeanImputer {
    /// Impute every numeric column that has at least one missing cell,
    /// mutating the table in place.
    ///
    /// The mean is computed once over the present values, before any
    /// replacement, so the column mean is preserved by the fill. Columns
    /// without missing cells are untouched, which keeps imputation a
    /// strict no-op on complete tables. A fully-missing column has no
    /// defined mean; `policy` decides whether it is left as-is (recorded
    /// with `fill_value: None`) or fails the stage.
    pub fn impute(
        df: &mut DataFrame,
        profile: &TableProfile,
        policy: AllMissingPolicy,
    ) -> Result<Vec<ImputationRecord>> {
        let mut records = Vec::new();

        for col_profile in &profile.columns {
            if col_profile.kind != ColumnKind::Numeric || col_profile.null_count == 0 {
                continue;
            }

            let name = col_profile.name.as_str();
            let series = df.column(name)?.as_materialized_series().clone();

            let Some(mean) = series.mean() else {
                // Every cell missing: mean undefined.
                match policy {
                    AllMissingPolicy::Leave => {
                        warn!("Column '{}' is fully missing; leaving untouched", name);
                        records.push(ImputationRecord {
                            column: name.to_string(),
                            missing_before: col_profile.null_count,
                            missing_after: col_profile.null_count,
                            fill_value: None,
                        });
                        continue;
                    }
                    AllMissingPolicy::Fail => {
                        return Err(EdaError::AllMissing {
                            column: name.to_string(),
                        });
                    }
                }
            };

            let filled = fill_numeric_nulls(&series, mean)?;
            let missing_after = filled.null_count();
            df.replace(name, filled)?;

            debug!(
                "Filled {} missing cells in '{}' with mean {:.4}",
                col_profile.null_count, name, mean
            );

            records.push(ImputationRecord {
                column: name.to_string(),
                missing_before: col_profile.null_count,
                missing_after,
                fill_value: Some(mean),
            });
        }

        Ok(records)
    }

    /// Print the before/after missing counts for the report stream. Both
    /// tables cover every column, not just the imputed ones.
    pub fn print_records(profile: &TableProfile, records: &[ImputationRecord]) {
        println!("\n--- Missing values per column (before treatment) ---");
        for col in &profile.columns {
            println!("{:<24} {}", col.name, col.null_count);
        }

        if records.is_empty() {
            println!("\nNo numeric columns required imputation.");
        } else {
            println!("\nNumeric columns filled with their mean:");
            for rec in records {
                match rec.fill_value {
                    Some(mean) => println!(
                        "{:<24} {} -> {} missing (filled with {:.2})",
                        rec.column, rec.missing_before, rec.missing_after, mean
                    ),
                    None => println!(
                        "{:<24} {} missing (fully missing, left untouched)",
                        rec.column, rec.missing_before
                    ),
                }
            }
        }

        println!("\n--- Missing values per column (after treatment) ---");
        for (name, missing) in remaining_missing(profile, records) {
            println!("{:<24} {}", name, missing);
        }
    }
}

/// Per-column missing counts after imputation, in original column order.
/// Columns without an imputation record kept their pre-treatment count.
fn remaining_missing(
    profile: &TableProfile,
    records: &[ImputationRecord],
) -> Vec<(String, usize)> {
    profile
        .columns
        .iter()
        .map(|col| {
            let after = records
                .iter()
                .find(|r| r.column == col.name)
                .map_or(col.null_count, |r| r.missing_after);
            (col.name.clone(), after)
        })
        .collect()
}
