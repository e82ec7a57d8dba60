use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Classification of a column, decided once at profile time and carried
/// as static metadata from then on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    /// Integer or floating point column. Eligible for imputation,
    /// descriptive statistics and the histogram.
    Numeric,
    /// Text-like column. Eligible for frequency counting and the bar chart.
    Categorical,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Categorical => "categorical",
        }
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-column metadata gathered during inspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    pub dtype: String,
    pub kind: ColumnKind,
    pub null_count: usize,
    pub null_percentage: f64,
    pub non_null_count: usize,
}

/// Descriptive statistics for a numeric column: count, mean, standard
/// deviation, min, quartiles and max.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Structure-level view of a loaded table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableProfile {
    /// (rows, columns)
    pub shape: (usize, usize),
    pub columns: Vec<ColumnProfile>,
    /// One summary per numeric column, in original column order.
    pub numeric_summaries: Vec<NumericSummary>,
}

impl TableProfile {
    /// Profile of the first column of the given kind, in original order.
    pub fn first_of_kind(&self, kind: ColumnKind) -> Option<&ColumnProfile> {
        self.columns.iter().find(|c| c.kind == kind)
    }
}

/// Record of what mean imputation did to one numeric column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImputationRecord {
    pub column: String,
    pub missing_before: usize,
    pub missing_after: usize,
    /// The mean that replaced missing cells. `None` when the column was
    /// fully missing and left untouched.
    pub fill_value: Option<f64>,
}

/// One distinct value and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub value: String,
    pub count: usize,
}

/// Mean of the first numeric column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericMean {
    pub column: String,
    pub mean: f64,
}

/// Frequency table of the first categorical column, ordered by
/// descending count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalFrequencies {
    pub column: String,
    pub frequencies: Vec<FrequencyEntry>,
}

/// Output of the simple analysis stage. A `None` side means the table has
/// no column of that class; that is a reportable outcome, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub numeric: Option<NumericMean>,
    pub categorical: Option<CategoricalFrequencies>,
}

/// Aggregate result of a full pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub profile: TableProfile,
    pub imputations: Vec<ImputationRecord>,
    pub analysis: AnalysisReport,
    /// Path of the rendered histogram, if a numeric column existed and
    /// rendering succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histogram: Option<PathBuf>,
    /// Path of the rendered bar chart, if a categorical column existed and
    /// rendering succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_chart: Option<PathBuf>,
    /// Path of the cleaned output table. `None` when the final save failed;
    /// the failure itself lands in `warnings`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleaned_output: Option<PathBuf>,
    /// Non-fatal problems encountered along the way.
    pub warnings: Vec<String>,
}

impl RunReport {
    /// Total missing cells filled across all numeric columns.
    pub fn cells_imputed(&self) -> usize {
        self.imputations
            .iter()
            .map(|r| r.missing_before - r.missing_after)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_kind_display() {
        assert_eq!(ColumnKind::Numeric.to_string(), "numeric");
        assert_eq!(ColumnKind::Categorical.to_string(), "categorical");
    }

    #[test]
    fn test_first_of_kind_respects_column_order() {
        let profile = TableProfile {
            shape: (3, 3),
            columns: vec![
                ColumnProfile {
                    name: "city".to_string(),
                    dtype: "String".to_string(),
                    kind: ColumnKind::Categorical,
                    null_count: 0,
                    null_percentage: 0.0,
                    non_null_count: 3,
                },
                ColumnProfile {
                    name: "age".to_string(),
                    dtype: "Int64".to_string(),
                    kind: ColumnKind::Numeric,
                    null_count: 1,
                    null_percentage: 33.3,
                    non_null_count: 2,
                },
                ColumnProfile {
                    name: "salary".to_string(),
                    dtype: "Float64".to_string(),
                    kind: ColumnKind::Numeric,
                    null_count: 0,
                    null_percentage: 0.0,
                    non_null_count: 3,
                },
            ],
            numeric_summaries: Vec::new(),
        };

        assert_eq!(profile.first_of_kind(ColumnKind::Numeric).unwrap().name, "age");
        assert_eq!(
            profile.first_of_kind(ColumnKind::Categorical).unwrap().name,
            "city"
        );
    }

    #[test]
    fn test_cells_imputed() {
        let report = RunReport {
            profile: TableProfile {
                shape: (0, 0),
                columns: Vec::new(),
                numeric_summaries: Vec::new(),
            },
            imputations: vec![
                ImputationRecord {
                    column: "a".to_string(),
                    missing_before: 3,
                    missing_after: 0,
                    fill_value: Some(2.0),
                },
                ImputationRecord {
                    column: "b".to_string(),
                    missing_before: 2,
                    missing_after: 2,
                    fill_value: None,
                },
            ],
            analysis: AnalysisReport {
                numeric: None,
                categorical: None,
            },
            histogram: None,
            bar_chart: None,
            cleaned_output: None,
            warnings: Vec::new(),
        };

        assert_eq!(report.cells_imputed(), 3);
    }
}
