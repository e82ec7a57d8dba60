//! Missing-value imputation.
//!
//! This pipeline only performs mean substitution on numeric columns;
//! categorical missingness is reported by the profiler but left untouched.

mod mean;

pub use mean::MeanImputer;
