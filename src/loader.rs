//! Loading delimited files into DataFrames and writing them back out.
//!
//! The loader is the only place where the two fatal conditions of the
//! pipeline are raised: [`EdaError::NotFound`] when the path does not
//! exist, and [`EdaError::InvalidFormat`] when the content cannot be read
//! as a delimited table with a header row.

use std::fs::File;
use std::path::Path;

use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use tracing::{debug, info};

use crate::error::{EdaError, Result};

/// How many rows the CSV reader samples to infer column dtypes.
const INFER_SCHEMA_ROWS: usize = 100;

/// Load a delimited file into a DataFrame.
///
/// The first row is taken as column headers. Column dtypes are inferred by
/// the reader; this inference is what later drives the numeric/categorical
/// classification.
pub fn load_table(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(EdaError::NotFound {
            path: path.to_path_buf(),
        });
    }

    debug!("Reading delimited file: {}", path.display());

    let df = CsvReadOptions::default()
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|e| EdaError::InvalidFormat {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    if df.width() == 0 {
        return Err(EdaError::EmptyTable);
    }

    info!(
        "Loaded '{}': {} rows x {} columns",
        path.display(),
        df.height(),
        df.width()
    );

    Ok(df)
}

/// Write a DataFrame as a delimited file: header row included, no index
/// column, UTF-8 encoded.
pub fn write_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;

    info!(
        "Wrote '{}': {} rows x {} columns",
        path.display(),
        df.height(),
        df.width()
    );

    Ok(())
}
