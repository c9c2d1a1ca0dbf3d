//! CSV reading operations.

use std::{fs::File, path::Path};

use log::warn;
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReader, DataType}};

use crate::{config::ColumnNames, error::{Result, TurnoutError}, types::TurnoutRecord};

/// Reads a CSV file from `path` into a Polars DataFrame.
pub(crate) fn read_csv(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .map_err(|e| TurnoutError::io(path, e))?;
    CsvReader::new(file)
        .finish()
        .map_err(|e| TurnoutError::csv(path, e))
}

/// Reads a cleaned per-year turnout file.
pub(crate) fn read_turnout_csv(path: &Path, columns: &ColumnNames) -> Result<Vec<TurnoutRecord>> {
    turnout_records(&read_csv(path)?, path, columns)
}

/// Project a turnout DataFrame onto records.
///
/// Numeric columns are cast to f64; null rates become NaN so the renderer
/// treats them as missing. Rows with no state name are skipped.
pub(crate) fn turnout_records(df: &DataFrame, path: &Path, columns: &ColumnNames) -> Result<Vec<TurnoutRecord>> {
    let column = |name: &str, dtype: DataType| {
        df.column(name)
            .map_err(|_| TurnoutError::MissingColumn { path: path.to_path_buf(), column: name.to_string() })?
            .cast(&dtype)
            .map_err(|e| TurnoutError::csv(path, e))
    };

    let names = column(&columns.state, DataType::String)?;
    let turnout = column(&columns.turnout, DataType::Float64)?;
    let relative = column(&columns.relative, DataType::Float64)?;

    let names = names.str().map_err(|e| TurnoutError::csv(path, e))?;
    let turnout = turnout.f64().map_err(|e| TurnoutError::csv(path, e))?;
    let relative = relative.f64().map_err(|e| TurnoutError::csv(path, e))?;

    let records = names.into_iter()
        .zip(turnout.into_iter())
        .zip(relative.into_iter())
        .enumerate()
        .filter_map(|(row, ((name, turnout), relative))| {
            let Some(name) = name else {
                warn!("[io::csv::read] {}: row {} has no state name, skipping", path.display(), row + 1);
                return None;
            };
            Some(TurnoutRecord::new(
                name,
                turnout.unwrap_or(f64::NAN),
                relative.unwrap_or(f64::NAN),
            ))
        })
        .collect();

    Ok(records)
}
