//! CSV writing operations.

use std::{fs::File, path::Path};

use polars::{frame::DataFrame, io::SerWriter, prelude::{CsvWriter, NamedFrom}, series::Series};

use crate::{error::{Result, TurnoutError}, present::TableSpec};

/// Write a DataFrame to a CSV file.
pub(crate) fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| TurnoutError::io(path, e))?;
    CsvWriter::new(file)
        .finish(df)
        .map_err(|e| TurnoutError::csv(path, e))
}

/// Write a DataFrame to a CSV string.
pub(crate) fn write_csv_string(df: &mut DataFrame) -> Result<String> {
    let mut buffer = Vec::new();
    CsvWriter::new(&mut buffer)
        .finish(df)
        .map_err(|e| TurnoutError::csv("<memory>", e))?;
    String::from_utf8(buffer)
        .map_err(|e| TurnoutError::io("<memory>", std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Build the DataFrame behind a table view, one column per header.
/// Missing (non-finite) rates become nulls, written as empty fields.
pub(crate) fn table_frame(table: &TableSpec) -> Result<DataFrame> {
    let finite = |v: f64| Some(v).filter(|v| v.is_finite());
    let (names, (turnout, relative)): (Vec<&str>, (Vec<Option<f64>>, Vec<Option<f64>>)) = table.rows.iter()
        .map(|row| (row.state_name.as_str(), (finite(row.turnout_rate), finite(row.relative_turnout_rate))))
        .unzip();

    DataFrame::new(vec![
        Series::new(table.columns[0].into(), names).into(),
        Series::new(table.columns[1].into(), turnout).into(),
        Series::new(table.columns[2].into(), relative).into(),
    ])
    .map_err(|e| TurnoutError::csv("<memory>", e))
}
