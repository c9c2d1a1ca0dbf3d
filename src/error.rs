use std::path::PathBuf;

use thiserror::Error;

use crate::types::ElectionYear;

/// Errors surfaced by loading, lookup and rendering.
///
/// Join mismatches (a state with no turnout row, a swing state with no
/// boundary) are not errors; they show up as missing values in the view.
#[derive(Debug, Error)]
pub enum TurnoutError {
    /// No turnout dataset was loaded for the requested year.
    #[error("no turnout dataset loaded for {year}")]
    DatasetMissing { year: ElectionYear },

    /// The year is outside the supported set, or has no swing-state entry.
    #[error("unknown election year: {year}")]
    UnknownYear { year: String },

    /// A state name occurs more than once in a single dataset.
    #[error("duplicate state {state:?} in {dataset}")]
    DuplicateState { dataset: String, state: String },

    #[error("missing column {column:?} in {}", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("failed to access {}", path.display())]
    Io { path: PathBuf, #[source] source: std::io::Error },

    #[error("failed to read CSV {}", path.display())]
    Csv { path: PathBuf, #[source] source: polars::error::PolarsError },

    #[error("failed to read shapefile {}", path.display())]
    Shapefile { path: PathBuf, #[source] source: shapefile::Error },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("invalid geometry: {message}")]
    Geometry { message: String },

    #[error("projection failed: {message}")]
    Projection { message: String },
}

pub type Result<T, E = TurnoutError> = std::result::Result<T, E>;

impl TurnoutError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: polars::error::PolarsError) -> Self {
        Self::Csv { path: path.into(), source }
    }

    pub(crate) fn geometry(message: impl Into<String>) -> Self {
        Self::Geometry { message: message.into() }
    }
}
