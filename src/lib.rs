#![doc = "turnoutmap public API"]
//! Per-state VEP turnout choropleths for the 2012-2024 U.S. elections.
//!
//! Load the datasets once into a [`DatasetStore`], then drive one or more
//! [`Dashboard`] sessions. Each selection change re-runs [`compute_view`]
//! and re-renders the map ([`MapSpec`]) and table ([`TableSpec`]).

mod config;
mod dashboard;
mod error;
mod io;
mod pipeline;
mod selection;
mod store;
mod swing;
mod types;

pub mod present;

#[doc(inline)]
pub use config::{ColumnNames, DashboardConfig, DataConfig, MapConfig};

#[doc(inline)]
pub use dashboard::Dashboard;

#[doc(inline)]
pub use error::{Result, TurnoutError};

#[doc(inline)]
pub use pipeline::{compute_view, MergedRow, MergedView};

#[doc(inline)]
pub use present::{render_map, render_table, MapSpec, TableSpec};

#[doc(inline)]
pub use selection::Selection;

#[doc(inline)]
pub use store::{DatasetStore, DatasetStoreBuilder};

#[doc(inline)]
pub use swing::SwingRegistry;

#[doc(inline)]
pub use types::{ElectionYear, GeoRecord, TurnoutRecord};
