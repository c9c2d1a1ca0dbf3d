//! IO module for format-specific reading and writing operations.
//!
//! - `csv` - cleaned per-year turnout tables in, table views out (polars)
//! - `shp` - state boundaries from ESRI shapefiles
//! - `geojson` - state boundaries from GeoJSON, and geometry export
//! - `svg` - low-level SVG writing and projection for choropleth export

pub(crate) mod csv;
pub(crate) mod geojson;
pub(crate) mod shp;
pub(crate) mod svg;

pub(crate) use csv::*;
pub(crate) use geojson::*;
pub(crate) use shp::*;
