//! Presentation adapter: merged views to declarative map and table specs.
//!
//! A [`MapSpec`] can be exported as Vega-Lite JSON (`to_vega_lite`) for an
//! external renderer, or drawn directly as an SVG choropleth (`to_svg_string`).
//! A [`TableSpec`] exports as CSV or JSON.

pub mod color;
mod map;
mod scale;
mod svg;
mod table;
mod vega;

pub use color::Rgb;
pub use map::{render_map, render_map_with_size, MapMark, MapSpec, TooltipField, TooltipValue, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use scale::{ColorScale, Metric};
pub use table::{render_table, TableRow, TableSpec, TABLE_COLUMNS};
