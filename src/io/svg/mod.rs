//! SVG format writing operations for choropleth export.

mod proj;
mod writer;

pub(crate) use proj::*;
pub(crate) use writer::*;
