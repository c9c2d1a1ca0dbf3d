//! Albers equal-area projection of lon/lat geometry into SVG pixel space.

use geo::{BoundingRect, Coord, MapCoords, MultiPolygon, Rect};
use proj4rs::{proj::Proj as Proj4, transform::transform};

use crate::error::{Result, TurnoutError};

/// Source CRS of boundary files (degrees → radians handled in code).
const GEOGRAPHIC: &str = "+proj=longlat +datum=NAD83 +no_defs +type=crs";

/// Conterminous-US Albers, the projection behind `albersUsa` (without the AK/HI insets).
const US_ALBERS: &str = "+proj=aea +lat_1=29.5 +lat_2=45.5 +lat_0=37.5 +lon_0=-96 +x_0=0 +y_0=0 +datum=NAD83 +units=m +no_defs +type=crs";

/// Reproject shapes from lon/lat to US Albers meters.
pub(crate) fn project_albers(shapes: &[&MultiPolygon<f64>]) -> Result<Vec<MultiPolygon<f64>>> {
    let projection_err = |e: proj4rs::errors::Error| TurnoutError::Projection { message: e.to_string() };
    let from = Proj4::from_proj_string(GEOGRAPHIC).map_err(projection_err)?;
    let to = Proj4::from_proj_string(US_ALBERS).map_err(projection_err)?;

    shapes.iter()
        .map(|shape| shape.try_map_coords(|coord: Coord<f64>| {
            let mut point = (coord.x.to_radians(), coord.y.to_radians(), 0.0);
            transform(&from, &to, &mut point).map_err(projection_err)?;
            Ok(Coord { x: point.0, y: point.1 })
        }))
        .collect()
}

/// Linear fit of projected bounds into a `width` x `height` box (Y down).
#[derive(Debug, Clone, Copy)]
pub(crate) struct Viewport {
    bounds: Rect<f64>,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Viewport {
    /// Fit `shapes` inside the box, preserving aspect ratio and centering the slack.
    /// Returns None when there is nothing to draw.
    pub(crate) fn fit(shapes: &[MultiPolygon<f64>], left: f64, top: f64, width: f64, height: f64) -> Option<Self> {
        let bounds = shapes.iter()
            .filter_map(|shape| shape.bounding_rect())
            .reduce(|a, b| Rect::new(
                Coord { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
                Coord { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
            ))?;

        let span_x = if bounds.width() > 0.0 { bounds.width() } else { 1.0 };
        let span_y = if bounds.height() > 0.0 { bounds.height() } else { 1.0 };
        let scale = (width / span_x).min(height / span_y);

        Some(Self {
            bounds,
            scale,
            offset_x: left + (width - span_x * scale) / 2.0,
            offset_y: top + (height - span_y * scale) / 2.0,
        })
    }

    pub(crate) fn project(&self, coord: &Coord<f64>) -> (f64, f64) {
        let x = self.offset_x + (coord.x - self.bounds.min().x) * self.scale;
        let y = self.offset_y + (self.bounds.max().y - coord.y) * self.scale; // invert vertically
        (x, y)
    }
}
