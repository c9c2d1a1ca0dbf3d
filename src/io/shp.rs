//! Shapefile reading for state boundaries.

use std::path::Path;

use geo::{Coord, LineString, MultiPolygon, Polygon};
use log::warn;
use shapefile::{self as shp, dbase::{FieldValue, Record}, Reader, Shape};

use crate::{error::{Result, TurnoutError}, types::GeoRecord};

/// Reads every polygon feature of a `.shp` file, keyed by the `name_field` attribute.
/// Features with a null shape are skipped.
pub(crate) fn read_states_shapefile(path: &Path, name_field: &str) -> Result<Vec<GeoRecord>> {
    let shp_err = |source| TurnoutError::Shapefile { path: path.to_path_buf(), source };

    let mut reader = Reader::from_path(path).map_err(shp_err)?;

    let mut records = Vec::with_capacity(reader.shape_count().map_err(shp_err)?);
    for result in reader.iter_shapes_and_records() {
        let (shape, record) = result.map_err(shp_err)?;
        let name = record_name(&record, name_field)
            .ok_or_else(|| TurnoutError::MissingColumn { path: path.to_path_buf(), column: name_field.to_string() })?;

        let geometry = match shape {
            Shape::Polygon(polygon) => shp_to_geo(&polygon),
            Shape::NullShape => {
                warn!("[io::shp] {}: {name} has no geometry, skipping", path.display());
                continue;
            }
            other => {
                return Err(TurnoutError::geometry(format!(
                    "{name}: expected a polygon shape, found {:?}", other.shapetype()
                )));
            }
        };
        records.push(GeoRecord::new(name, geometry));
    }
    Ok(records)
}

/// Text value of a dBase attribute, trimmed of the fixed-width padding.
fn record_name(record: &Record, field: &str) -> Option<String> {
    match record.get(field)? {
        FieldValue::Character(Some(s)) | FieldValue::Memo(s) => Some(s.trim().to_string()),
        _ => None,
    }
}

/// Convert shapefile::Polygon to geo::MultiPolygon<f64>.
/// Each outer ring starts a polygon; inner rings attach to the last outer ring seen.
pub(crate) fn shp_to_geo(p: &shp::Polygon) -> MultiPolygon<f64> {
    fn to_line_string(points: &[shp::Point]) -> LineString<f64> {
        let mut coords: Vec<Coord<f64>> = points.iter().map(|pt| Coord { x: pt.x, y: pt.y }).collect();
        if let (Some(&first), Some(&last)) = (coords.first(), coords.last()) {
            if first != last { coords.push(first) }
        }
        LineString(coords)
    }

    let mut polys: Vec<Polygon<f64>> = Vec::new();
    let mut current_exterior: Option<LineString<f64>> = None;
    let mut current_holes: Vec<LineString<f64>> = Vec::new();

    for ring in p.rings() {
        match ring {
            shp::PolygonRing::Outer(points) => {
                if let Some(ext) = current_exterior.take() {
                    polys.push(Polygon::new(ext, std::mem::take(&mut current_holes)));
                }
                current_exterior = Some(to_line_string(points));
            }
            shp::PolygonRing::Inner(points) => current_holes.push(to_line_string(points)),
        }
    }
    if let Some(ext) = current_exterior {
        polys.push(Polygon::new(ext, current_holes));
    }

    MultiPolygon(polys)
}
