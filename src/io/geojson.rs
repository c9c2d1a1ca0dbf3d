//! GeoJSON reading and writing for state boundaries.

use std::{fs, path::Path};

use geo::{Coord, LineString, MultiPolygon, Polygon};
use log::warn;
use serde_json::{json, Value};

use crate::{error::{Result, TurnoutError}, types::GeoRecord};

/// Reads a FeatureCollection of Polygon/MultiPolygon features, keyed by the `name_field` property.
/// Features without geometry are skipped.
pub(crate) fn read_states_geojson(path: &Path, name_field: &str) -> Result<Vec<GeoRecord>> {
    let bytes = fs::read(path).map_err(|e| TurnoutError::io(path, e))?;
    let value: Value = serde_json::from_slice(&bytes)?;
    states_from_geojson(&value, name_field)
        .map_err(|e| match e {
            TurnoutError::MissingColumn { column, .. } => TurnoutError::MissingColumn { path: path.to_path_buf(), column },
            other => other,
        })
}

/// Parse GeoRecords out of an in-memory FeatureCollection.
pub(crate) fn states_from_geojson(value: &Value, name_field: &str) -> Result<Vec<GeoRecord>> {
    let features = value["features"].as_array()
        .ok_or_else(|| TurnoutError::geometry("GeoJSON is not a FeatureCollection"))?;

    let mut records = Vec::with_capacity(features.len());
    for feature in features {
        let name = feature["properties"][name_field].as_str()
            .ok_or_else(|| TurnoutError::MissingColumn { path: "<geojson>".into(), column: name_field.to_string() })?;

        let geometry = &feature["geometry"];
        if geometry.is_null() {
            warn!("[io::geojson] {name} has no geometry, skipping");
            continue;
        }
        records.push(GeoRecord::new(name, geometry_from_geojson(geometry)?));
    }
    Ok(records)
}

/// Parse a Polygon or MultiPolygon geometry object.
pub(crate) fn geometry_from_geojson(geometry: &Value) -> Result<MultiPolygon<f64>> {
    let coords = geometry["coordinates"].as_array()
        .ok_or_else(|| TurnoutError::geometry("geometry has no coordinates"))?;

    match geometry["type"].as_str() {
        Some("Polygon") => Ok(MultiPolygon(vec![parse_polygon(coords)?])),
        Some("MultiPolygon") => coords.iter()
            .map(|polygon| {
                let rings = polygon.as_array()
                    .ok_or_else(|| TurnoutError::geometry("MultiPolygon member is not an array"))?;
                parse_polygon(rings)
            })
            .collect::<Result<Vec<_>>>()
            .map(MultiPolygon),
        other => Err(TurnoutError::geometry(format!("unsupported geometry type {other:?}"))),
    }
}

/// Rings of one polygon: exterior first, then holes.
fn parse_polygon(rings: &[Value]) -> Result<Polygon<f64>> {
    let mut rings = rings.iter().map(|ring| {
        ring.as_array()
            .ok_or_else(|| TurnoutError::geometry("ring is not an array"))
            .and_then(|coords| parse_ring(coords))
    });

    let exterior = rings.next()
        .ok_or_else(|| TurnoutError::geometry("polygon has no exterior ring"))??;
    let interiors = rings.collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(exterior, interiors))
}

/// Parse a ring: [[x, y], [x, y], ...]. Extra ordinates are ignored.
fn parse_ring(coords: &[Value]) -> Result<LineString<f64>> {
    let mut points = coords.iter()
        .map(|pair| match (pair[0].as_f64(), pair[1].as_f64()) {
            (Some(x), Some(y)) => Ok(Coord { x, y }),
            _ => Err(TurnoutError::geometry(format!("invalid coordinate {pair}"))),
        })
        .collect::<Result<Vec<_>>>()?;

    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if first != last { points.push(first) }
    }
    Ok(LineString(points))
}

/// GeoJSON MultiPolygon geometry for `mp`.
pub(crate) fn multipolygon_to_geojson(mp: &MultiPolygon<f64>) -> Value {
    let ring = |ls: &LineString<f64>| ls.coords().map(|c| [c.x, c.y]).collect::<Vec<_>>();
    let polygons: Vec<Vec<Vec<[f64; 2]>>> = mp.0.iter()
        .map(|polygon| {
            std::iter::once(ring(polygon.exterior()))
                .chain(polygon.interiors().iter().map(ring))
                .collect()
        })
        .collect();

    json!({
        "type": "MultiPolygon",
        "coordinates": polygons,
    })
}
