use std::{fs, path::Path};

use serde_json::{json, Map, Value};

use super::map::MapSpec;
use crate::{error::{Result, TurnoutError}, io};

const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

impl MapSpec {
    /// Export as a Vega-Lite geoshape chart with inline GeoJSON features.
    /// Each feature carries the state name and both turnout fields; the
    /// color channel reads the selected metric and falls back to the
    /// "no data" fill when that value is null.
    pub fn to_vega_lite(&self) -> Value {
        let features: Vec<Value> = self.marks.iter()
            .map(|mark| {
                let mut properties = Map::new();
                properties.insert("state_name".to_string(), json!(mark.state_name));
                properties.insert("turnout_rate".to_string(), finite_or_null(mark.turnout_rate));
                properties.insert("relative_turnout_rate".to_string(), finite_or_null(mark.relative_turnout_rate));
                properties.insert("fill".to_string(), json!(mark.fill.to_hex()));

                json!({
                    "type": "Feature",
                    "id": mark.state_name,
                    "geometry": io::multipolygon_to_geojson(&mark.geometry),
                    "properties": properties,
                })
            })
            .collect();

        let field = format!("properties.{}", self.metric.field());
        json!({
            "$schema": VEGA_LITE_SCHEMA,
            "title": self.title,
            "width": self.width,
            "height": self.height,
            "data": { "values": features },
            "mark": { "type": "geoshape", "stroke": "white", "strokeWidth": 0.5 },
            "projection": { "type": self.projection },
            "encoding": {
                "color": {
                    "condition": {
                        "test": format!("!isValid(datum['properties']['{}'])", self.metric.field()),
                        "value": super::color::NO_DATA.to_hex(),
                    },
                    "field": field,
                    "type": "quantitative",
                    "scale": self.scale.to_vega_lite(),
                    "title": self.metric.title(),
                },
                "tooltip": [
                    { "field": "properties.state_name", "type": "nominal", "title": "State" },
                    { "field": field, "type": "quantitative", "title": self.metric.title() },
                ],
            },
        })
    }

    pub fn write_vega_lite(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.to_vega_lite())?;
        fs::write(path, contents).map_err(|e| TurnoutError::io(path, e))
    }
}

/// JSON number, or null for missing and non-finite values.
fn finite_or_null(value: Option<f64>) -> Value {
    value.filter(|v| v.is_finite()).map_or(Value::Null, |v| json!(v))
}
