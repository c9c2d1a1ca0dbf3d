use std::sync::Arc;

use geo::MultiPolygon;
use serde::{Deserialize, Serialize};

/// One row of a per-year turnout dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnoutRecord {
    pub state_name: String,
    pub turnout_rate: f64,          // VEP turnout, 0-100
    pub relative_turnout_rate: f64, // signed percentage-point deviation
}

impl TurnoutRecord {
    pub fn new(state_name: impl Into<String>, turnout_rate: f64, relative_turnout_rate: f64) -> Self {
        Self { state_name: state_name.into(), turnout_rate, relative_turnout_rate }
    }
}

/// A state boundary. Geometry is shared so derived views never copy polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoRecord {
    pub state_name: String,
    pub geometry: Arc<MultiPolygon<f64>>, // lon/lat degrees
}

impl GeoRecord {
    pub fn new(state_name: impl Into<String>, geometry: MultiPolygon<f64>) -> Self {
        Self { state_name: state_name.into(), geometry: Arc::new(geometry) }
    }
}
