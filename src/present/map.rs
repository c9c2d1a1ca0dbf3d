use std::sync::Arc;

use geo::MultiPolygon;
use serde::Serialize;

use super::{color::Rgb, scale::{ColorScale, Metric}};
use crate::{pipeline::MergedView, types::ElectionYear};

pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 400;

/// Declarative choropleth: everything a renderer needs to draw the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapSpec {
    pub title: String,
    pub year: ElectionYear,
    pub metric: Metric,
    pub scale: ColorScale,
    pub width: u32,
    pub height: u32,
    pub projection: &'static str,
    pub marks: Vec<MapMark>,
}

/// One geoshape per state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMark {
    pub state_name: String,
    #[serde(skip)]
    pub geometry: Arc<MultiPolygon<f64>>,
    pub turnout_rate: Option<f64>,
    pub relative_turnout_rate: Option<f64>,
    pub value: Option<f64>, // the selected metric; None renders as "no data"
    pub fill: Rgb,
    pub tooltip: Vec<TooltipField>,
}

impl MapMark {
    pub fn has_data(&self) -> bool {
        self.value.is_some_and(f64::is_finite)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipField {
    pub title: String,
    pub value: TooltipValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TooltipValue {
    Text(String),
    Number(Option<f64>),
}

impl TooltipField {
    /// Tooltip line as shown to a user, e.g. `State: Ohio`.
    pub fn display(&self) -> String {
        match &self.value {
            TooltipValue::Text(s) => format!("{}: {}", self.title, s),
            TooltipValue::Number(Some(v)) if v.is_finite() => format!("{}: {:.1}", self.title, v),
            TooltipValue::Number(_) => format!("{}: no data", self.title),
        }
    }
}

/// Map of the view at the default size.
pub fn render_map(view: &MergedView, show_relative: bool, year: ElectionYear) -> MapSpec {
    render_map_with_size(view, show_relative, year, DEFAULT_WIDTH, DEFAULT_HEIGHT)
}

/// Bind the color channel to the selected metric and resolve each state's fill.
pub fn render_map_with_size(view: &MergedView, show_relative: bool, year: ElectionYear, width: u32, height: u32) -> MapSpec {
    let metric = Metric::from_relative(show_relative);
    let scale = ColorScale::for_metric(metric);

    let marks = view.iter()
        .map(|row| {
            let value = metric.value(row);
            MapMark {
                state_name: row.state_name.clone(),
                geometry: Arc::clone(&row.geometry),
                turnout_rate: row.turnout_rate,
                relative_turnout_rate: row.relative_turnout_rate,
                value,
                fill: scale.color(value),
                tooltip: vec![
                    TooltipField { title: "State".to_string(), value: TooltipValue::Text(row.state_name.clone()) },
                    TooltipField { title: metric.title().to_string(), value: TooltipValue::Number(value) },
                ],
            }
        })
        .collect();

    MapSpec {
        title: format!("VEP Turnout Rate by State in {year}"),
        year,
        metric,
        scale,
        width,
        height,
        projection: "albersUsa",
        marks,
    }
}

impl MapSpec {
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.marks.iter().map(|mark| mark.state_name.as_str())
    }

    pub fn mark(&self, state_name: &str) -> Option<&MapMark> {
        self.marks.iter().find(|mark| mark.state_name == state_name)
    }
}

#[cfg(test)]
mod tests {
    use geo::polygon;

    use super::*;
    use crate::{pipeline::MergedRow, present::color};

    fn view() -> MergedView {
        let shape = Arc::new(MultiPolygon(vec![polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0)]]));
        let row = |name: &str, rates: Option<(f64, f64)>| MergedRow {
            state_name: name.to_string(),
            geometry: shape.clone(),
            turnout_rate: rates.map(|r| r.0),
            relative_turnout_rate: rates.map(|r| r.1),
        };
        MergedView {
            year: ElectionYear::Y2020,
            swing_only: false,
            rows: vec![row("Minnesota", Some((79.9, 13.3))), row("Guam", None), row("Oklahoma", Some((54.8, -11.8)))],
        }
    }

    #[test]
    fn relative_map_uses_diverging_scale() {
        let map = render_map(&view(), true, ElectionYear::Y2020);
        assert_eq!(map.title, "VEP Turnout Rate by State in 2020");
        assert_eq!(map.metric, Metric::RelativeTurnoutRate);
        assert_eq!(map.scale.domain(), &[-20.0, 0.0, 20.0]);
        assert_eq!(map.mark("Minnesota").unwrap().value, Some(13.3));
        assert_eq!((map.width, map.height, map.projection), (600, 400, "albersUsa"));
    }

    #[test]
    fn absolute_map_uses_sequential_scale() {
        let map = render_map(&view(), false, ElectionYear::Y2020);
        assert_eq!(map.metric, Metric::TurnoutRate);
        assert_eq!(map.scale.domain(), &[40.0, 80.0]);
        assert_eq!(map.mark("Oklahoma").unwrap().value, Some(54.8));
    }

    #[test]
    fn toggling_metric_keeps_state_set() {
        let relative = render_map(&view(), true, ElectionYear::Y2020);
        let absolute = render_map(&view(), false, ElectionYear::Y2020);
        assert_eq!(relative.state_names().collect::<Vec<_>>(), absolute.state_names().collect::<Vec<_>>());
    }

    #[test]
    fn unmatched_state_renders_as_no_data() {
        let map = render_map(&view(), true, ElectionYear::Y2020);
        let guam = map.mark("Guam").unwrap();
        assert!(!guam.has_data());
        assert_eq!(guam.fill, color::NO_DATA);
        assert_eq!(guam.tooltip[1].display(), "Relative Turnout Rate (%): no data");
        assert_eq!(guam.tooltip[0].display(), "State: Guam");
    }

    #[test]
    fn custom_size() {
        let map = render_map_with_size(&view(), false, ElectionYear::Y2012, 960, 600);
        assert_eq!((map.width, map.height), (960, 600));
        assert!(map.title.ends_with("2012"));
    }
}
