//! Metric selection and the fixed color scales bound to each metric.

use serde::Serialize;
use serde_json::{json, Value};

use super::color::{self, Rgb};
use crate::pipeline::MergedRow;

/// Which turnout field drives the color channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    TurnoutRate,
    RelativeTurnoutRate,
}

impl Metric {
    pub fn from_relative(show_relative: bool) -> Self {
        if show_relative { Metric::RelativeTurnoutRate } else { Metric::TurnoutRate }
    }

    /// Field name carried in rendered data.
    pub fn field(&self) -> &'static str {
        match self {
            Metric::TurnoutRate => "turnout_rate",
            Metric::RelativeTurnoutRate => "relative_turnout_rate",
        }
    }

    /// Legend and tooltip title.
    pub fn title(&self) -> &'static str {
        match self {
            Metric::TurnoutRate => "Turnout Rate (%)",
            Metric::RelativeTurnoutRate => "Relative Turnout Rate (%)",
        }
    }

    pub fn value(&self, row: &MergedRow) -> Option<f64> {
        match self {
            Metric::TurnoutRate => row.turnout_rate,
            Metric::RelativeTurnoutRate => row.relative_turnout_rate,
        }
    }
}

/// A piecewise-linear color scale. Values outside the domain clamp to its ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColorScale {
    /// blue → white → red around zero.
    Diverging { domain: [f64; 3], range: [Rgb; 3] },
    /// light → dark along a named scheme.
    Sequential { domain: [f64; 2], scheme: &'static str, range: [Rgb; 2] },
}

impl ColorScale {
    pub fn relative() -> Self {
        ColorScale::Diverging {
            domain: [-20.0, 0.0, 20.0],
            range: [color::BLUE, color::WHITE, color::RED],
        }
    }

    pub fn absolute() -> Self {
        ColorScale::Sequential {
            domain: [40.0, 80.0],
            scheme: "blues",
            range: [color::BLUES_LIGHT, color::BLUES_DARK],
        }
    }

    pub fn for_metric(metric: Metric) -> Self {
        match metric {
            Metric::RelativeTurnoutRate => Self::relative(),
            Metric::TurnoutRate => Self::absolute(),
        }
    }

    pub fn domain(&self) -> &[f64] {
        match self {
            ColorScale::Diverging { domain, .. } => domain.as_slice(),
            ColorScale::Sequential { domain, .. } => domain.as_slice(),
        }
    }

    fn range(&self) -> &[Rgb] {
        match self {
            ColorScale::Diverging { range, .. } => range.as_slice(),
            ColorScale::Sequential { range, .. } => range.as_slice(),
        }
    }

    /// (value, color) pairs at each domain point.
    pub fn stops(&self) -> Vec<(f64, Rgb)> {
        self.domain().iter().copied().zip(self.range().iter().copied()).collect()
    }

    /// Fill for a value; missing or non-finite values get the "no data" color.
    pub fn color(&self, value: Option<f64>) -> Rgb {
        let Some(v) = value.filter(|v| v.is_finite()) else { return color::NO_DATA };

        let stops = self.stops();
        let (first, last) = (stops[0], stops[stops.len() - 1]);
        if v <= first.0 { return first.1 }
        if v >= last.0 { return last.1 }

        stops.windows(2)
            .find(|w| v <= w[1].0)
            .map(|w| {
                let (lo, hi) = (w[0], w[1]);
                lo.1.lerp(hi.1, (v - lo.0) / (hi.0 - lo.0))
            })
            .unwrap_or(last.1)
    }

    /// Vega-Lite `scale` object.
    pub fn to_vega_lite(&self) -> Value {
        match self {
            ColorScale::Diverging { domain, .. } => json!({
                "domain": domain,
                "range": ["blue", "white", "red"],
            }),
            ColorScale::Sequential { domain, scheme, .. } => json!({
                "domain": domain,
                "scheme": scheme,
            }),
        }
    }
}
