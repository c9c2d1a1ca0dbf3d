//! The merge/filter pipeline: boundaries left-joined with one year's turnout.

use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use geo::MultiPolygon;
use log::{debug, warn};

use crate::{
    error::Result,
    selection::Selection,
    store::DatasetStore,
    swing::SwingRegistry,
    types::{ElectionYear, TurnoutRecord},
};

/// One boundary with whatever turnout data matched it.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRow {
    pub state_name: String,
    pub geometry: Arc<MultiPolygon<f64>>,
    pub turnout_rate: Option<f64>,          // None when the year has no usable value for this state
    pub relative_turnout_rate: Option<f64>,
}

impl MergedRow {
    pub fn has_data(&self) -> bool {
        self.turnout_rate.is_some()
    }
}

/// Derived, never persisted. Rows keep the boundary file's order.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedView {
    pub year: ElectionYear,
    pub swing_only: bool,
    pub rows: Vec<MergedRow>,
}

impl MergedView {
    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &MergedRow> { self.rows.iter() }

    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.state_name.as_str())
    }

    pub fn get(&self, state_name: &str) -> Option<&MergedRow> {
        self.rows.iter().find(|row| row.state_name == state_name)
    }
}

/// Join the selected year's turnout onto every boundary, then optionally keep
/// only that year's swing states.
///
/// Names match exactly (case-sensitive). Boundaries with no turnout row stay
/// in the view with empty metrics; swing states with no boundary are dropped.
/// Both metrics are always carried; choosing one is left to the presentation.
pub fn compute_view(store: &DatasetStore, registry: &SwingRegistry, selection: &Selection) -> Result<MergedView> {
    let records = store.get_turnout(selection.year)?;
    let by_name: AHashMap<&str, &TurnoutRecord> = records.iter()
        .map(|record| (record.state_name.as_str(), record))
        .collect();

    let swing_states = if selection.swing_only {
        Some(registry.get_swing_states(selection.year)?)
    } else {
        None
    };

    let boundaries = store.get_geo();
    let rows: Vec<MergedRow> = boundaries.iter()
        .filter(|geo| swing_states.is_none_or(|set| set.contains(&geo.state_name)))
        .map(|geo| {
            let record = by_name.get(geo.state_name.as_str());
            MergedRow {
                state_name: geo.state_name.clone(),
                geometry: Arc::clone(&geo.geometry),
                turnout_rate: record.map(|r| r.turnout_rate).filter(|v| v.is_finite()),
                relative_turnout_rate: record.map(|r| r.relative_turnout_rate).filter(|v| v.is_finite()),
            }
        })
        .collect();

    let unmatched = rows.iter().filter(|row| !row.has_data()).count();
    debug!(
        "[pipeline] {} rows for {} (swing_only={}), {} without turnout data",
        rows.len(), selection.year, selection.swing_only, unmatched,
    );
    if let Some(set) = swing_states {
        let known: AHashSet<&str> = boundaries.iter().map(|geo| geo.state_name.as_str()).collect();
        for name in set.iter().filter(|name| !known.contains(name.as_str())) {
            warn!("[pipeline] swing state {name:?} has no boundary, dropped");
        }
    }

    Ok(MergedView { year: selection.year, swing_only: selection.swing_only, rows })
}
