//! A single user's dashboard session.

use std::sync::Arc;

use log::debug;

use crate::{
    error::Result,
    pipeline::{compute_view, MergedView},
    present::{render_map_with_size, render_table, MapSpec, TableSpec, DEFAULT_HEIGHT, DEFAULT_WIDTH},
    selection::Selection,
    store::DatasetStore,
    swing::SwingRegistry,
    types::ElectionYear,
};

/// Owns one `Selection` and the view derived from it.
///
/// The store and registry are shared read-only; every selection change
/// recomputes the view eagerly. A change whose recompute fails is rolled
/// back, so `selection()` and `view()` always agree.
#[derive(Debug, Clone)]
pub struct Dashboard {
    store: Arc<DatasetStore>,
    registry: Arc<SwingRegistry>,
    selection: Selection,
    view: MergedView,
    size: (u32, u32),
}

impl Dashboard {
    /// Start a session at the default selection.
    pub fn new(store: Arc<DatasetStore>, registry: Arc<SwingRegistry>) -> Result<Self> {
        Self::with_selection(store, registry, Selection::default())
    }

    pub fn with_selection(store: Arc<DatasetStore>, registry: Arc<SwingRegistry>, selection: Selection) -> Result<Self> {
        let view = compute_view(&store, &registry, &selection)?;
        Ok(Self { store, registry, selection, view, size: (DEFAULT_WIDTH, DEFAULT_HEIGHT) })
    }

    /// Map width and height in pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    pub fn selection(&self) -> &Selection { &self.selection }

    pub fn view(&self) -> &MergedView { &self.view }

    pub fn set_year(&mut self, year: ElectionYear) -> Result<()> {
        self.apply(self.selection.with_year(year))
    }

    pub fn set_show_relative(&mut self, show_relative: bool) -> Result<()> {
        self.apply(self.selection.with_show_relative(show_relative))
    }

    pub fn set_swing_only(&mut self, swing_only: bool) -> Result<()> {
        self.apply(self.selection.with_swing_only(swing_only))
    }

    /// Replace the whole selection and recompute.
    pub fn apply(&mut self, selection: Selection) -> Result<()> {
        let view = compute_view(&self.store, &self.registry, &selection)?;
        debug!("[dashboard] {:?} -> {:?} ({} states)", self.selection, selection, view.len());
        self.selection = selection;
        self.view = view;
        Ok(())
    }

    /// The map for the current selection.
    pub fn map(&self) -> MapSpec {
        let (width, height) = self.size;
        render_map_with_size(&self.view, self.selection.show_relative, self.selection.year, width, height)
    }

    /// The full dataset for the selected year, ignoring the swing filter.
    pub fn table(&self) -> Result<TableSpec> {
        Ok(render_table(self.store.get_turnout(self.selection.year)?))
    }
}

#[cfg(test)]
mod tests {
    use geo::{polygon, MultiPolygon};

    use super::*;
    use crate::{error::TurnoutError, types::{GeoRecord, TurnoutRecord}};

    fn square(name: &str) -> GeoRecord {
        GeoRecord::new(name, MultiPolygon(vec![polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0)]]))
    }

    fn dashboard() -> Dashboard {
        let store = DatasetStore::builder()
            .geo(vec![square("Iowa"), square("Kansas"), square("Georgia")])
            .turnout(ElectionYear::Y2012, vec![
                TurnoutRecord::new("Iowa", 70.3, 8.2),
                TurnoutRecord::new("Kansas", 57.0, -1.2),
                TurnoutRecord::new("Georgia", 59.0, 0.4),
            ])
            .turnout(ElectionYear::Y2020, vec![
                TurnoutRecord::new("Iowa", 73.2, 6.3),
                TurnoutRecord::new("Georgia", 67.7, 0.8),
            ])
            .build()
            .unwrap();
        Dashboard::new(Arc::new(store), Arc::new(SwingRegistry::default())).unwrap()
    }

    #[test]
    fn starts_at_default_selection() {
        let dashboard = dashboard();
        assert_eq!(*dashboard.selection(), Selection::default());
        assert_eq!(dashboard.view().len(), 3);
        assert_eq!(dashboard.map().metric.field(), "relative_turnout_rate");
    }

    #[test]
    fn changes_recompute_view() {
        let mut dashboard = dashboard();
        dashboard.set_swing_only(true).unwrap();
        assert_eq!(dashboard.view().state_names().collect::<Vec<_>>(), vec!["Iowa"]);

        dashboard.set_year(ElectionYear::Y2020).unwrap();
        assert_eq!(dashboard.view().state_names().collect::<Vec<_>>(), vec!["Georgia"]);

        dashboard.set_swing_only(false).unwrap();
        assert!(!dashboard.view().get("Kansas").unwrap().has_data());
    }

    #[test]
    fn table_ignores_swing_filter() {
        let mut dashboard = dashboard();
        dashboard.set_swing_only(true).unwrap();
        assert_eq!(dashboard.view().len(), 1);
        assert_eq!(dashboard.table().unwrap().len(), 3);
    }

    #[test]
    fn failed_change_keeps_previous_state() {
        let mut dashboard = dashboard();
        let err = dashboard.set_year(ElectionYear::Y2016).unwrap_err();
        assert!(matches!(err, TurnoutError::DatasetMissing { year: ElectionYear::Y2016 }));
        assert_eq!(dashboard.selection().year, ElectionYear::Y2012);
        assert_eq!(dashboard.view().year, ElectionYear::Y2012);
    }

    #[test]
    fn toggling_relative_only_changes_metric() {
        let mut dashboard = dashboard().with_size(800, 500);
        let before = dashboard.map();
        dashboard.set_show_relative(false).unwrap();
        let after = dashboard.map();
        assert_eq!(before.state_names().collect::<Vec<_>>(), after.state_names().collect::<Vec<_>>());
        assert_ne!(before.scale, after.scale);
        assert_eq!((after.width, after.height), (800, 500));
    }
}
