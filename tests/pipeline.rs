// Integration tests for the merge/filter pipeline and map binding:
//   compute_view, render_map, Dashboard

use std::{collections::BTreeSet, sync::Arc};

use geo::{polygon, MultiPolygon};
use turnoutmap::{
    compute_view, present::Rgb, render_map, Dashboard, DatasetStore, ElectionYear, GeoRecord, Selection,
    SwingRegistry, TurnoutRecord,
};

const STATES: &[&str] = &[
    "Arizona", "Colorado", "Florida", "Georgia", "Iowa", "Michigan", "Nevada", "New Hampshire",
    "North Carolina", "Ohio", "Pennsylvania", "Texas", "Virginia", "Wisconsin", "Wyoming",
];

fn square(name: &str, i: usize) -> GeoRecord {
    let x = -120.0 + 3.0 * i as f64;
    GeoRecord::new(name, MultiPolygon(vec![polygon![
        (x: x, y: 35.0), (x: x + 2.0, y: 35.0), (x: x + 2.0, y: 37.0), (x: x, y: 37.0),
    ]]))
}

/// Every state has a boundary; Wyoming never has a turnout row.
fn store() -> DatasetStore {
    let records = |year: u16| -> Vec<TurnoutRecord> {
        STATES.iter()
            .enumerate()
            .filter(|(_, name)| **name != "Wyoming")
            .map(|(i, name)| {
                let turnout = 50.0 + i as f64 + (year - 2012) as f64 / 4.0;
                TurnoutRecord::new(*name, turnout, turnout - 60.0)
            })
            .collect()
    };

    ElectionYear::all().iter()
        .fold(DatasetStore::builder(), |builder, year| builder.turnout(*year, records(year.as_u16())))
        .geo(STATES.iter().enumerate().map(|(i, name)| square(name, i)).collect())
        .build()
        .unwrap()
}

#[test]
fn full_view_has_one_row_per_boundary() {
    let store = store();
    let registry = SwingRegistry::default();
    for year in ElectionYear::all() {
        for show_relative in [true, false] {
            let view = compute_view(&store, &registry, &Selection::new(year, show_relative, false)).unwrap();
            assert_eq!(view.len(), store.get_geo().len());
            assert!(view.state_names().eq(store.get_geo().iter().map(|g| g.state_name.as_str())));
        }
    }
}

#[test]
fn swing_view_is_bounded_by_swing_set() {
    let store = store();
    let registry = SwingRegistry::default();
    for year in ElectionYear::all() {
        let swing = registry.get_swing_states(year).unwrap();
        let view = compute_view(&store, &registry, &Selection::new(year, true, true)).unwrap();
        assert!(view.len() <= swing.len());
        assert!(view.state_names().all(|name| swing.contains(name)), "{year}");

        let full = compute_view(&store, &registry, &Selection::new(year, true, false)).unwrap();
        let full_names: BTreeSet<&str> = full.state_names().collect();
        assert!(view.state_names().all(|name| full_names.contains(name)));
    }
}

#[test]
fn recomputing_is_idempotent() {
    let store = store();
    let registry = SwingRegistry::default();
    let selection = Selection::new(ElectionYear::Y2020, false, true);
    assert_eq!(
        compute_view(&store, &registry, &selection).unwrap(),
        compute_view(&store, &registry, &selection).unwrap(),
    );
}

#[test]
fn relative_toggle_keeps_state_set() {
    let store = store();
    let registry = SwingRegistry::default();
    let view = compute_view(&store, &registry, &Selection::new(ElectionYear::Y2024, true, false)).unwrap();

    let relative = render_map(&view, true, ElectionYear::Y2024);
    let absolute = render_map(&view, false, ElectionYear::Y2024);
    assert!(relative.state_names().eq(absolute.state_names()));
    assert_eq!(relative.metric.field(), "relative_turnout_rate");
    assert_eq!(absolute.metric.field(), "turnout_rate");
}

#[test]
fn relative_swing_map_for_2016() {
    let store = store();
    let registry = SwingRegistry::default();
    let view = compute_view(&store, &registry, &Selection::new(ElectionYear::Y2016, true, true)).unwrap();

    let names: BTreeSet<&str> = view.state_names().collect();
    let expected: BTreeSet<&str> = ["Arizona", "Florida", "Michigan", "Nevada", "North Carolina", "Ohio", "Pennsylvania", "Wisconsin"]
        .into_iter()
        .collect();
    assert_eq!(names, expected);

    let map = render_map(&view, true, ElectionYear::Y2016);
    assert_eq!(map.title, "VEP Turnout Rate by State in 2016");
    assert_eq!(map.scale.domain(), &[-20.0, 0.0, 20.0]);
    assert_eq!(map.to_vega_lite()["encoding"]["color"]["scale"]["range"], serde_json::json!(["blue", "white", "red"]));
}

#[test]
fn absolute_full_map_for_2020() {
    let store = store();
    let registry = SwingRegistry::default();
    let view = compute_view(&store, &registry, &Selection::new(ElectionYear::Y2020, false, false)).unwrap();
    let map = render_map(&view, false, ElectionYear::Y2020);

    assert_eq!(map.marks.len(), STATES.len());
    assert_eq!(map.scale.domain(), &[40.0, 80.0]);
    assert_eq!(map.to_vega_lite()["encoding"]["color"]["scale"]["scheme"], "blues");
}

#[test]
fn state_without_turnout_renders_as_no_data() {
    let store = store();
    let registry = SwingRegistry::default();
    let view = compute_view(&store, &registry, &Selection::default()).unwrap();

    let row = view.get("Wyoming").unwrap();
    assert_eq!((row.turnout_rate, row.relative_turnout_rate), (None, None));

    let map = render_map(&view, true, ElectionYear::Y2012);
    let mark = map.mark("Wyoming").unwrap();
    assert!(!mark.has_data());
    assert_eq!(mark.fill, Rgb::new(0xd3, 0xd3, 0xd3));
    assert_ne!(map.mark("Ohio").unwrap().fill, mark.fill);
}

#[test]
fn swing_override_changes_filter() {
    let store = store();
    let registry = SwingRegistry::default().with_override(ElectionYear::Y2012, ["Texas", "Atlantis"]);
    let view = compute_view(&store, &registry, &Selection::new(ElectionYear::Y2012, true, true)).unwrap();
    assert_eq!(view.state_names().collect::<Vec<_>>(), vec!["Texas"]);
}

#[test]
fn dashboards_share_one_store() {
    let store = Arc::new(store());
    let registry = Arc::new(SwingRegistry::default());

    let mut first = Dashboard::new(Arc::clone(&store), Arc::clone(&registry)).unwrap();
    let second = Dashboard::new(Arc::clone(&store), Arc::clone(&registry)).unwrap();
    first.set_year(ElectionYear::Y2024).unwrap();
    first.set_swing_only(true).unwrap();

    assert_eq!(second.selection(), &Selection::default());
    assert_eq!(second.view().len(), STATES.len());
    assert_eq!(first.view().len(), 7);
    assert!(Arc::ptr_eq(&first.view().rows[0].geometry, &store.get_geo()[0].geometry));
}
