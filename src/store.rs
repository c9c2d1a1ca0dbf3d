//! Immutable per-year turnout datasets plus the shared state boundaries.

use std::{collections::HashMap, path::Path};

use ahash::AHashSet;
use log::{info, warn};

use crate::{
    config::{ColumnNames, DataConfig},
    error::{Result, TurnoutError},
    io,
    types::{ElectionYear, GeoRecord, TurnoutRecord},
};

/// Read-only after construction; share it across sessions behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    geo: Vec<GeoRecord>,
    turnout: HashMap<ElectionYear, Vec<TurnoutRecord>>,
}

impl DatasetStore {
    pub fn builder() -> DatasetStoreBuilder { DatasetStoreBuilder::default() }

    /// Load every configured file. Any failure here is fatal for the caller.
    ///
    /// Every supported year must have a turnout file; the first one missing
    /// from the config fails with `DatasetMissing` before anything is read.
    pub fn load(config: &DataConfig) -> Result<Self> {
        if let Some(year) = ElectionYear::all().into_iter().find(|year| !config.turnout.contains_key(year)) {
            return Err(TurnoutError::DatasetMissing { year });
        }

        let mut builder = Self::builder()
            .geo(read_geo(&config.geo, &config.columns)?);

        for (&year, path) in &config.turnout {
            let records = io::read_turnout_csv(path, &config.columns)?;
            info!("[store] loaded {} turnout rows for {year} from {}", records.len(), path.display());
            builder = builder.turnout(year, records);
        }

        let store = builder.build()?;
        store.warn_unmatched();
        Ok(store)
    }

    /// The turnout dataset for `year`.
    pub fn get_turnout(&self, year: ElectionYear) -> Result<&[TurnoutRecord]> {
        self.turnout.get(&year)
            .map(Vec::as_slice)
            .ok_or(TurnoutError::DatasetMissing { year })
    }

    /// State boundaries, in file order.
    pub fn get_geo(&self) -> &[GeoRecord] { &self.geo }

    /// Years with a loaded dataset, oldest first.
    pub fn years(&self) -> Vec<ElectionYear> {
        ElectionYear::all().into_iter()
            .filter(|year| self.turnout.contains_key(year))
            .collect()
    }
}

impl DatasetStore {
    /// Turnout rows whose state has no boundary never reach a view.
    fn warn_unmatched(&self) {
        let known: AHashSet<&str> = self.geo.iter().map(|geo| geo.state_name.as_str()).collect();
        for (year, records) in &self.turnout {
            for record in records.iter().filter(|r| !known.contains(r.state_name.as_str())) {
                warn!("[store] {year} turnout row {:?} has no boundary", record.state_name);
            }
        }
    }
}

fn read_geo(path: &Path, columns: &ColumnNames) -> Result<Vec<GeoRecord>> {
    let is_geojson = path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("geojson") || ext.eq_ignore_ascii_case("json"));

    let records = if is_geojson {
        io::read_states_geojson(path, &columns.state)?
    } else {
        io::read_states_shapefile(path, &columns.state)?
    };
    info!("[store] loaded {} state boundaries from {}", records.len(), path.display());
    Ok(records)
}

/// Assembles a store, rejecting duplicate state names within any one dataset.
#[derive(Debug, Default)]
pub struct DatasetStoreBuilder {
    geo: Vec<GeoRecord>,
    turnout: HashMap<ElectionYear, Vec<TurnoutRecord>>,
}

impl DatasetStoreBuilder {
    pub fn geo(mut self, records: Vec<GeoRecord>) -> Self {
        self.geo = records;
        self
    }

    /// Set (or replace) the dataset for one year.
    pub fn turnout(mut self, year: ElectionYear, records: Vec<TurnoutRecord>) -> Self {
        self.turnout.insert(year, records);
        self
    }

    pub fn build(self) -> Result<DatasetStore> {
        ensure_unique("geographic dataset", self.geo.iter().map(|r| r.state_name.as_str()))?;
        for (year, records) in &self.turnout {
            ensure_unique(&format!("{year} turnout dataset"), records.iter().map(|r| r.state_name.as_str()))?;
        }
        Ok(DatasetStore { geo: self.geo, turnout: self.turnout })
    }
}

fn ensure_unique<'a>(dataset: &str, names: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = AHashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(TurnoutError::DuplicateState { dataset: dataset.to_string(), state: name.to_string() });
        }
    }
    Ok(())
}
