//! JSON configuration: where the datasets live and how to read them.

use std::{collections::BTreeMap, fs, path::{Path, PathBuf}};

use serde::{Deserialize, Serialize};

use crate::{error::{Result, TurnoutError}, swing::SwingRegistry, types::ElectionYear};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub data: DataConfig,
    /// Per-year replacements for the built-in swing-state table.
    #[serde(default)]
    pub swing_states: BTreeMap<ElectionYear, Vec<String>>,
    #[serde(default)]
    pub map: MapConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// One cleaned CSV file per election year.
    pub turnout: BTreeMap<ElectionYear, PathBuf>,
    /// State boundaries, `.shp` or `.geojson`.
    pub geo: PathBuf,
    #[serde(default)]
    pub columns: ColumnNames,
}

/// Column (or attribute) names in the input files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub state: String,
    pub turnout: String,
    pub relative: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            state: "NAME".to_string(),
            turnout: "VEP".to_string(),
            relative: "VEP_relative".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for MapConfig {
    fn default() -> Self { Self { width: 600, height: 400 } }
}

impl DashboardConfig {
    /// Read a config file. Relative data paths resolve against the file's directory.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| TurnoutError::io(path, e))?;
        let mut config: DashboardConfig = serde_json::from_str(&contents)?;

        if let Some(root) = path.parent() {
            config.data.resolve_paths(root);
        }
        Ok(config)
    }

    /// Built-in swing table with this config's overrides applied.
    pub fn swing_registry(&self) -> SwingRegistry {
        self.swing_states.iter()
            .fold(SwingRegistry::default(), |registry, (year, names)| {
                registry.with_override(*year, names.iter().cloned())
            })
    }
}

impl DataConfig {
    fn resolve_paths(&mut self, root: &Path) {
        let resolve = |p: &PathBuf| if p.is_relative() { root.join(p) } else { p.clone() };
        self.geo = resolve(&self.geo);
        for path in self.turnout.values_mut() {
            *path = resolve(path);
        }
    }
}
