pub mod render;
pub mod session;

use std::{path::Path, sync::Arc};

use anyhow::{Context, Result};
use log::info;
use turnoutmap::{DashboardConfig, DatasetStore, SwingRegistry};

/// Everything a command needs after startup: the config plus the shared, read-only data.
pub struct Loaded {
    pub config: DashboardConfig,
    pub store: Arc<DatasetStore>,
    pub registry: Arc<SwingRegistry>,
}

/// Read the config and load every dataset it names. Failures here are fatal.
pub fn load(config_path: &Path) -> Result<Loaded> {
    info!("[load] reading config from {}", config_path.display());
    let config = DashboardConfig::from_path(config_path)
        .with_context(|| format!("[load] invalid config {}", config_path.display()))?;

    let store = DatasetStore::load(&config.data)
        .context("[load] failed to load datasets")?;
    let registry = config.swing_registry();
    info!("[load] {} state boundaries, years {:?}", store.get_geo().len(), store.years());

    Ok(Loaded { config, store: Arc::new(store), registry: Arc::new(registry) })
}
