use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;
use turnoutmap::{Dashboard, ElectionYear, Selection};

use crate::cli::{Cli, MapFormat, RenderArgs};

pub fn run(_cli: &Cli, args: &RenderArgs) -> Result<()> {
    let year: ElectionYear = args.year.parse()
        .with_context(|| format!("[render] unsupported year {:?}", args.year))?;
    let selection = Selection::new(year, !args.absolute, args.swing_only);

    let loaded = super::load(&args.config)?;
    let dashboard = Dashboard::with_selection(loaded.store, loaded.registry, selection)
        .with_context(|| format!("[render] cannot compute view for {selection:?}"))?
        .with_size(loaded.config.map.width, loaded.config.map.height);

    let map = dashboard.map();
    let out_path = args.output.clone().unwrap_or_else(|| match args.format {
        MapFormat::VegaLite => PathBuf::from("./map.json"),
        MapFormat::Svg => PathBuf::from("./map.svg"),
    });

    info!("[render] writing {} states to {}", map.marks.len(), out_path.display());
    match args.format {
        MapFormat::VegaLite => map.write_vega_lite(&out_path)?,
        MapFormat::Svg => map.write_svg(&out_path)?,
    }

    if let Some(table_path) = &args.table {
        let table = dashboard.table()?;
        info!("[render] writing {} table rows to {}", table.len(), table_path.display());
        table.write_csv(table_path)?;
    }

    Ok(())
}
