use std::path::PathBuf;

/// Turnout choropleth CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "turnoutmap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Render the map and table for one selection
    Render(RenderArgs),

    /// Interactive session: read selection changes from stdin, re-render on each
    Session(SessionArgs),
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapFormat {
    /// Vega-Lite JSON for an external renderer
    VegaLite,
    /// Standalone SVG choropleth
    Svg,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Dashboard configuration file (JSON)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Election year: 2012, 2016, 2020 or 2024
    #[arg(short, long, default_value = "2012")]
    pub year: String,

    /// Color by absolute turnout instead of relative turnout
    #[arg(long)]
    pub absolute: bool,

    /// Only draw that year's swing states
    #[arg(long)]
    pub swing_only: bool,

    /// Map output format
    #[arg(short, long, value_enum, default_value_t = MapFormat::VegaLite)]
    pub format: MapFormat,

    /// Output map file, defaults to "./map.json" or "./map.svg"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Also write the year's data table as CSV
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub table: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct SessionArgs {
    /// Dashboard configuration file (JSON)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Directory receiving map.json, map.svg and table.csv, defaults to "."
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub out_dir: Option<PathBuf>,
}
