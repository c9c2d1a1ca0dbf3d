mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{render, session};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Render(args) => render::run(&cli, args),
        Commands::Session(args) => session::run(&cli, args),
    }
}

/// `RUST_LOG` wins when set; otherwise -v picks debug and -vv trace.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> anyhow::Result<()> { run() }
