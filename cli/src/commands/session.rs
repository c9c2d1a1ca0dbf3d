use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::{anyhow, bail, Context, Result};
use log::{info, warn};
use turnoutmap::{Dashboard, ElectionYear};

use crate::cli::{Cli, SessionArgs};

/// One line of session input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Year(ElectionYear),
    Relative(bool),
    Swing(bool),
    Show,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let command = words.next().ok_or_else(|| anyhow!("empty command"))?;
        let arg = words.next();
        if words.next().is_some() { bail!("too many arguments in {line:?}") }

        let toggle = |arg: Option<&str>| match arg {
            Some("on" | "true" | "yes") => Ok(true),
            Some("off" | "false" | "no") => Ok(false),
            other => Err(anyhow!("expected on|off, got {other:?}")),
        };

        match command.to_ascii_lowercase().as_str() {
            "year" => {
                let year = arg.ok_or_else(|| anyhow!("year needs a value"))?;
                Ok(SessionCommand::Year(year.parse()?))
            }
            "relative" => Ok(SessionCommand::Relative(toggle(arg)?)),
            "swing" => Ok(SessionCommand::Swing(toggle(arg)?)),
            "show" => Ok(SessionCommand::Show),
            "quit" | "exit" => Ok(SessionCommand::Quit),
            other => bail!("unknown command {other:?} (year, relative, swing, show, quit)"),
        }
    }
}

pub fn run(_cli: &Cli, args: &SessionArgs) -> Result<()> {
    let out_dir = args.out_dir.clone().unwrap_or(".".into());
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("[session] cannot create {}", out_dir.display()))?;

    let loaded = super::load(&args.config)?;
    let dashboard = Dashboard::new(loaded.store, loaded.registry)
        .context("[session] cannot compute the default view")?
        .with_size(loaded.config.map.width, loaded.config.map.height);

    let stdin = io::stdin();
    run_session(dashboard, stdin.lock(), io::stdout(), &out_dir)
}

/// Drive a dashboard from line commands, re-rendering after every accepted change.
/// Bad commands and failed changes are reported and the session continues.
pub fn run_session(mut dashboard: Dashboard, input: impl BufRead, mut output: impl Write, out_dir: &Path) -> Result<()> {
    render_outputs(&dashboard, out_dir)?;
    write_status(&dashboard, &mut output)?;

    for line in input.lines() {
        let line = line.context("[session] failed to read input")?;
        if line.trim().is_empty() { continue }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "error: {e}")?;
                continue;
            }
        };

        let changed = match command {
            SessionCommand::Quit => break,
            SessionCommand::Show => {
                write_status(&dashboard, &mut output)?;
                continue;
            }
            SessionCommand::Year(year) => dashboard.set_year(year),
            SessionCommand::Relative(on) => dashboard.set_show_relative(on),
            SessionCommand::Swing(on) => dashboard.set_swing_only(on),
        };

        match changed {
            Ok(()) => {
                render_outputs(&dashboard, out_dir)?;
                write_status(&dashboard, &mut output)?;
            }
            Err(e) => {
                warn!("[session] {e}");
                writeln!(output, "error: {e}")?;
            }
        }
    }

    Ok(())
}

fn render_outputs(dashboard: &Dashboard, out_dir: &Path) -> Result<()> {
    let map = dashboard.map();
    let path = |name: &str| -> PathBuf { out_dir.join(name) };

    map.write_vega_lite(&path("map.json"))?;
    map.write_svg(&path("map.svg"))?;
    dashboard.table()?.write_csv(&path("table.csv"))?;

    info!("[session] rendered {} states into {}", map.marks.len(), out_dir.display());
    Ok(())
}

fn write_status(dashboard: &Dashboard, output: &mut impl Write) -> Result<()> {
    let selection = dashboard.selection();
    let view = dashboard.view();
    let missing = view.iter().filter(|row| !row.has_data()).count();
    writeln!(
        output,
        "year={} relative={} swing_only={} states={} no_data={}",
        selection.year,
        if selection.show_relative { "on" } else { "off" },
        if selection.swing_only { "on" } else { "off" },
        view.len(),
        missing,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use geo::{polygon, MultiPolygon};
    use turnoutmap::{DatasetStore, GeoRecord, SwingRegistry, TurnoutRecord};

    use super::*;

    fn square(name: &str, x: f64) -> GeoRecord {
        GeoRecord::new(name, MultiPolygon(vec![polygon![(x: x, y: 30.0), (x: x + 1.0, y: 30.0), (x: x + 1.0, y: 31.0), (x: x, y: 31.0)]]))
    }

    fn dashboard() -> Dashboard {
        let store = DatasetStore::builder()
            .geo(vec![square("Nevada", -117.0), square("Utah", -112.0)])
            .turnout(ElectionYear::Y2012, vec![TurnoutRecord::new("Nevada", 57.1, -1.0), TurnoutRecord::new("Utah", 56.1, -2.0)])
            .turnout(ElectionYear::Y2016, vec![TurnoutRecord::new("Nevada", 57.3, -2.5)])
            .build()
            .unwrap();
        Dashboard::new(Arc::new(store), Arc::new(SwingRegistry::default())).unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!("year 2016".parse::<SessionCommand>().unwrap(), SessionCommand::Year(ElectionYear::Y2016));
        assert_eq!("relative off".parse::<SessionCommand>().unwrap(), SessionCommand::Relative(false));
        assert_eq!("SWING on".parse::<SessionCommand>().unwrap(), SessionCommand::Swing(true));
        assert_eq!("quit".parse::<SessionCommand>().unwrap(), SessionCommand::Quit);
        assert!("year 2008".parse::<SessionCommand>().is_err());
        assert!("swing maybe".parse::<SessionCommand>().is_err());
        assert!("zoom in".parse::<SessionCommand>().is_err());
    }

    #[test]
    fn session_rerenders_on_each_change() {
        let dir = tempfile::tempdir().unwrap();
        let input = "swing on\nyear 2016\nyear 2020\nbogus\nshow\nquit\nyear 2012\n";
        let mut output = Vec::new();

        run_session(dashboard(), input.as_bytes(), &mut output, dir.path()).unwrap();

        let output = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "year=2012 relative=on swing_only=off states=2 no_data=0");
        assert_eq!(lines[1], "year=2012 relative=on swing_only=on states=1 no_data=0");
        assert_eq!(lines[2], "year=2016 relative=on swing_only=on states=1 no_data=0");
        assert!(lines[3].starts_with("error: no turnout dataset loaded for 2020"));
        assert!(lines[4].starts_with("error: unknown command"));
        assert_eq!(lines[5], lines[2]);
        assert_eq!(lines.len(), 6);

        for name in ["map.json", "map.svg", "table.csv"] {
            assert!(dir.path().join(name).exists(), "{name} missing");
        }
        let table = fs::read_to_string(dir.path().join("table.csv")).unwrap();
        assert_eq!(table.lines().count(), 2); // header + Nevada, the 2016 dataset
    }
}
