use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use clap::{Args, Parser, Subcommand};
use serde::Deserialize;

use pv_compare::CompareConfig;
use pv_grid::Cell;

#[derive(Parser, Debug)]
#[command(
    name = "pv-cli",
    about = "Compare Dijkstra and A* on a grid map or a road network.",
    version
)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to a YAML config file")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search an ASCII grid map (`.` free, `#` wall).
    Grid(GridArgs),
    /// Search the road network of a place.
    Osm(OsmArgs),
}

#[derive(Args, Debug)]
pub struct GridArgs {
    #[arg(long, help = "Path to the grid map file")]
    pub grid: PathBuf,

    #[arg(long, value_parser = parse_cell, help = "Start cell as ROW,COL")]
    pub start: Cell,

    #[arg(long, value_parser = parse_cell, help = "Goal cell as ROW,COL")]
    pub goal: Cell,
}

#[derive(Args, Debug)]
pub struct OsmArgs {
    #[arg(long, help = "Place name, resolved to <data-dir>/<slug>.osm.pbf")]
    pub place: String,

    #[arg(long, default_value = "drive", help = "Network type: drive, drive_service, walk, bike, all")]
    pub network: String,

    #[arg(long, value_parser = parse_latlon, allow_hyphen_values = true, help = "Start as LAT,LON")]
    pub start: (f64, f64),

    #[arg(long, value_parser = parse_latlon, allow_hyphen_values = true, help = "Goal as LAT,LON")]
    pub goal: (f64, f64),

    #[arg(long, help = "Directory holding .osm.pbf extracts")]
    pub data_dir: Option<PathBuf>,

    #[arg(long, default_value_t = 1, help = "Run the query this many times to show cache reuse")]
    pub repeat: usize,

    #[arg(long, help = "Maximum explored edges rendered per algorithm")]
    pub max_explored_edges: Option<usize>,

    #[arg(long, help = "Maximum points per explored-edge polyline")]
    pub max_points_per_edge: Option<usize>,
}

/// Settings loadable from a YAML file.  Every field is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_dir: PathBuf,
    pub compare:  CompareConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            compare:  CompareConfig::default(),
        }
    }
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        Self::from_yaml_str(&text)
            .with_context(|| format!("error with config file: {}", path.display()))
    }

    /// Command-line flags take precedence over file values.
    pub fn override_from_command_line(mut self, args: &OsmArgs) -> Self {
        if let Some(dir) = &args.data_dir {
            self.data_dir = dir.clone();
        }
        if let Some(n) = args.max_explored_edges {
            self.compare.max_explored_edges = n;
        }
        if let Some(n) = args.max_points_per_edge {
            self.compare.max_points_per_edge = n;
        }
        self
    }
}

fn split_pair(s: &str) -> anyhow::Result<(&str, &str)> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("expected two comma-separated values, got {s:?}"))?;
    Ok((a.trim(), b.trim()))
}

pub fn parse_cell(s: &str) -> anyhow::Result<Cell> {
    let (r, c) = split_pair(s)?;
    Ok(Cell::new(
        r.parse().with_context(|| format!("invalid row {r:?}"))?,
        c.parse().with_context(|| format!("invalid column {c:?}"))?,
    ))
}

pub fn parse_latlon(s: &str) -> anyhow::Result<(f64, f64)> {
    let (lat, lon) = split_pair(s)?;
    let lat: f64 = lat.parse().with_context(|| format!("invalid latitude {lat:?}"))?;
    let lon: f64 = lon.parse().with_context(|| format!("invalid longitude {lon:?}"))?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(anyhow!("coordinate ({lat}, {lon}) is out of range"));
    }
    Ok((lat, lon))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parses_cells_and_coordinates() {
        assert_eq!(parse_cell("3, 4").unwrap(), Cell::new(3, 4));
        assert!(parse_cell("3").is_err());
        assert!(parse_cell("-1,2").is_err());

        assert_eq!(parse_latlon("52.52,-13.40").unwrap(), (52.52, -13.40));
        assert!(parse_latlon("95,0").is_err());
        assert!(parse_latlon("north,east").is_err());
    }

    #[test]
    fn parses_osm_command_line() {
        let cli = Cli::try_parse_from([
            "pv-cli", "osm", "--place", "Berlin", "--start", "52.5,13.4", "--goal", "-33.9,151.2",
            "--repeat", "3",
        ])
        .unwrap();
        let Command::Osm(args) = cli.command else {
            panic!("expected osm subcommand");
        };
        assert_eq!(args.network, "drive");
        assert_eq!(args.goal, (-33.9, 151.2));
        assert_eq!(args.repeat, 3);
    }

    #[test]
    fn loads_yaml_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "data_dir: /srv/extracts\ncompare:\n  max_explored_edges: 500").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/extracts"));
        assert_eq!(config.compare.max_explored_edges, 500);
        assert_eq!(config.compare.max_points_per_edge, 120);
    }

    #[test]
    fn missing_or_malformed_file_is_an_error() {
        assert!(Config::load(Path::new("/nonexistent/pv-cli.yaml")).is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "compare: [not, a, map]").unwrap();
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn command_line_overrides_file() {
        let cli = Cli::try_parse_from([
            "pv-cli", "osm", "--place", "X", "--start", "0,0", "--goal", "1,1",
            "--data-dir", "/tmp/maps", "--max-points-per-edge", "10",
        ])
        .unwrap();
        let Command::Osm(args) = cli.command else {
            panic!("expected osm subcommand");
        };
        let config = Config::from_yaml_str("data_dir: /srv\n").unwrap().override_from_command_line(&args);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/maps"));
        assert_eq!(config.compare.max_points_per_edge, 10);
        assert_eq!(config.compare.max_explored_edges, 20_000);
    }
}
