//! `pv-cli` — run a Dijkstra/A* comparison and print the report as JSON.
//!
//! ```text
//! pv-cli grid --grid maze.txt --start 0,0 --goal 9,9
//! pv-cli osm --place "Berlin, Germany" --network walk \
//!            --start 52.5163,13.3777 --goal 52.5219,13.4132 --repeat 3
//! ```
//!
//! Logs go to stderr (`RUST_LOG` controls the level, default `info`), so
//! stdout holds only the JSON report.

mod config;

use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pv_compare::{compare_grid, compare_place};
use pv_grid::GridMap;
use pv_spatial::GraphCache;
use pv_spatial::osm::PbfDirectory;

use crate::config::{Cli, Command, Config, GridArgs, OsmArgs};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match cli.config.as_deref() {
        Some(path) => Config::load(path)?,
        None => {
            info!("No config file specified, using default config");
            Config::default()
        }
    };

    let report = match &cli.command {
        Command::Grid(args) => run_grid(args)?,
        Command::Osm(args) => run_osm(config.override_from_command_line(args), args)?,
    };
    println!("{report}");
    Ok(())
}

fn run_grid(args: &GridArgs) -> anyhow::Result<String> {
    let text = std::fs::read_to_string(&args.grid)
        .with_context(|| format!("cannot read grid file {}", args.grid.display()))?;
    let grid = GridMap::parse_ascii(&text)
        .with_context(|| format!("invalid grid file {}", args.grid.display()))?;
    grid.check_endpoint(args.start).context("invalid start cell")?;
    grid.check_endpoint(args.goal).context("invalid goal cell")?;

    info!(height = grid.height(), width = grid.width(), "grid loaded");
    let report = compare_grid(&grid, args.start, args.goal);
    Ok(serde_json::to_string_pretty(&report)?)
}

fn run_osm(config: Config, args: &OsmArgs) -> anyhow::Result<String> {
    let cache = GraphCache::new(PbfDirectory::new(&config.data_dir));

    let mut last = None;
    for iteration in 1..=args.repeat.max(1) {
        let started = Instant::now();
        let report = compare_place(
            &cache,
            &args.place,
            &args.network,
            args.start,
            args.goal,
            &config.compare,
        )
        .with_context(|| format!("route comparison failed for {:?}", args.place))?;
        info!(
            iteration,
            elapsed_ms = started.elapsed().as_millis() as u64,
            graph_builds = cache.build_count(),
            "query complete"
        );
        last = Some(report);
    }

    let report = last.context("no query was run")?;
    Ok(serde_json::to_string_pretty(&report)?)
}
