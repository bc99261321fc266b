//! Grid comparison report.

use serde::Serialize;

use pv_grid::{Cell, GridMap};

use crate::compare::{AlgorithmRun, compare};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridMetrics {
    pub visited_count: usize,
    /// Moves along the path; 0 when no path was found.
    pub path_length:   usize,
    pub runtime_ms:    f64,
}

/// One algorithm's result on a grid.  Cells serialize as `[row, col]`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridRun {
    pub visited: Vec<Cell>,
    pub path:    Vec<Cell>,
    pub found:   bool,
    pub metrics: GridMetrics,
}

impl From<AlgorithmRun<Cell>> for GridRun {
    fn from(run: AlgorithmRun<Cell>) -> Self {
        let metrics = GridMetrics {
            visited_count: run.outcome.visited.len(),
            path_length:   run.outcome.path_steps(),
            runtime_ms:    run.runtime_ms(),
        };
        GridRun {
            found: run.outcome.found(),
            visited: run.outcome.visited,
            path: run.outcome.path,
            metrics,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridComparison {
    pub dijkstra: GridRun,
    pub astar:    GridRun,
}

/// Compare both algorithms between two cells of `grid`.
///
/// Endpoints are expected to be in bounds and walkable; check them with
/// [`GridMap::check_endpoint`] first.
pub fn compare_grid(grid: &GridMap, start: Cell, goal: Cell) -> GridComparison {
    let c = compare(grid, start, goal);
    GridComparison {
        dijkstra: c.dijkstra.into(),
        astar:    c.astar.into(),
    }
}
