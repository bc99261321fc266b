//! `pv-search` — shortest-path search over any [`pv_core::Graph`].
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`dijkstra`] | Uniform-cost search                                       |
//! | [`astar`]    | Heuristic-guided search                                   |
//! | [`outcome`]  | `SearchOutcome` — path, visit order, relaxation trace     |
//! | [`queue`]    | Min-priority queue entry shared by both algorithms        |
//!
//! Both algorithms use lazy deletion: every improving relaxation pushes a new
//! queue entry, and entries made obsolete by a later improvement are skipped
//! when popped.
//!
//! # Pluggable algorithms
//!
//! Callers that choose an algorithm at run time go through [`PathSearch`] or
//! the [`Algorithm`] enum rather than calling the free functions directly:
//!
//! ```
//! use pv_core::Graph;
//! use pv_search::{Algorithm, PathSearch, SearchOutcome};
//! # use pv_core::Heuristic;
//! # struct Pair;
//! # impl Graph for Pair {
//! #     type Node = u8;
//! #     fn neighbors(&self, n: u8) -> impl Iterator<Item = (u8, f64)> + '_ {
//! #         (n == 0).then_some((1, 5.0)).into_iter()
//! #     }
//! #     fn node_count(&self) -> usize { 2 }
//! # }
//! # impl Heuristic for Pair {
//! #     fn estimate(&self, _: u8, _: u8) -> f64 { 0.0 }
//! # }
//!
//! let algo: Algorithm = "astar".parse().unwrap();
//! let out: SearchOutcome<u8> = algo.search(&Pair, 0, 1);
//! assert_eq!(out.path, vec![0, 1]);
//! assert_eq!(out.cost, Some(5.0));
//! ```

pub mod astar;
pub mod dijkstra;
pub mod outcome;
pub mod queue;

mod path;


use std::fmt;
use std::str::FromStr;

use pv_core::Heuristic;

pub use astar::astar;
pub use dijkstra::dijkstra;
pub use outcome::SearchOutcome;

// ── PathSearch ────────────────────────────────────────────────────────────────

/// A shortest-path algorithm usable over any graph with a heuristic.
///
/// Algorithms that ignore the heuristic (Dijkstra) still take a
/// [`Heuristic`] graph so that every implementation is interchangeable.
pub trait PathSearch {
    /// Stable lowercase name, used in reports and on the command line.
    fn name(&self) -> &'static str;

    fn search<G: Heuristic>(&self, graph: &G, source: G::Node, target: G::Node)
        -> SearchOutcome<G::Node>;
}

/// Uniform-cost search.  See [`dijkstra()`].
#[derive(Copy, Clone, Debug, Default)]
pub struct Dijkstra;

impl PathSearch for Dijkstra {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn search<G: Heuristic>(&self, graph: &G, source: G::Node, target: G::Node)
        -> SearchOutcome<G::Node>
    {
        dijkstra(graph, source, target)
    }
}

/// A* guided by the graph's own [`Heuristic::estimate`].  See [`astar()`].
#[derive(Copy, Clone, Debug, Default)]
pub struct AStar;

impl PathSearch for AStar {
    fn name(&self) -> &'static str {
        "astar"
    }

    fn search<G: Heuristic>(&self, graph: &G, source: G::Node, target: G::Node)
        -> SearchOutcome<G::Node>
    {
        astar(graph, source, target, |node, goal| graph.estimate(node, goal))
    }
}

// ── Algorithm ─────────────────────────────────────────────────────────────────

/// Run-time choice between the available algorithms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Dijkstra,
    AStar,
}

impl Algorithm {
    /// Every algorithm, in report order.
    pub const ALL: [Algorithm; 2] = [Algorithm::Dijkstra, Algorithm::AStar];

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => Dijkstra.name(),
            Algorithm::AStar    => AStar.name(),
        }
    }
}

impl PathSearch for Algorithm {
    fn name(&self) -> &'static str {
        self.as_str()
    }

    fn search<G: Heuristic>(&self, graph: &G, source: G::Node, target: G::Node)
        -> SearchOutcome<G::Node>
    {
        match self {
            Algorithm::Dijkstra => Dijkstra.search(graph, source, target),
            Algorithm::AStar    => AStar.search(graph, source, target),
        }
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm {0:?} (expected \"dijkstra\" or \"astar\")")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar"    => Ok(Algorithm::AStar),
            other      => Err(UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
