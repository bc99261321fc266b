//! The adjacency contract shared by every searchable graph.
//!
//! Search algorithms in `pv-search` are written against these traits only,
//! so the same implementation runs over a walls/free grid and over a road
//! network without knowing which one it was handed.
//!
//! # Contract
//!
//! - [`Graph::neighbors`] yields a finite sequence of `(neighbor, cost)`
//!   pairs.  Costs are finite and non-negative.  A node that is not part of
//!   the graph never appears as a neighbor.
//! - [`Heuristic::estimate`] must be admissible: it never exceeds the true
//!   remaining cost to `goal`.  A* is only optimal under that condition.
//! - Graphs are immutable for the duration of a search.

use std::fmt::Debug;
use std::hash::Hash;

/// A weighted directed graph that can be expanded one node at a time.
pub trait Graph {
    /// Vertex identity.  Cheap to copy and usable as a hash key.
    type Node: Copy + Eq + Hash + Debug;

    /// Outgoing `(neighbor, edge cost)` pairs of `node`.
    fn neighbors(&self, node: Self::Node) -> impl Iterator<Item = (Self::Node, f64)> + '_;

    /// Total number of vertices, used for capacity hints and as the upper
    /// bound on the number of nodes a search can finalize.
    fn node_count(&self) -> usize;
}

/// A [`Graph`] that can also estimate the remaining cost between two nodes.
pub trait Heuristic: Graph {
    /// Lower bound on the cost of any path from `from` to `goal`.
    fn estimate(&self, from: Self::Node, goal: Self::Node) -> f64;
}
