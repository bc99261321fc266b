//! Uniform-cost search (Dijkstra).
//!
//! # Algorithm
//!
//! 1. `dist[source] = 0`; push `(0, source)`.
//! 2. Pop the cheapest entry `(g, u)`.  Skip it if `u` is already finalized
//!    or `g` exceeds `dist[u]` (a stale entry left behind by a later
//!    improvement).
//! 3. Finalize `u` and append it to the visit order.  Stop if `u == target`.
//! 4. For each `(v, c)` in `neighbors(u)`: if `dist[u] + c < dist[v]`,
//!    record the improvement, set `came_from[v] = u`, and push the new entry.
//!
//! The search ends when the target is finalized or the frontier is empty, in
//! which case every node reachable from `source` has been visited.

use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use pv_core::Graph;

use crate::outcome::SearchOutcome;
use crate::path::reconstruct;
use crate::queue::QueueEntry;

/// Minimum-cost path from `source` to `target`.
///
/// Never fails: an unreachable target yields an outcome with an empty path
/// and `cost == None`.  With `source == target` the result is `[source]` at
/// cost 0, and `source` is the only visited node.
pub fn dijkstra<G: Graph>(graph: &G, source: G::Node, target: G::Node) -> SearchOutcome<G::Node> {
    let mut dist: FxHashMap<G::Node, f64> = FxHashMap::default();
    let mut came_from: FxHashMap<G::Node, G::Node> = FxHashMap::default();
    let mut finalized: FxHashSet<G::Node> = FxHashSet::default();
    let mut visited: Vec<G::Node> = Vec::new();
    let mut explored_edges: Vec<(G::Node, G::Node)> = Vec::new();
    let mut heap: BinaryHeap<QueueEntry<G::Node>> = BinaryHeap::new();

    dist.insert(source, 0.0);
    heap.push(QueueEntry::new(0.0, 0.0, source));

    let mut reached: Option<f64> = None;

    while let Some(QueueEntry { g, node: u, .. }) = heap.pop() {
        if finalized.contains(&u) || dist.get(&u).is_some_and(|&best| g > best) {
            continue;
        }
        finalized.insert(u);
        visited.push(u);

        if u == target {
            reached = Some(g);
            break;
        }

        for (v, cost) in graph.neighbors(u) {
            let candidate = g + cost;
            if dist.get(&v).is_none_or(|&best| candidate < best) {
                dist.insert(v, candidate);
                came_from.insert(v, u);
                explored_edges.push((u, v));
                heap.push(QueueEntry::new(candidate, candidate, v));
            }
        }
    }

    debug!(
        algorithm = "dijkstra",
        visited = visited.len(),
        relaxations = explored_edges.len(),
        found = reached.is_some(),
        cost = ?reached,
        "search finished"
    );

    match reached {
        Some(cost) => SearchOutcome {
            path: reconstruct(&came_from, source, target),
            visited,
            explored_edges,
            cost: Some(cost),
        },
        None => SearchOutcome::not_found(visited, explored_edges),
    }
}
