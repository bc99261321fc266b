//! Heuristic-guided search (A*).
//!
//! Same relaxation discipline as [`dijkstra`](crate::dijkstra), but the
//! frontier is ordered by `f = g + h(node, target)`.
//!
//! # Stale entries
//!
//! Alongside `g` the search keeps `best_f`, the lowest priority ever pushed
//! for each node.  A popped entry whose priority differs from `best_f[node]`
//! was superseded by a later push and is discarded.  Since `h` is fixed per
//! node, a lower `g` always means a lower `f`, so this accepts exactly the
//! entries that carry the node's current best `g`.
//!
//! # Re-expansion
//!
//! Nodes are not closed once expanded.  With an admissible but inconsistent
//! heuristic a node can be reached more cheaply after its first expansion;
//! it is then expanded again so the result stays optimal.  It appears only
//! once in the visit order.

use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use pv_core::Graph;

use crate::outcome::SearchOutcome;
use crate::path::reconstruct;
use crate::queue::QueueEntry;

/// Minimum-cost path from `source` to `target`, guided by `heuristic(node,
/// goal)`.
///
/// `heuristic` must be admissible for the result to be optimal.  With
/// `source == target` the search returns `[source]` at cost 0 immediately,
/// with nothing visited and without calling `heuristic`.
pub fn astar<G, H>(graph: &G, source: G::Node, target: G::Node, mut heuristic: H)
    -> SearchOutcome<G::Node>
where
    G: Graph,
    H: FnMut(G::Node, G::Node) -> f64,
{
    if source == target {
        return SearchOutcome {
            path: vec![source],
            visited: Vec::new(),
            explored_edges: Vec::new(),
            cost: Some(0.0),
        };
    }

    let mut g_score: FxHashMap<G::Node, f64> = FxHashMap::default();
    let mut best_f: FxHashMap<G::Node, OrderedFloat<f64>> = FxHashMap::default();
    let mut came_from: FxHashMap<G::Node, G::Node> = FxHashMap::default();
    let mut seen: FxHashSet<G::Node> = FxHashSet::default();
    let mut visited: Vec<G::Node> = Vec::new();
    let mut explored_edges: Vec<(G::Node, G::Node)> = Vec::new();
    let mut heap: BinaryHeap<QueueEntry<G::Node>> = BinaryHeap::new();

    let start_f = heuristic(source, target);
    g_score.insert(source, 0.0);
    best_f.insert(source, OrderedFloat(start_f));
    heap.push(QueueEntry::new(start_f, 0.0, source));

    let mut reached: Option<f64> = None;

    while let Some(QueueEntry { priority, g, node: u }) = heap.pop() {
        if best_f.get(&u) != Some(&priority) {
            continue;
        }
        if seen.insert(u) {
            visited.push(u);
        }

        if u == target {
            reached = Some(g);
            break;
        }

        for (v, cost) in graph.neighbors(u) {
            let tentative = g + cost;
            if g_score.get(&v).is_some_and(|&best| tentative >= best) {
                continue;
            }
            // A lower `g` whose `f` rounds to the current `best_f` is
            // dropped whole, so `g_score` and `came_from` always describe the
            // entry that will be expanded.
            let f = OrderedFloat(tentative + heuristic(v, target));
            if best_f.get(&v).is_some_and(|&best| f >= best) {
                continue;
            }
            g_score.insert(v, tentative);
            came_from.insert(v, u);
            best_f.insert(v, f);
            explored_edges.push((u, v));
            heap.push(QueueEntry { priority: f, g: tentative, node: v });
        }
    }

    debug!(
        algorithm = "astar",
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
