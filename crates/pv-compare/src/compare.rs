//! Graph-independent half of a comparison: run both searches and time them.

use std::time::{Duration, Instant};

use tracing::debug;

use pv_core::Heuristic;
use pv_search::{Algorithm, PathSearch, SearchOutcome};

/// One algorithm's outcome and wall-clock duration.
#[derive(Clone, Debug)]
pub struct AlgorithmRun<N> {
    pub algorithm: Algorithm,
    pub outcome:   SearchOutcome<N>,
    pub runtime:   Duration,
}

impl<N> AlgorithmRun<N> {
    pub fn runtime_ms(&self) -> f64 {
        self.runtime.as_secs_f64() * 1000.0
    }
}

/// Both runs over the same graph and endpoints.
#[derive(Clone, Debug)]
pub struct Comparison<N> {
    pub dijkstra: AlgorithmRun<N>,
    pub astar:    AlgorithmRun<N>,
}

fn timed<G>(algorithm: Algorithm, graph: &G, source: G::Node, target: G::Node)
    -> AlgorithmRun<G::Node>
where
    G: Heuristic,
{
    let started = Instant::now();
    let outcome = algorithm.search(graph, source, target);
    AlgorithmRun { algorithm, outcome, runtime: started.elapsed() }
}

/// Run Dijkstra and A* from `source` to `target`.
///
/// Each search owns its own state, so the two runs share nothing but the
/// read-only graph.  They run one after the other unless the `parallel`
/// feature is enabled.
pub fn compare<G>(graph: &G, source: G::Node, target: G::Node) -> Comparison<G::Node>
where
    G: Heuristic + Sync,
    G::Node: Send,
{
    #[cfg(not(feature = "parallel"))]
    let (dijkstra, astar) = (
        timed(Algorithm::Dijkstra, graph, source, target),
        timed(Algorithm::AStar, graph, source, target),
    );

    #[cfg(feature = "parallel")]
    let (dijkstra, astar) = rayon::join(
        move || timed(Algorithm::Dijkstra, graph, source, target),
        move || timed(Algorithm::AStar, graph, source, target),
    );

    debug!(
        ?source,
        ?target,
        dijkstra_ms = dijkstra.runtime_ms(),
        astar_ms = astar.runtime_ms(),
        dijkstra_visited = dijkstra.outcome.visited.len(),
        astar_visited = astar.outcome.visited.len(),
        "comparison finished"
    );

    Comparison { dijkstra, astar }
}
