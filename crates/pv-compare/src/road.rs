//! Road-network comparison report.
//!
//! Paths are rendered as `[lat, lon]` polylines.  Each explored edge becomes
//! its own polyline following the road geometry, so a front-end can animate
//! the search spreading along real streets.

use serde::Serialize;
use tracing::{debug, info};

use pv_core::NodeId;
use pv_spatial::{GraphCache, GraphSource, RoadGraph};

use crate::compare::{AlgorithmRun, compare};
use crate::config::CompareConfig;
use crate::error::{CompareError, CompareResult};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoadMetrics {
    pub visited_count:        usize,
    pub path_nodes_count:     usize,
    /// Relaxations recorded by the search, before any truncation.
    pub explored_edges_count: usize,
    pub runtime_ms:           f64,
}

/// One algorithm's result on a road network.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoadRun {
    pub path:                     Vec<[f64; 2]>,
    pub explored_edges:           Vec<Vec<[f64; 2]>>,
    /// `true` when `explored_edges` was cut to the configured maximum.
    pub explored_edges_truncated: bool,
    /// Route length in metres; `null` when no route exists.
    pub distance_m:               Option<f64>,
    pub found:                    bool,
    pub metrics:                  RoadMetrics,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoadMeta {
    pub start_node:        NodeId,
    pub goal_node:         NodeId,
    pub start_osm_id:      Option<i64>,
    pub goal_osm_id:       Option<i64>,
    pub graph_nodes_count: usize,
    pub graph_edges_count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoadComparison {
    pub dijkstra: RoadRun,
    pub astar:    RoadRun,
    pub meta:     RoadMeta,
}

fn render(graph: &RoadGraph, run: AlgorithmRun<NodeId>, config: &CompareConfig) -> RoadRun {
    let outcome = &run.outcome;

    let path = outcome
        .path
        .iter()
        .map(|&n| {
            let (lat, lon) = graph.to_latlon(n);
            [lat, lon]
        })
        .collect();

    // Truncation keeps the chronological head of the trace.
    let kept = outcome.explored_edges.len().min(config.max_explored_edges);
    let explored_edges = outcome.explored_edges[..kept]
        .iter()
        .map(|&(u, v)| graph.edge_polyline(u, v, config.max_points_per_edge))
        .collect();

    RoadRun {
        path,
        explored_edges,
        explored_edges_truncated: kept < outcome.explored_edges.len(),
        distance_m: outcome.cost,
        found: outcome.found(),
        metrics: RoadMetrics {
            visited_count:        outcome.visited.len(),
            path_nodes_count:     outcome.path.len(),
            explored_edges_count: outcome.explored_edges.len(),
            runtime_ms:           run.runtime_ms(),
        },
    }
}

/// Compare both algorithms between two nodes of `graph`.
pub fn compare_road(
    graph: &RoadGraph,
    start: NodeId,
    goal: NodeId,
    config: &CompareConfig,
) -> RoadComparison {
    let c = compare(graph, start, goal);
    RoadComparison {
        dijkstra: render(graph, c.dijkstra, config),
        astar:    render(graph, c.astar, config),
        meta: RoadMeta {
            start_node:        start,
            goal_node:         goal,
            start_osm_id:      graph.osm_id(start),
            goal_osm_id:       graph.osm_id(goal),
            graph_nodes_count: graph.node_count(),
            graph_edges_count: graph.edge_count(),
        },
    }
}

/// Snap two `(lat, lon)` coordinates to their nearest graph nodes, then
/// [`compare_road`].
///
/// # Errors
///
/// [`CompareError::EmptyGraph`] if the network has no nodes.
pub fn compare_road_latlon(
    graph: &RoadGraph,
    start: (f64, f64),
    goal: (f64, f64),
    config: &CompareConfig,
) -> CompareResult<RoadComparison> {
    let s = graph.nearest_node(start.0, start.1).ok_or(CompareError::EmptyGraph)?;
    let g = graph.nearest_node(goal.0, goal.1).ok_or(CompareError::EmptyGraph)?;
    debug!(start_node = %s, goal_node = %g, "snapped endpoints");
    Ok(compare_road(graph, s, g, config))
}

/// Fetch (or build) the graph for `place`/`network` from `cache`, then
/// [`compare_road_latlon`].
///
/// # Errors
///
/// Graph build failures as [`CompareError::Spatial`], and
/// [`CompareError::EmptyGraph`].
pub fn compare_place<S: GraphSource>(
    cache: &GraphCache<S>,
    place: &str,
    network: &str,
    start: (f64, f64),
    goal: (f64, f64),
    config: &CompareConfig,
) -> CompareResult<RoadComparison> {
    let graph = cache.get_graph(place, network)?;
    let report = compare_road_latlon(&graph, start, goal, config)?;
    info!(
        place = place.trim(),
        network = network.trim(),
        dijkstra_found = report.dijkstra.found,
        astar_found = report.astar.found,
        "route comparison ready"
    );
    Ok(report)
}
