//! Read-only search view over a [`RoadNetwork`].
//!
//! The network stores every directed edge it was given, including parallel
//! edges and edges without a known length.  `RoadGraph` exposes the
//! simple-graph view the search algorithms need: one `(neighbor, metres)`
//! pair per adjacent node, using the shortest usable parallel edge.

use std::sync::Arc;

use pv_core::{EdgeId, GeoPoint, Graph, Heuristic, NodeId};

use crate::network::RoadNetwork;

/// Cheaply clonable handle to an immutable road network.
#[derive(Clone)]
pub struct RoadGraph {
    network: Arc<RoadNetwork>,
}

impl RoadGraph {
    pub fn new(network: Arc<RoadNetwork>) -> Self {
        Self { network }
    }

    /// The underlying network.
    pub fn network(&self) -> &Arc<RoadNetwork> {
        &self.network
    }

    pub fn node_count(&self) -> usize {
        self.network.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.network.edge_count()
    }

    // ── Geography ─────────────────────────────────────────────────────────

    #[inline]
    pub fn position(&self, node: NodeId) -> GeoPoint {
        self.network.node_pos[node.index()]
    }

    /// `(lat, lon)` of `node`.
    #[inline]
    pub fn to_latlon(&self, node: NodeId) -> (f64, f64) {
        let p = self.position(node);
        (p.lat, p.lon)
    }

    /// Straight-line (great-circle) distance in metres.  Never exceeds the
    /// road distance, since every edge length is summed along its geometry.
    #[inline]
    pub fn heuristic_m(&self, node: NodeId, goal: NodeId) -> f64 {
        self.position(node).distance_m(self.position(goal))
    }

    /// Closest graph node to an arbitrary coordinate; `None` for an empty
    /// network.
    pub fn nearest_node(&self, lat: f64, lon: f64) -> Option<NodeId> {
        self.network.snap_to_node(GeoPoint::new(lat, lon))
    }

    /// Identifier of `node` in the source map data.
    pub fn osm_id(&self, node: NodeId) -> Option<i64> {
        self.network.node_osm_id[node.index()]
    }

    // ── Edges ─────────────────────────────────────────────────────────────

    /// Shortest usable edge from `from` to `to`.  Ties resolve to the lowest
    /// `EdgeId`.
    pub fn best_edge(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        let net = &*self.network;
        let mut best: Option<(EdgeId, f64)> = None;
        for e in net.out_edges(from) {
            if net.edge_to[e.index()] != to {
                continue;
            }
            let Some(len) = net.edge_length_m[e.index()] else {
                continue;
            };
            if best.is_none_or(|(_, b)| len < b) {
                best = Some((e, len));
            }
        }
        best.map(|(e, _)| e)
    }

    /// `[lat, lon]` polyline for the road segment `from → to`.
    ///
    /// Uses the best edge's geometry when it has one, evenly downsampled to
    /// at most `max_points` samples plus the final point.  Falls back to a
    /// straight segment between the two node positions.
    pub fn edge_polyline(&self, from: NodeId, to: NodeId, max_points: usize) -> Vec<[f64; 2]> {
        let geometry = self
            .best_edge(from, to)
            .and_then(|e| self.network.edge_geometry[e.index()].as_deref());

        match geometry {
            Some(coords) if coords.len() >= 2 => downsample(coords, max_points),
            _ => vec![self.position(from).to_lat_lon(), self.position(to).to_lat_lon()],
        }
    }
}

/// Keep every `len / max_points`-th point and always the last one.
fn downsample(coords: &[GeoPoint], max_points: usize) -> Vec<[f64; 2]> {
    if coords.len() <= max_points {
        return coords.iter().map(|p| p.to_lat_lon()).collect();
    }
    let step = (coords.len() / max_points.max(1)).max(1);
    let mut out: Vec<[f64; 2]> = coords.iter().step_by(step).map(|p| p.to_lat_lon()).collect();
    if let Some(last) = coords.last() {
        if out.last() != Some(&last.to_lat_lon()) {
            out.push(last.to_lat_lon());
        }
    }
    out
}

impl Graph for RoadGraph {
    type Node = NodeId;

    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        let net = &*self.network;
        // Out-degrees are tiny, so a linear scan beats hashing here.
        let mut out: Vec<(NodeId, f64)> = Vec::with_capacity(net.out_degree(node));
        for e in net.out_edges(node) {
            let Some(len) = net.edge_length_m[e.index()] else {
                continue;
            };
            let to = net.edge_to[e.index()];
            match out.iter_mut().find(|(n, _)| *n == to) {
                Some(slot) if len < slot.1 => slot.1 = len,
                Some(_) => {}
                None => out.push((to, len)),
            }
        }
        out.into_iter()
    }

    fn node_count(&self) -> usize {
        self.network.node_count()
    }
}

impl Heuristic for RoadGraph {
    fn estimate(&self, from: NodeId, goal: NodeId) -> f64 {
        self.heuristic_m(from, goal)
    }
}
