//! Unit tests for pv-compare.

#[cfg(test)]
mod helpers {
    use std::sync::Arc;

    use pv_core::{GeoPoint, NodeId};
    use pv_grid::GridMap;
    use pv_spatial::{RoadGraph, RoadNetwork, RoadNetworkBuilder};

    pub fn open_3x3() -> GridMap {
        GridMap::new(vec![vec![0; 3]; 3])
    }

    pub fn walled_3x3() -> GridMap {
        GridMap::new(vec![vec![0, 0, 0], vec![1, 1, 1], vec![0, 0, 0]])
    }

    /// Three-node street along the equator plus one isolated node:
    ///
    /// ```text
    ///   n0 ── n1 ~~~~ n2          n3 (unconnected)
    /// ```
    ///
    /// `n1 ~ n2` carries an 11-point geometry.
    pub fn street() -> (RoadNetwork, [NodeId; 4]) {
        let mut b = RoadNetworkBuilder::new();
        let n0 = b.add_osm_node(10, GeoPoint::new(0.0, 0.000));
        let n1 = b.add_osm_node(11, GeoPoint::new(0.0, 0.001));
        let n2 = b.add_osm_node(12, GeoPoint::new(0.0, 0.002));
        let n3 = b.add_osm_node(13, GeoPoint::new(0.01, 0.01));

        let l01 = b.node_pos(n0).distance_m(b.node_pos(n1));
        b.add_road(n0, n1, Some(l01), None);

        let mut shape: Vec<GeoPoint> =
            (0..10).map(|i| GeoPoint::new(0.0, 0.001 + i as f64 * 1e-4)).collect();
        shape.push(b.node_pos(n2));
        let l12 = GeoPoint::polyline_length_m(&shape);
        b.add_road(n1, n2, Some(l12), Some(shape));

        (b.build(), [n0, n1, n2, n3])
    }

    pub fn street_graph() -> (RoadGraph, [NodeId; 4]) {
        let (net, ids) = street();
        (RoadGraph::new(Arc::new(net)), ids)
    }
}

// ── Generic comparison ─────────────────────────────────────────────────────────

#[cfg(test)]
mod compare {
    use pv_grid::Cell;
    use pv_search::Algorithm;

    use super::helpers::open_3x3;
    use crate::compare;

    #[test]
    fn runs_both_algorithms() {
        let g = open_3x3();
        let c = compare(&g, Cell::new(0, 0), Cell::new(2, 2));
        assert_eq!(c.dijkstra.algorithm, Algorithm::Dijkstra);
        assert_eq!(c.astar.algorithm, Algorithm::AStar);
        assert_eq!(c.dijkstra.outcome.cost, Some(4.0));
        assert_eq!(c.astar.outcome.cost, Some(4.0));
        assert!(c.dijkstra.runtime_ms() >= 0.0);
    }
}

#[cfg(all(test, feature = "parallel"))]
mod parallel {
    use pv_grid::Cell;

    use super::helpers::{open_3x3, street_graph};
    use crate::compare;

    #[test]
    fn joined_runs_report_both_algorithms() {
        let c = compare(&open_3x3(), Cell::new(0, 0), Cell::new(2, 2));
        assert_eq!(c.dijkstra.outcome.cost, Some(4.0));
        assert_eq!(c.astar.outcome.cost, Some(4.0));

        let (g, [n0, n1, n2, _]) = street_graph();
        let c = compare(&g, n0, n2);
        assert_eq!(c.dijkstra.outcome.path, vec![n0, n1, n2]);
        assert_eq!(c.astar.outcome.path, vec![n0, n1, n2]);
    }
}

// ── Random road networks ──────────────────────────────────────────────────────

#[cfg(test)]
mod agreement {
    use std::sync::Arc;

    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use pv_core::{GeoPoint, NodeId};
    use pv_spatial::{RoadGraph, RoadNetworkBuilder};

    use crate::compare;

    const SPAN: f64 = 0.02;

    fn random_point(rng: &mut SmallRng) -> GeoPoint {
        GeoPoint::new(rng.gen_range(0.0..SPAN), rng.gen_range(0.0..SPAN))
    }

    /// Random network mixing two-way roads, one-way edges and straight
    /// shortcuts parallel to bent roads.  Every length is the length of the
    /// edge's own geometry, so the great-circle heuristic stays admissible.
    fn random_road_graph(rng: &mut SmallRng, nodes: usize, segments: usize)
        -> (RoadGraph, Vec<NodeId>)
    {
        let mut b = RoadNetworkBuilder::with_capacity(nodes, 3 * segments);
        let ids: Vec<NodeId> =
            (0..nodes).map(|i| b.add_osm_node(i as i64, random_point(rng))).collect();

        for _ in 0..segments {
            let a = ids[rng.gen_range(0..nodes)];
            let z = ids[rng.gen_range(0..nodes)];
            if a == z {
                continue;
            }
            let mut shape = vec![b.node_pos(a)];
            for _ in 0..rng.gen_range(1..4) {
                shape.push(random_point(rng));
            }
            shape.push(b.node_pos(z));
            let length = GeoPoint::polyline_length_m(&shape);

            if rng.gen_bool(0.3) {
                b.add_directed_edge(a, z, Some(length), Some(shape));
            } else {
                b.add_road(a, z, Some(length), Some(shape));
            }
            if rng.gen_bool(0.2) {
                let straight = b.node_pos(a).distance_m(b.node_pos(z));
                b.add_directed_edge(a, z, Some(straight), None);
            }
        }
        (RoadGraph::new(Arc::new(b.build())), ids)
    }

    #[test]
    fn random_road_networks_agree_on_cost() {
        let mut rng = SmallRng::seed_from_u64(0x0ad5);
        let mut reachable = 0;
        for round in 0..300 {
            let (g, ids) = random_road_graph(&mut rng, 40, 90);
            let s = ids[rng.gen_range(0..ids.len())];
            let t = ids[rng.gen_range(0..ids.len())];

            let c = compare(&g, s, t);
            let (d, a) = (&c.dijkstra.outcome, &c.astar.outcome);
            assert_eq!(d.found(), a.found(), "round {round}: {s} → {t}");
            match (d.cost, a.cost) {
                (Some(dc), Some(ac)) => {
                    assert!((dc - ac).abs() < 1e-6, "round {round}: {dc} vs {ac}");
                    assert_eq!(a.path.first(), Some(&s));
                    assert_eq!(a.path.last(), Some(&t));
                    reachable += 1;
                }
                (None, None) => assert!(d.path.is_empty() && a.path.is_empty()),
                other => panic!("round {round}: cost mismatch {other:?}"),
            }
        }
        assert!(reachable > 0);
    }
}

// ── Grid report ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use serde_json::json;

    use pv_grid::Cell;

    use super::helpers::{open_3x3, walled_3x3};
    use crate::compare_grid;

    #[test]
    fn open_grid_metrics() {
        let r = compare_grid(&open_3x3(), Cell::new(0, 0), Cell::new(2, 2));
        for run in [&r.dijkstra, &r.astar] {
            assert!(run.found);
            assert_eq!(run.metrics.path_length, 4);
            assert_eq!(run.path.len(), 5);
            assert_eq!(run.metrics.visited_count, run.visited.len());
            assert_eq!(run.path.first(), Some(&Cell::new(0, 0)));
            assert_eq!(run.path.last(), Some(&Cell::new(2, 2)));
        }
    }

    #[test]
    fn walled_grid_not_found() {
        let r = compare_grid(&walled_3x3(), Cell::new(0, 0), Cell::new(2, 2));
        for run in [&r.dijkstra, &r.astar] {
            assert!(!run.found);
            assert!(run.path.is_empty());
            assert_eq!(run.metrics.path_length, 0);
            assert_eq!(run.metrics.visited_count, 3);
        }
    }

    #[test]
    fn json_shape() {
        let r = compare_grid(&open_3x3(), Cell::new(0, 0), Cell::new(0, 1));
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["dijkstra"]["path"], json!([[0, 0], [0, 1]]));
        assert_eq!(v["astar"]["found"], json!(true));
        assert_eq!(v["astar"]["metrics"]["path_length"], json!(1));
        assert!(v["dijkstra"]["metrics"]["runtime_ms"].is_f64());
        assert!(v["dijkstra"]["visited"].is_array());
    }
}

// ── Road report ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod road {
    use std::sync::Arc;

    use serde_json::json;

    use pv_core::GeoPoint;
    use pv_spatial::{RoadGraph, RoadNetwork};

    use super::helpers::street_graph;
    use crate::{CompareConfig, CompareError, compare_road, compare_road_latlon};

    #[test]
    fn reachable_route() {
        let (g, [n0, _, n2, _]) = street_graph();
        let r = compare_road(&g, n0, n2, &CompareConfig::default());

        let d = r.dijkstra.distance_m.unwrap();
        let a = r.astar.distance_m.unwrap();
        assert!((d - a).abs() < 1e-9);
        let straight = GeoPoint::new(0.0, 0.0).distance_m(GeoPoint::new(0.0, 0.002));
        assert!(d >= straight - 1e-6);

        for run in [&r.dijkstra, &r.astar] {
            assert!(run.found);
            assert_eq!(run.path, vec![[0.0, 0.0], [0.0, 0.001], [0.0, 0.002]]);
            assert_eq!(run.metrics.path_nodes_count, 3);
            assert_eq!(run.explored_edges.len(), run.metrics.explored_edges_count);
            assert!(!run.explored_edges_truncated);
        }

        assert_eq!(r.meta.start_node, n0);
        assert_eq!(r.meta.goal_osm_id, Some(12));
        assert_eq!(r.meta.graph_nodes_count, 4);
        assert_eq!(r.meta.graph_edges_count, 4);
    }

    #[test]
    fn explored_edges_follow_geometry() {
        let (g, [n0, _, n2, _]) = street_graph();
        let config = CompareConfig { max_points_per_edge: 4, ..CompareConfig::default() };
        let r = compare_road(&g, n0, n2, &config);

        // Dijkstra relaxes n0→n1 (straight) then n1→n2 (11-point shape).
        let edges = &r.dijkstra.explored_edges;
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0], vec![[0.0, 0.0], [0.0, 0.001]]);
        assert_eq!(edges[1].len(), 6);
        assert_eq!(edges[1].last(), Some(&[0.0, 0.002]));
    }

    #[test]
    fn truncation_keeps_head_and_sets_flag() {
        let (g, [n0, _, n2, _]) = street_graph();
        let config = CompareConfig { max_explored_edges: 1, ..CompareConfig::default() };
        let r = compare_road(&g, n0, n2, &config);

        let run = &r.dijkstra;
        assert_eq!(run.metrics.explored_edges_count, 2);
        assert_eq!(run.explored_edges, vec![vec![[0.0, 0.0], [0.0, 0.001]]]);
        assert!(run.explored_edges_truncated);
    }

    #[test]
    fn unreachable_has_null_distance() {
        let (g, [n0, _, _, n3]) = street_graph();
        let r = compare_road(&g, n0, n3, &CompareConfig::default());
        for run in [&r.dijkstra, &r.astar] {
            assert!(!run.found);
            assert!(run.path.is_empty());
            assert_eq!(run.distance_m, None);
            assert_eq!(run.metrics.visited_count, 3);
        }
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["dijkstra"]["distance_m"], json!(null));
        assert_eq!(v["meta"]["goal_osm_id"], json!(13));
    }

    #[test]
    fn same_node_route() {
        let (g, [_, n1, ..]) = street_graph();
        let r = compare_road(&g, n1, n1, &CompareConfig::default());
        assert_eq!(r.dijkstra.distance_m, Some(0.0));
        assert_eq!(r.astar.distance_m, Some(0.0));
        assert_eq!(r.astar.path, vec![[0.0, 0.001]]);
        assert_eq!(r.astar.metrics.visited_count, 0);
    }

    #[test]
    fn latlon_endpoints_snap_to_nodes() {
        let (g, [n0, _, n2, _]) = street_graph();
        let r = compare_road_latlon(&g, (0.0001, -0.0001), (0.0, 0.0021), &CompareConfig::default())
            .unwrap();
        assert_eq!(r.meta.start_node, n0);
        assert_eq!(r.meta.goal_node, n2);
        assert!(r.dijkstra.found);
    }

    #[test]
    fn empty_network_is_an_error() {
        let g = RoadGraph::new(Arc::new(RoadNetwork::empty()));
        let err = compare_road_latlon(&g, (0.0, 0.0), (1.0, 1.0), &CompareConfig::default())
            .unwrap_err();
        assert!(matches!(err, CompareError::EmptyGraph));
    }
}

// ── Place lookup through the cache ────────────────────────────────────────────

#[cfg(test)]
mod place {
    use pv_spatial::{GraphCache, GraphKey, RoadNetwork, SpatialError, SpatialResult};

    use crate::{CompareConfig, CompareError, compare_place};

    fn source(key: &GraphKey) -> SpatialResult<RoadNetwork> {
        match key.place.as_str() {
            "Equator" => Ok(super::helpers::street().0),
            other => Err(SpatialError::Build(format!("no extract for {other}"))),
        }
    }

    #[test]
    fn repeated_queries_reuse_graph() {
        let cache = GraphCache::new(source);
        let cfg = CompareConfig::default();
        for _ in 0..3 {
            let r = compare_place(&cache, " Equator", "drive ", (0.0, 0.0), (0.0, 0.002), &cfg)
                .unwrap();
            assert!(r.astar.found);
        }
        assert_eq!(cache.build_count(), 1);
    }

    #[test]
    fn build_failure_surfaces_as_spatial_error() {
        let cache = GraphCache::new(source);
        let err = compare_place(&cache, "Atlantis", "drive", (0.0, 0.0), (0.0, 0.0), &CompareConfig::default())
            .unwrap_err();
        assert!(matches!(err, CompareError::Spatial(SpatialError::Build(_))));
        assert!(cache.is_empty());
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use crate::CompareConfig;

    #[test]
    fn defaults() {
        let c = CompareConfig::default();
        assert_eq!(c.max_explored_edges, 20_000);
        assert_eq!(c.max_points_per_edge, 120);
    }

    #[test]
    fn partial_deserialize_fills_defaults() {
        let c: CompareConfig = serde_json::from_str(r#"{ "max_explored_edges": 50 }"#).unwrap();
        assert_eq!(c, CompareConfig { max_explored_edges: 50, max_points_per_edge: 120 });

        let c: CompareConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(c, CompareConfig::default());
    }
}
