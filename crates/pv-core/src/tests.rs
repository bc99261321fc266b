//! Unit tests for pv-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(EdgeId(0) < EdgeId(1));
        assert!(NodeId(100) > NodeId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
        assert_eq!(NodeId::default(), NodeId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(52.5163, 13.3777);
        assert!(p.distance_m(p) < 1e-6);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111.2 km
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(48.8584, 2.2945);
        let b = GeoPoint::new(48.8606, 2.3376);
        assert!((a.distance_m(b) - b.distance_m(a)).abs() < 1e-9);
    }

    #[test]
    fn polyline_never_shorter_than_chord() {
        let pts = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.01, 0.005),
            GeoPoint::new(0.02, 0.0),
        ];
        let along = GeoPoint::polyline_length_m(&pts);
        let chord = pts[0].distance_m(pts[2]);
        assert!(along >= chord);
        assert_eq!(GeoPoint::polyline_length_m(&pts[..1]), 0.0);
    }

    #[test]
    fn lat_lon_order() {
        assert_eq!(GeoPoint::new(1.5, -2.5).to_lat_lon(), [1.5, -2.5]);
    }
}

#[cfg(test)]
mod graph {
    use crate::{Graph, Heuristic};

    /// Path graph 0-1-2 with unit costs.
    struct Line;

    impl Graph for Line {
        type Node = u8;

        fn neighbors(&self, node: u8) -> impl Iterator<Item = (u8, f64)> + '_ {
            let prev = node.checked_sub(1);
            let next = (node < 2).then_some(node + 1);
            prev.into_iter().chain(next).map(|n| (n, 1.0))
        }

        fn node_count(&self) -> usize {
            3
        }
    }

    impl Heuristic for Line {
        fn estimate(&self, from: u8, goal: u8) -> f64 {
            f64::from(from.abs_diff(goal))
        }
    }

    #[test]
    fn contract_through_generic_code() {
        fn degree<G: Graph>(g: &G, n: G::Node) -> usize {
            g.neighbors(n).count()
        }
        assert_eq!(degree(&Line, 0), 1);
        assert_eq!(degree(&Line, 1), 2);
        assert_eq!(Line.estimate(0, 2), 2.0);
        assert_eq!(Line.node_count(), 3);
    }
}
