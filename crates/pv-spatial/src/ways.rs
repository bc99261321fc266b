//! Network-type filters and graph simplification for way-based map data.
//!
//! This module is the format-independent half of map loading: it decides
//! which ways belong to a network type, and turns a set of ways into a
//! simplified [`RoadNetwork`].  The PBF reader in [`osm`](crate::osm) (feature
//! `osm`) only has to collect nodes and ways and hand them over.
//!
//! # Simplification
//!
//! A way node becomes a graph node when it is
//!
//! - the first or last node of some way, or
//! - referenced more than once across all ways (a junction, or a loop
//!   closing on itself).
//!
//! Every other node is interior to a road segment.  Each run of a way between
//! two consecutive graph nodes becomes one edge whose geometry is the full
//! run of points and whose length is the sum of great-circle distances along
//! it.  Parallel edges between the same pair of nodes are kept.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use pv_core::{GeoPoint, NodeId};

use crate::network::{RoadNetwork, RoadNetworkBuilder};
use crate::SpatialError;

// ── NetworkType ───────────────────────────────────────────────────────────────

/// Which ways a road graph is built from.  Names follow the usual OSM
/// tooling conventions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NetworkType {
    /// Public drivable roads, no service roads.
    Drive,
    /// Drivable roads including service roads.
    DriveService,
    /// Everything pedestrians may use; one-way tags are ignored.
    Walk,
    /// Everything cyclists may use.
    Bike,
    /// Every non-abandoned highway.
    All,
}

impl NetworkType {
    pub fn as_str(self) -> &'static str {
        match self {
            NetworkType::Drive        => "drive",
            NetworkType::DriveService => "drive_service",
            NetworkType::Walk         => "walk",
            NetworkType::Bike         => "bike",
            NetworkType::All          => "all",
        }
    }

    /// Decide whether a way with these tags belongs to this network, and in
    /// which direction it may be travelled.
    pub fn classify(self, tags: &[(&str, &str)]) -> Option<Direction> {
        let tag = |key: &str| tags.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);

        let highway = tag("highway")?;
        if matches!(
            highway,
            "abandoned" | "construction" | "planned" | "proposed" | "razed" | "no"
        ) || tag("area") == Some("yes")
        {
            return None;
        }

        let private = matches!(tag("access"), Some("private" | "no"));
        let allowed = match self {
            NetworkType::Drive | NetworkType::DriveService => {
                let service_ok = self == NetworkType::DriveService || highway != "service";
                service_ok
                    && !private
                    && !matches!(tag("motor_vehicle"), Some("no"))
                    && !matches!(tag("motorcar"), Some("no"))
                    && !matches!(
                        highway,
                        "bridleway" | "bus_guideway" | "corridor" | "cycleway" | "elevator"
                            | "escalator" | "footway" | "path" | "pedestrian" | "platform"
                            | "raceway" | "steps" | "track"
                    )
            }
            NetworkType::Walk => {
                !private
                    && !matches!(tag("foot"), Some("no"))
                    && !matches!(
                        highway,
                        "bus_guideway" | "cycleway" | "motor" | "motorway" | "motorway_link"
                            | "platform" | "raceway"
                    )
            }
            NetworkType::Bike => {
                !private
                    && !matches!(tag("bicycle"), Some("no"))
                    && !matches!(
                        highway,
                        "bus_guideway" | "corridor" | "elevator" | "escalator" | "footway"
                            | "motor" | "motorway" | "motorway_link" | "platform" | "raceway"
                            | "steps"
                    )
            }
            NetworkType::All => true,
        };
        if !allowed {
            return None;
        }

        if self == NetworkType::Walk {
            return Some(Direction::Both);
        }
        Some(match tag("oneway") {
            Some("yes" | "1" | "true") => Direction::Forward,
            Some("-1" | "reverse") => Direction::Backward,
            Some("no" | "0" | "false") => Direction::Both,
            // Motorways and roundabouts are implicitly one-way in OSM convention.
            _ if matches!(highway, "motorway" | "motorway_link")
                || tag("junction") == Some("roundabout") =>
            {
                Direction::Forward
            }
            _ => Direction::Both,
        })
    }
}

impl FromStr for NetworkType {
    type Err = SpatialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "drive"         => Ok(NetworkType::Drive),
            "drive_service" => Ok(NetworkType::DriveService),
            "walk"          => Ok(NetworkType::Walk),
            "bike"          => Ok(NetworkType::Bike),
            "all"           => Ok(NetworkType::All),
            other           => Err(SpatialError::UnknownNetworkType(other.to_string())),
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Ways ──────────────────────────────────────────────────────────────────────

/// Travel direction permitted along a way's node order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Both,
    Forward,
    Backward,
}

/// A way accepted by a [`NetworkType`], reduced to what graph assembly needs.
#[derive(Clone, Debug)]
pub struct WayRecord {
    /// Source-data node ids in way order.
    pub refs: Vec<i64>,
    pub direction: Direction,
}

/// Build a simplified [`RoadNetwork`] from accepted ways.
///
/// Way references to nodes missing from `nodes` are dropped (map extracts
/// clipped at a boundary commonly contain such dangling references).  Graph
/// nodes are added in ascending source-id order so the result does not
/// depend on hash iteration order.
pub fn assemble(nodes: &HashMap<i64, GeoPoint>, ways: &[WayRecord]) -> RoadNetwork {
    let ways: Vec<(Vec<i64>, Direction)> = ways
        .iter()
        .map(|w| {
            let refs: Vec<i64> =
                w.refs.iter().copied().filter(|id| nodes.contains_key(id)).collect();
            (refs, w.direction)
        })
        .filter(|(refs, _)| refs.len() >= 2)
        .collect();

    // ── Phase 1: find graph nodes ─────────────────────────────────────────
    let mut ref_count: HashMap<i64, u32> = HashMap::new();
    for (refs, _) in &ways {
        for id in refs {
            *ref_count.entry(*id).or_default() += 1;
        }
        // Endpoints always survive simplification.
        for id in [refs[0], refs[refs.len() - 1]] {
            *ref_count.entry(id).or_default() += 1;
        }
    }

    let mut graph_ids: Vec<i64> = ref_count
        .iter()
        .filter(|&(_, &count)| count >= 2)
        .map(|(&id, _)| id)
        .collect();
    graph_ids.sort_unstable();

    // ── Phase 2: add nodes ────────────────────────────────────────────────
    let mut builder = RoadNetworkBuilder::with_capacity(graph_ids.len(), graph_ids.len() * 3);
    let mut osm_to_pv: HashMap<i64, NodeId> = HashMap::with_capacity(graph_ids.len());
    for osm_id in graph_ids {
        let id = builder.add_osm_node(osm_id, nodes[&osm_id]);
        osm_to_pv.insert(osm_id, id);
    }

    // ── Phase 3: split ways into segments ─────────────────────────────────
    for (refs, direction) in &ways {
        let mut seg_start = osm_to_pv[&refs[0]];
        let mut geometry = vec![nodes[&refs[0]]];

        for osm_id in &refs[1..] {
            geometry.push(nodes[osm_id]);
            let Some(&seg_end) = osm_to_pv.get(osm_id) else {
                continue;
            };

            let length = GeoPoint::polyline_length_m(&geometry);
            let points = std::mem::replace(&mut geometry, vec![nodes[osm_id]]);
            let shape = (points.len() > 2).then_some(points);

            match direction {
                Direction::Both => builder.add_road(seg_start, seg_end, Some(length), shape),
                Direction::Forward => {
                    builder.add_directed_edge(seg_start, seg_end, Some(length), shape)
                }
                Direction::Backward => {
                    let shape = shape.map(|mut s| {
                        s.reverse();
                        s
                    });
                    builder.add_directed_edge(seg_end, seg_start, Some(length), shape)
                }
            }
            seg_start = seg_end;
        }
    }

    builder.build()
}
