//! OSM PBF loader — enabled with the `osm` Cargo feature.
//!
//! # Usage
//!
//! ```ignore
//! use std::path::Path;
//! use pv_spatial::{osm::load_from_pbf, NetworkType};
//!
//! let network = load_from_pbf(Path::new("berlin.osm.pbf"), NetworkType::Drive)?;
//! ```
//!
//! # What is loaded
//!
//! Only ways accepted by the requested [`NetworkType`] are included; the
//! result is simplified by [`ways::assemble`](crate::ways::assemble).  All
//! other features (buildings, POIs, relations) are ignored.
//!
//! # Memory note
//!
//! The loader buffers every OSM node position in a `HashMap<i64, GeoPoint>`
//! during the single pass over the file, because ways reference node IDs by
//! OSM integer ID and may precede or follow the nodes they reference.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use osmpbf::{Element, ElementReader};
use tracing::debug;

use pv_core::GeoPoint;

use crate::cache::{GraphKey, GraphSource};
use crate::network::RoadNetwork;
use crate::ways::{self, NetworkType, WayRecord};
use crate::{SpatialError, SpatialResult};

// ── Public entry point ────────────────────────────────────────────────────────

/// Load and simplify a road network from an OSM PBF file.
///
/// # Errors
///
/// Returns [`SpatialError::Osm`] on read or parse errors.
pub fn load_from_pbf(path: &Path, network: NetworkType) -> SpatialResult<RoadNetwork> {
    let reader = ElementReader::from_path(path).map_err(|e| SpatialError::Osm(e.to_string()))?;

    let mut all_nodes: HashMap<i64, GeoPoint> = HashMap::new();
    let mut road_ways: Vec<WayRecord> = Vec::new();

    reader
        .for_each(|elem| match elem {
            Element::Node(n) => {
                all_nodes.insert(n.id(), GeoPoint::new(n.lat(), n.lon()));
            }
            Element::DenseNode(n) => {
                all_nodes.insert(n.id(), GeoPoint::new(n.lat(), n.lon()));
            }
            Element::Way(w) => {
                // Collect tags eagerly so &str lifetimes don't escape the closure.
                let tags: Vec<(&str, &str)> = w.tags().collect();
                if let Some(direction) = network.classify(&tags) {
                    road_ways.push(WayRecord { refs: w.refs().collect(), direction });
                }
            }
            _ => {}
        })
        .map_err(|e| SpatialError::Osm(e.to_string()))?;

    debug!(
        path = %path.display(),
        %network,
        osm_nodes = all_nodes.len(),
        ways = road_ways.len(),
        "parsed PBF extract"
    );

    Ok(ways::assemble(&all_nodes, &road_ways))
}

// ── Directory-backed graph source ─────────────────────────────────────────────

/// [`GraphSource`] that resolves a place name to a pre-downloaded extract
/// `<root>/<slug>.osm.pbf`, where `slug` is the lower-cased place name with
/// every run of non-alphanumeric characters replaced by a single `-`.
///
/// `"Berlin, Germany"` → `<root>/berlin-germany.osm.pbf`.
#[derive(Clone, Debug)]
pub struct PbfDirectory {
    root: PathBuf,
}

impl PbfDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path the extract for `place` is expected at.
    pub fn path_for(&self, place: &str) -> PathBuf {
        self.root.join(format!("{}.osm.pbf", slug(place)))
    }
}

impl GraphSource for PbfDirectory {
    fn build(&self, key: &GraphKey) -> SpatialResult<RoadNetwork> {
        let network: NetworkType = key.network.parse()?;
        let path = self.path_for(&key.place);
        if !path.is_file() {
            return Err(SpatialError::PlaceNotFound { place: key.place.clone(), path });
        }
        load_from_pbf(&path, network)
    }
}

fn slug(place: &str) -> String {
    let mut out = String::with_capacity(place.len());
    for ch in place.trim().chars() {
        if ch.is_alphanumeric() {
            out.extend(ch.to_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_separators() {
        assert_eq!(slug("  Berlin, Germany "), "berlin-germany");
        assert_eq!(slug("Saint-Étienne"), "saint-étienne");
        assert_eq!(slug("--"), "");
    }

    #[test]
    fn missing_extract_is_place_not_found() {
        let dir = PbfDirectory::new("/nonexistent-pathviz-dir");
        let key = GraphKey::new("Nowhere", "drive");
        assert!(matches!(dir.build(&key), Err(SpatialError::PlaceNotFound { .. })));
    }

    #[test]
    fn unknown_network_type_rejected_before_io() {
        let dir = PbfDirectory::new("/nonexistent-pathviz-dir");
        let key = GraphKey::new("Nowhere", "hovercraft");
        assert!(matches!(dir.build(&key), Err(SpatialError::UnknownNetworkType(_))));
    }
}
