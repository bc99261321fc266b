//! `pv-spatial` — road network, spatial indexing, map loading, and caching.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `RoadNetwork` (CSR + R-tree), `RoadNetworkBuilder`          |
//! | [`graph`]   | `RoadGraph` — search adapter implementing `pv_core::Graph`  |
//! | [`ways`]    | `NetworkType` filters, way simplification (`assemble`)      |
//! | [`cache`]   | `GraphCache`, `GraphSource`, `GraphKey`                     |
//! | [`osm`]     | `load_from_pbf`, `PbfDirectory` (feature = `"osm"` only)    |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `osm`   | Enables OSM PBF loading via the `osmpbf` crate.             |
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod cache;
pub mod error;
pub mod graph;
pub mod network;
pub mod ways;

#[cfg(feature = "osm")]
pub mod osm;


pub use cache::{GraphCache, GraphKey, GraphSource};
pub use error::{SpatialError, SpatialResult};
pub use graph::RoadGraph;
pub use network::{RoadNetwork, RoadNetworkBuilder};
pub use ways::{Direction, NetworkType, WayRecord};
