//! Spatial-subsystem error type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by `pv-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("unknown network type {0:?} (expected drive, drive_service, walk, bike or all)")]
    UnknownNetworkType(String),

    #[error("no map extract for {place:?} (looked for {})", path.display())]
    PlaceNotFound { place: String, path: PathBuf },

    #[error("road graph build failed: {0}")]
    Build(String),

    #[cfg(feature = "osm")]
    #[error("OSM parse error: {0}")]
    Osm(String),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
