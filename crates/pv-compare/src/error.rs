use pv_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("road network has no nodes to snap coordinates to")]
    EmptyGraph,

    #[error(transparent)]
    Spatial(#[from] SpatialError),
}

pub type CompareResult<T> = Result<T, CompareError>;
