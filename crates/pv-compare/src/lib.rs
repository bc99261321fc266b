//! `pv-compare` — run Dijkstra and A* on the same query and report both.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`compare`] | `compare` — timed runs of both algorithms on any graph     |
//! | [`grid`]    | `compare_grid` — report in `[row, col]` cells              |
//! | [`road`]    | `compare_road`, `compare_road_latlon`, `compare_place`     |
//! | [`config`]  | `CompareConfig` — trace size limits                        |
//! | [`error`]   | `CompareError`, `CompareResult<T>`                         |
//!
//! Every report type is `serde::Serialize`; field names are the JSON keys a
//! visualisation front-end consumes.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the two searches on Rayon's thread pool.          |

pub mod compare;
pub mod config;
pub mod error;
pub mod grid;
pub mod road;

#[cfg(test)]
mod tests;

pub use compare::{AlgorithmRun, Comparison, compare};
pub use config::CompareConfig;
pub use error::{CompareError, CompareResult};
pub use grid::{GridComparison, GridMetrics, GridRun, compare_grid};
pub use road::{
    RoadComparison, RoadMeta, RoadMetrics, RoadRun, compare_place, compare_road,
    compare_road_latlon,
};
