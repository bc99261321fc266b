//! `pv-core` — foundational types for the `pathviz` workspace.
//!
//! This crate is a dependency of every other `pv-*` crate.  It intentionally
//! has no `pv-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`graph`]   | `Graph` and `Heuristic` traits — the adjacency contract  |
//! | [`ids`]     | `NodeId`, `EdgeId`                                       |
//! | [`geo`]     | `GeoPoint`, great-circle distance                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod geo;
pub mod graph;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use graph::{Graph, Heuristic};
pub use ids::{EdgeId, NodeId};
