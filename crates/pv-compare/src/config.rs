//! Limits applied when rendering road comparisons.

use serde::{Deserialize, Serialize};

/// Bounds on the size of a road comparison report.
///
/// Missing fields take their default when deserialized, so a config file
/// only needs to name the limits it changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Explored edges rendered per algorithm.  Later relaxations are
    /// dropped and the run is flagged `explored_edges_truncated`.
    pub max_explored_edges: usize,

    /// Points kept per explored-edge polyline (plus its final point).
    pub max_points_per_edge: usize,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            max_explored_edges:  20_000,
            max_points_per_edge: 120,
        }
    }
}
