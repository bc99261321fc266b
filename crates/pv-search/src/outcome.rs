//! Result of one search invocation.

/// Everything a single search produced, in the order it happened.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome<N> {
    /// Nodes from source to target inclusive.  Empty when the target is
    /// unreachable; `[source]` when source and target coincide.
    pub path: Vec<N>,

    /// Nodes in the order they were finalized (expanded).  Never contains
    /// duplicates.
    pub visited: Vec<N>,

    /// `(from, to)` for every relaxation that improved the best-known cost of
    /// `to`, in chronological order.
    pub explored_edges: Vec<(N, N)>,

    /// Total cost of `path`; `None` when no path exists.
    pub cost: Option<f64>,
}

impl<N> SearchOutcome<N> {
    pub(crate) fn not_found(visited: Vec<N>, explored_edges: Vec<(N, N)>) -> Self {
        Self { path: Vec::new(), visited, explored_edges, cost: None }
    }

    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves along the path (nodes − 1), or 0 when not found.
    pub fn path_steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
