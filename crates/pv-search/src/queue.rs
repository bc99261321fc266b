//! Priority-queue entry for `BinaryHeap`-based searches.

use std::cmp::Ordering;

use ordered_float::OrderedFloat;

/// A node waiting in the frontier.
///
/// `BinaryHeap` is a max-heap, so the ordering is reversed: the entry with
/// the *smallest* priority compares greatest.  Only the priority takes part
/// in comparisons; entries with equal priority pop in unspecified order.
#[derive(Copy, Clone, Debug)]
pub struct QueueEntry<N> {
    /// Key the frontier is ordered by (`g` for Dijkstra, `g + h` for A*).
    pub priority: OrderedFloat<f64>,
    /// Cumulative cost from the source when the entry was pushed.
    pub g: f64,
    pub node: N,
}

impl<N> QueueEntry<N> {
    #[inline]
    pub fn new(priority: f64, g: f64, node: N) -> Self {
        Self { priority: OrderedFloat(priority), g, node }
    }
}

impl<N> Ord for QueueEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.cmp(&self.priority)
    }
}

impl<N> PartialOrd for QueueEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> PartialEq for QueueEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<N> Eq for QueueEntry<N> {}
