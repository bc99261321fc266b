use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Walk predecessor links back from `target` and return the path in
/// source → target order.  Empty if `target` has no predecessor chain.
pub(crate) fn reconstruct<N: Copy + Eq + Hash>(
    came_from: &FxHashMap<N, N>,
    source: N,
    target: N,
) -> Vec<N> {
    if source == target {
        return vec![source];
    }
    if !came_from.contains_key(&target) {
        return Vec::new();
    }

    let mut path = vec![target];
    let mut cur = target;
    while cur != source {
        match came_from.get(&cur) {
            Some(&prev) => {
                path.push(prev);
                cur = prev;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}
