//! Keyed cache of built road networks.
//!
//! # Concurrency
//!
//! The key → network map sits behind one `Mutex` that is only held for map
//! reads and writes, never during a build.  Building (reading and
//! simplifying a map extract) can take seconds, so it runs outside that lock:
//!
//! 1. Look the key up.  Hit → return the shared network.
//! 2. Miss → fetch (or create) the key's build lock, release the map lock.
//! 3. Take the build lock, look again (another caller may have finished the
//!    same build while we waited), build if still missing, insert.
//!
//! Concurrent misses for one key therefore converge on a single build, while
//! builds for different keys run in parallel.  A failed build inserts
//! nothing and drops the key's build lock: the error goes to the caller that
//! ran it and the next caller for that key retries.
//!
//! Built networks are immutable and handed out as `Arc`s, so any number of
//! searches can read them without further synchronisation.  Entries are
//! never evicted.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::graph::RoadGraph;
use crate::network::RoadNetwork;
use crate::SpatialResult;

// ── Key ───────────────────────────────────────────────────────────────────────

/// Cache key: a place name and a network type, both whitespace-trimmed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GraphKey {
    pub place:   String,
    pub network: String,
}

impl GraphKey {
    pub fn new(place: &str, network: &str) -> Self {
        Self {
            place:   place.trim().to_string(),
            network: network.trim().to_string(),
        }
    }
}

impl fmt::Display for GraphKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.place, self.network)
    }
}

// ── Source ────────────────────────────────────────────────────────────────────

/// Produces a road network for a key on a cache miss.
///
/// Implemented for closures, so tests and embedders can plug in any loader:
///
/// ```
/// use pv_spatial::{GraphCache, GraphKey, RoadNetwork, SpatialResult};
///
/// let cache = GraphCache::new(|_: &GraphKey| -> SpatialResult<RoadNetwork> {
///     Ok(RoadNetwork::empty())
/// });
/// assert!(cache.get_graph("anywhere", "drive").is_ok());
/// ```
pub trait GraphSource: Send + Sync {
    fn build(&self, key: &GraphKey) -> SpatialResult<RoadNetwork>;
}

impl<F> GraphSource for F
where
    F: Fn(&GraphKey) -> SpatialResult<RoadNetwork> + Send + Sync,
{
    fn build(&self, key: &GraphKey) -> SpatialResult<RoadNetwork> {
        self(key)
    }
}

// ── GraphCache ────────────────────────────────────────────────────────────────

#[derive(Default)]
struct CacheState {
    graphs:   HashMap<GraphKey, Arc<RoadNetwork>>,
    /// Per-key build locks, dropped once the key is cached or its build
    /// fails.
    building: HashMap<GraphKey, Arc<Mutex<()>>>,
}

/// Process-wide road network cache.  Share one instance (e.g. in an `Arc`)
/// across request handlers.
pub struct GraphCache<S: GraphSource> {
    source: S,
    state:  Mutex<CacheState>,
    builds: AtomicUsize,
}

impl<S: GraphSource> GraphCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: Mutex::new(CacheState::default()),
            builds: AtomicUsize::new(0),
        }
    }

    /// Return the road graph for `(place, network)`, building it on first
    /// use.
    ///
    /// # Errors
    ///
    /// Whatever the [`GraphSource`] reports.  Failures are not cached.
    pub fn get_graph(&self, place: &str, network: &str) -> SpatialResult<RoadGraph> {
        let key = GraphKey::new(place, network);

        let build_lock = {
            let mut state = self.lock_state();
            if let Some(net) = state.graphs.get(&key) {
                debug!(%key, "graph cache hit");
                return Ok(RoadGraph::new(Arc::clone(net)));
            }
            Arc::clone(state.building.entry(key.clone()).or_default())
        };

        // The unit mutex guards no data, so a poisoned lock is still usable.
        let _building = build_lock.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(net) = self.lock_state().graphs.get(&key) {
            debug!(%key, "graph built by a concurrent request");
            return Ok(RoadGraph::new(Arc::clone(net)));
        }

        info!(%key, "building road graph");
        let started = Instant::now();
        self.builds.fetch_add(1, Ordering::Relaxed);
        let network = match self.source.build(&key) {
            Ok(net) => Arc::new(net),
            Err(e) => {
                warn!(%key, error = %e, "road graph build failed");
                self.forget_build_lock(&key, &build_lock);
                return Err(e);
            }
        };
        info!(
            %key,
            nodes = network.node_count(),
            edges = network.edge_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "road graph cached"
        );

        let mut state = self.lock_state();
        state.graphs.insert(key.clone(), Arc::clone(&network));
        state.building.remove(&key);
        Ok(RoadGraph::new(network))
    }

    /// `true` if a network for the (trimmed) key is cached.
    pub fn contains(&self, place: &str, network: &str) -> bool {
        self.lock_state().graphs.contains_key(&GraphKey::new(place, network))
    }

    /// Number of cached networks.
    pub fn len(&self) -> usize {
        self.lock_state().graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of builds attempted so far, failed ones included.
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }

    /// Remove `lock` from the build-lock map unless a later miss already
    /// replaced it.  Callers still waiting on it rebuild after this one.
    fn forget_build_lock(&self, key: &GraphKey, lock: &Arc<Mutex<()>>) {
        let mut state = self.lock_state();
        if state.building.get(key).is_some_and(|l| Arc::ptr_eq(l, lock)) {
            state.building.remove(key);
        }
    }

    #[cfg(test)]
    pub(crate) fn pending_build_locks(&self) -> usize {
        self.lock_state().building.len()
    }

    /// The map holds only fully built networks, so it stays consistent even
    /// if a holder of the lock panicked.
    fn lock_state(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
