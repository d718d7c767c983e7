//! Routing trait and default breadth-first implementation.
//!
//! # Pluggability
//!
//! Policies call routing via the [`Router`] trait, so applications can swap
//! in custom implementations (cached all-pairs tables, A*) without touching
//! the policies.  The default [`BfsRouter`] is sufficient for village-sized
//! topologies.
//!
//! # Cost units
//!
//! Every road costs one turn.  A route's length is its turn count.

use std::collections::VecDeque;

use pd_core::LocationId;

use crate::network::Topology;
use crate::{SpatialError, SpatialResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// An ordered list of stops from (but excluding) the start to the goal.
///
/// Also serves as policy memory: the pending part of the current plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    stops: VecDeque<LocationId>,
}

impl Route {
    /// An empty route: no plan, replan on the next decision.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_stops<I: IntoIterator<Item = LocationId>>(stops: I) -> Self {
        Self { stops: stops.into_iter().collect() }
    }

    /// Number of stops, which is also the number of turns to walk it.
    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Final stop.
    #[inline]
    pub fn goal(&self) -> Option<LocationId> {
        self.stops.back().copied()
    }

    /// Remove and return the next stop; the remainder is the new memory.
    #[inline]
    pub fn pop_front(&mut self) -> Option<LocationId> {
        self.stops.pop_front()
    }

    pub fn iter(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.stops.iter().copied()
    }

    /// Render as `"A → B → C"` using `topology` names.
    pub fn describe(&self, topology: &Topology) -> String {
        self.iter()
            .map(|id| topology.name(id).unwrap_or("?"))
            .collect::<Vec<_>>()
            .join(" → ")
    }
}

impl FromIterator<LocationId> for Route {
    fn from_iter<I: IntoIterator<Item = LocationId>>(iter: I) -> Self {
        Self::from_stops(iter)
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so they can be shared across Rayon
/// workers when the comparator runs trials in parallel.
pub trait Router: Send + Sync {
    /// Compute a shortest route from `from` to `to`.
    ///
    /// Returns [`SpatialError::NoRoute`] if no path exists **or** if
    /// `from == to`; callers must treat the latter as "already arrived".
    fn route(
        &self,
        topology: &Topology,
        from:     LocationId,
        to:       LocationId,
    ) -> SpatialResult<Route>;
}

// ── BfsRouter ─────────────────────────────────────────────────────────────────

/// Breadth-first search over the unweighted topology.
///
/// The frontier is processed in insertion order.  For each neighbor of the
/// current location (in adjacency order): if it is the goal, the route so far
/// plus the goal is returned immediately; otherwise it is enqueued unless a
/// frontier entry for that location already exists.  Only the first route
/// discovered to any location survives, so the first route found to the goal
/// is a shortest one, and among equal-length routes the one reached through
/// earlier neighbors wins.
pub struct BfsRouter;

impl Router for BfsRouter {
    fn route(
        &self,
        topology: &Topology,
        from:     LocationId,
        to:       LocationId,
    ) -> SpatialResult<Route> {
        bfs(topology, from, to)
    }
}

// ── BFS internals ─────────────────────────────────────────────────────────────

fn bfs(topology: &Topology, from: LocationId, to: LocationId) -> SpatialResult<Route> {
    for id in [from, to] {
        if !topology.contains(id) {
            return Err(SpatialError::LocationNotFound(id));
        }
    }
    if from == to {
        return Err(SpatialError::NoRoute { from, to });
    }

    let n = topology.location_count();
    // queued[v] = a frontier entry for v exists (the start counts).
    let mut queued = vec![false; n];
    // prev[v] = location v was discovered from; INVALID for the start.
    let mut prev = vec![LocationId::INVALID; n];

    queued[from.index()] = true;
    let mut frontier: VecDeque<LocationId> = VecDeque::from([from]);

    while let Some(at) = frontier.pop_front() {
        for &next in topology.neighbors(at) {
            if next == to {
                prev[to.index()] = at;
                return Ok(reconstruct(&prev, from, to));
            }
            if !queued[next.index()] {
                queued[next.index()] = true;
                prev[next.index()] = at;
                frontier.push_back(next);
            }
        }
    }

    Err(SpatialError::NoRoute { from, to })
}

fn reconstruct(prev: &[LocationId], from: LocationId, to: LocationId) -> Route {
    let mut stops = Vec::new();
    let mut cur = to;
    while cur != from {
        stops.push(cur);
        cur = prev[cur.index()];
    }
    stops.reverse();
    Route::from_stops(stops)
}
