//! Read-only planning context passed to every policy decision.

use pd_core::LocationId;
use pd_spatial::{Route, Router, Topology};
use tracing::debug;

/// A read-only view of everything a policy may consult besides the state
/// and its memory.
///
/// Built once per run by the runner and shared (immutably) across all
/// decisions.  The topology is an explicit value, never a global.
#[derive(Clone, Copy)]
pub struct PolicyContext<'a> {
    pub topology: &'a Topology,
    pub router:   &'a dyn Router,
}

impl<'a> PolicyContext<'a> {
    #[inline]
    pub fn new(topology: &'a Topology, router: &'a dyn Router) -> Self {
        Self { topology, router }
    }

    /// Shortest route from `from` to `to`, or `None` if the router finds
    /// none.  Routing failure is not an error for a policy.
    pub fn route_to(&self, from: LocationId, to: LocationId) -> Option<Route> {
        match self.router.route(self.topology, from, to) {
            Ok(route) => Some(route),
            Err(e) => {
                debug!(%from, %to, error = %e, "routing failed");
                None
            }
        }
    }

    /// Shortest route to the closest of `targets`.
    ///
    /// Ties go to the target enumerated first (strict `<`).  Unreachable
    /// targets are skipped.
    pub fn nearest_route<I>(&self, from: LocationId, targets: I) -> Option<Route>
    where
        I: IntoIterator<Item = LocationId>,
    {
        let mut best: Option<Route> = None;
        for target in targets {
            let Some(candidate) = self.route_to(from, target) else {
                continue;
            };
            if best.as_ref().is_none_or(|b| candidate.len() < b.len()) {
                best = Some(candidate);
            }
        }
        best
    }

    /// Direction used when there is nothing to plan for: the first neighbor
    /// of `place`, or `place` itself on an isolated location (which `move_to`
    /// treats as a no-op).
    #[inline]
    pub fn fallback_direction(&self, place: LocationId) -> LocationId {
        self.topology.neighbors(place).first().copied().unwrap_or(place)
    }
}
