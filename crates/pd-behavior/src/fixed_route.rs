//! A policy that replays a fixed tour, ignoring the parcels entirely.

use pd_core::{LocationId, SimRng};
use pd_spatial::village::MAIL_ROUTE;
use pd_spatial::{Route, Topology};
use pd_world::WorldState;

use crate::{BehaviorError, BehaviorResult, Decision, Policy, PolicyContext};

/// Walks a closed tour over and over.
///
/// When memory runs out the whole tour is loaded again; there is no
/// replanning.  A tour that visits every location delivers any task within
/// two laps.
#[derive(Debug, Clone)]
pub struct FixedRoutePolicy {
    tour: Vec<LocationId>,
}

impl FixedRoutePolicy {
    pub fn new(tour: Vec<LocationId>) -> BehaviorResult<Self> {
        if tour.is_empty() {
            return Err(BehaviorError::Config("fixed route tour is empty".into()));
        }
        Ok(Self { tour })
    }

    /// Build a tour from location names.
    pub fn from_names<S: AsRef<str>>(topology: &Topology, names: &[S]) -> BehaviorResult<Self> {
        let tour = names
            .iter()
            .map(|n| topology.resolve(n.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(tour)
    }

    /// The canonical village mail route, starting from the post office.
    pub fn mail_route(topology: &Topology) -> BehaviorResult<Self> {
        Self::from_names(topology, &MAIL_ROUTE)
    }
}

impl Policy for FixedRoutePolicy {
    fn name(&self) -> &str {
        "fixed-route"
    }

    fn decide(
        &self,
        _state: &WorldState,
        memory: Route,
        _ctx:   &PolicyContext<'_>,
        _rng:   &mut SimRng,
    ) -> Decision {
        let mut route = if memory.is_empty() {
            Route::from_stops(self.tour.iter().copied())
        } else {
            memory
        };
        // `new` rejects empty tours, so a freshly loaded route has a head.
        let direction = route.pop_front().unwrap_or(self.tour[0]);
        Decision { direction, memory: route }
    }
}
