//! A policy that empties its hands before collecting more.

use pd_core::SimRng;
use pd_spatial::Route;
use pd_world::WorldState;

use crate::model::follow_or_replan;
use crate::{Decision, Policy, PolicyContext};

/// Plans to the nearest delivery address among held parcels.  Only when
/// nothing is held does it plan to the nearest pickup place.  With no
/// parcels at all it steps to an arbitrary neighbor.
pub struct DeliveryFirstPolicy;

impl DeliveryFirstPolicy {
    /// The selection rule on its own, shared with [`BatchingPolicy`]'s
    /// fallback.
    ///
    /// [`BatchingPolicy`]: crate::BatchingPolicy
    pub fn plan(state: &WorldState, ctx: &PolicyContext<'_>) -> Option<Route> {
        if state.held_parcels().next().is_some() {
            ctx.nearest_route(state.place, state.held_parcels().map(|p| p.address))
        } else {
            ctx.nearest_route(state.place, state.waiting_parcels().map(|p| p.place))
        }
    }
}

impl Policy for DeliveryFirstPolicy {
    fn name(&self) -> &str {
        "delivery-first"
    }

    fn decide(
        &self,
        state:  &WorldState,
        memory: Route,
        ctx:    &PolicyContext<'_>,
        _rng:   &mut SimRng,
    ) -> Decision {
        follow_or_replan(self.name(), state, memory, ctx, || Self::plan(state, ctx))
    }
}
