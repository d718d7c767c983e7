//! A policy that collects every parcel before delivering any.

use pd_core::SimRng;
use pd_spatial::Route;
use pd_world::WorldState;

use crate::model::follow_or_replan;
use crate::{Decision, Policy, PolicyContext};

/// Plans to the nearest pickup place among parcels not yet held.  Once every
/// parcel is on board it delivers the first one in the list, then repeats.
pub struct PickupFirstPolicy;

impl Policy for PickupFirstPolicy {
    fn name(&self) -> &str {
        "pickup-first"
    }

    fn decide(
        &self,
        state:  &WorldState,
        memory: Route,
        ctx:    &PolicyContext<'_>,
        _rng:   &mut SimRng,
    ) -> Decision {
        follow_or_replan(self.name(), state, memory, ctx, || {
            if state.waiting_parcels().next().is_some() {
                ctx.nearest_route(state.place, state.waiting_parcels().map(|p| p.place))
            } else {
                let parcel = state.parcels.first()?;
                ctx.route_to(state.place, parcel.address)
            }
        })
    }
}
