//! A policy that heads for whichever parcel errand is closest.

use pd_core::SimRng;
use pd_spatial::Route;
use pd_world::WorldState;

use crate::model::{follow_or_replan, relevant_target};
use crate::{Decision, Policy, PolicyContext};

/// For every parcel, takes the relevant target (pickup if not held, address
/// if held) and plans toward the one with the shortest route.  On a tie the
/// parcel listed first wins.
pub struct NearestTargetPolicy;

impl Policy for NearestTargetPolicy {
    fn name(&self) -> &str {
        "nearest-target"
    }

    fn decide(
        &self,
        state:  &WorldState,
        memory: Route,
        ctx:    &PolicyContext<'_>,
        _rng:   &mut SimRng,
    ) -> Decision {
        follow_or_replan(self.name(), state, memory, ctx, || {
            let targets = state.parcels.iter().map(|p| relevant_target(state, p));
            ctx.nearest_route(state.place, targets)
        })
    }
}
