//! A policy that serves parcels strictly in list order.

use pd_core::SimRng;
use pd_spatial::Route;
use pd_world::WorldState;

use crate::model::{follow_or_replan, relevant_target};
use crate::{Decision, Policy, PolicyContext};

/// Always plans for the first parcel in the list: to its pickup place if the
/// agent is elsewhere, otherwise to its address.
pub struct GoalOrientedPolicy;

impl Policy for GoalOrientedPolicy {
    fn name(&self) -> &str {
        "goal-oriented"
    }

    fn decide(
        &self,
        state:  &WorldState,
        memory: Route,
        ctx:    &PolicyContext<'_>,
        _rng:   &mut SimRng,
    ) -> Decision {
        follow_or_replan(self.name(), state, memory, ctx, || {
            let parcel = state.parcels.first()?;
            ctx.route_to(state.place, relevant_target(state, parcel))
        })
    }
}
