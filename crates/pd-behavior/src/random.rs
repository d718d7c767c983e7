//! A policy that wanders: each turn it steps to a uniformly random neighbor.

use pd_core::SimRng;
use pd_spatial::Route;
use pd_world::WorldState;

use crate::{Decision, Policy, PolicyContext};

/// Steps to a uniformly random neighbor.  Ignores parcels and never plans.
///
/// The baseline every planning policy should beat.
pub struct RandomPolicy;

impl Policy for RandomPolicy {
    fn name(&self) -> &str {
        "random"
    }

    fn decide(
        &self,
        state:  &WorldState,
        memory: Route,
        ctx:    &PolicyContext<'_>,
        rng:    &mut SimRng,
    ) -> Decision {
        let direction = rng
            .choose(ctx.topology.neighbors(state.place))
            .copied()
            .unwrap_or(state.place);
        Decision { direction, memory }
    }
}
