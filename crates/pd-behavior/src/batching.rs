//! A policy that prefers pickups where many parcels wait together.

use pd_core::{LocationId, SimRng};
use pd_spatial::Route;
use pd_world::WorldState;
use tracing::debug;

use crate::model::follow_or_replan;
use crate::{Decision, DeliveryFirstPolicy, Policy, PolicyContext};

/// Score weight of one waiting parcel, in turns of travel it is worth.
pub const PARCEL_WEIGHT: i64 = 10;

/// Delivers first, like [`DeliveryFirstPolicy`], but chooses pickups by
/// batch size.
///
/// 1. Held parcels are grouped by address; plan to the nearest address.
/// 2. Otherwise waiting parcels are grouped by pickup place and each place
///    scores `count * PARCEL_WEIGHT - route length`.  Plan to the highest
///    score (first place wins ties).
/// 3. If no place scores above zero, plan like [`DeliveryFirstPolicy`].
pub struct BatchingPolicy;

impl BatchingPolicy {
    fn plan(state: &WorldState, ctx: &PolicyContext<'_>) -> Option<Route> {
        let addresses = distinct(state.held_parcels().map(|p| p.address));
        if !addresses.is_empty() {
            return ctx.nearest_route(state.place, addresses.into_iter().map(|(a, _)| a));
        }

        let mut best: Option<(i64, Route)> = None;
        for (place, count) in distinct(state.waiting_parcels().map(|p| p.place)) {
            let Some(route) = ctx.route_to(state.place, place) else {
                continue;
            };
            let score = count as i64 * PARCEL_WEIGHT - route.len() as i64;
            if best.as_ref().is_none_or(|(s, _)| score > *s) {
                best = Some((score, route));
            }
        }

        match best {
            Some((score, route)) if score > 0 => Some(route),
            _ => {
                debug!(from = %state.place, "no pickup scores above zero");
                DeliveryFirstPolicy::plan(state, ctx)
            }
        }
    }
}

impl Policy for BatchingPolicy {
    fn name(&self) -> &str {
        "batching"
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

/// Distinct locations in first-seen order, with how often each occurred.
fn distinct<I: IntoIterator<Item = LocationId>>(locations: I) -> Vec<(LocationId, usize)> {
    let mut groups: Vec<(LocationId, usize)> = Vec::new();
    for loc in locations {
        match groups.iter_mut().find(|(l, _)| *l == loc) {
            Some((_, count)) => *count += 1,
            None => groups.push((loc, 1)),
        }
    }
    groups
}
