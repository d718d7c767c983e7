//! The `Policy` trait, the main extension point for user code.

use pd_core::{LocationId, SimRng};
use pd_spatial::Route;
use pd_world::{Parcel, WorldState};
use tracing::debug;

use crate::PolicyContext;

/// What a policy wants to do this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    /// Where to step.  Should be adjacent to the agent; anything else makes
    /// the move a no-op.
    pub direction: LocationId,

    /// Memory to hand back on the next call.
    pub memory: Route,
}

/// Pluggable delivery policy.
///
/// Implement this trait to define how the agent picks its next step.  The
/// runner calls [`decide`][Self::decide] once per turn with the current
/// state and the memory returned by the previous call (empty on the first
/// turn).
///
/// # Thread safety
///
/// The comparator may run trials on Rayon workers, so implementations must
/// be `Send + Sync`.  Per-run state belongs in the memory, not in the policy.
///
/// # Example
///
/// ```rust,ignore
/// struct FirstNeighbor;
///
/// impl Policy for FirstNeighbor {
///     fn name(&self) -> &str { "first-neighbor" }
///
///     fn decide(&self, state: &WorldState, memory: Route, ctx: &PolicyContext<'_>, _rng: &mut SimRng) -> Decision {
///         Decision { direction: ctx.fallback_direction(state.place), memory }
///     }
/// }
/// ```
pub trait Policy: Send + Sync + 'static {
    /// Short label used in reports.
    fn name(&self) -> &str;

    /// Choose the next direction and the memory for the following call.
    ///
    /// Must not assume `state` has parcels; return some direction regardless.
    fn decide(
        &self,
        state:  &WorldState,
        memory: Route,
        ctx:    &PolicyContext<'_>,
        rng:    &mut SimRng,
    ) -> Decision;
}

/// The invocation contract shared by all planning policies.
///
/// Non-empty `memory` → pop its head and keep the tail.  Empty `memory` →
/// call `plan` for a fresh route and pop its head.  If there is still
/// nothing to follow, step to [`PolicyContext::fallback_direction`].
pub fn follow_or_replan<F>(
    policy: &str,
    state:  &WorldState,
    memory: Route,
    ctx:    &PolicyContext<'_>,
    plan:   F,
) -> Decision
where
    F: FnOnce() -> Option<Route>,
{
    let mut route = if memory.is_empty() {
        let fresh = plan().unwrap_or_default();
        debug!(
            policy,
            from = %state.place,
            goal = ?fresh.goal(),
            route = %fresh.describe(ctx.topology),
            "replanned"
        );
        fresh
    } else {
        memory
    };

    match route.pop_front() {
        Some(direction) => Decision { direction, memory: route },
        None => Decision {
            direction: ctx.fallback_direction(state.place),
            memory:    route,
        },
    }
}

/// The location a parcel needs the agent to visit next: its pickup place if
/// the agent is elsewhere, otherwise its address.
#[inline]
pub fn relevant_target(state: &WorldState, parcel: &Parcel) -> LocationId {
    if parcel.place != state.place { parcel.place } else { parcel.address }
}
