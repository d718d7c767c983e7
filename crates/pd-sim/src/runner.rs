//! The `Runner` and its turn loop.

use pd_behavior::{Decision, Policy, PolicyContext};
use pd_core::{RunConfig, SimRng, Turn};
use pd_spatial::{Route, Router, Topology};
use pd_world::WorldState;
use tracing::{trace, warn};

use crate::{RunObserver, SimError, SimResult};

// ── RunSummary ────────────────────────────────────────────────────────────────

/// Outcome of one run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Turns played.  Equals the cap when the run was cut off.
    pub turns: u32,

    /// Turns whose move left the state unchanged (non-adjacent direction).
    pub wasted_moves: u32,

    /// `true` if every parcel was delivered.
    pub completed: bool,
}

impl RunSummary {
    /// `true` if the run stopped at the turn cap with parcels outstanding.
    #[inline]
    pub fn capped(&self) -> bool {
        !self.completed
    }
}

// ── Runner ────────────────────────────────────────────────────────────────────

/// Drives one policy over one task until every parcel is delivered or the
/// turn cap is reached.
///
/// Each turn:
///
/// ```text
/// ① decide   — policy.decide(state, memory) → (direction, memory')
/// ② move     — state' = state.move_to(direction)   (no-op if not adjacent)
/// ③ adopt    — state ← state', memory ← memory'
/// ```
///
/// The runner holds only shared references, so one instance can serve any
/// number of runs, including concurrent ones.
#[derive(Clone, Copy)]
pub struct Runner<'a> {
    ctx:      PolicyContext<'a>,
    turn_cap: u32,
}

impl<'a> Runner<'a> {
    /// Fails if `turn_cap` is zero.
    pub fn new(topology: &'a Topology, router: &'a dyn Router, turn_cap: u32) -> SimResult<Self> {
        if turn_cap == 0 {
            return Err(SimError::Config("turn_cap must be at least 1".into()));
        }
        Ok(Self { ctx: PolicyContext::new(topology, router), turn_cap })
    }

    /// Runner with the cap taken from `config`.
    pub fn from_config(
        topology: &'a Topology,
        router:   &'a dyn Router,
        config:   &RunConfig,
    ) -> SimResult<Self> {
        Self::new(topology, router, config.turn_cap)
    }

    #[inline]
    pub fn topology(&self) -> &'a Topology {
        self.ctx.topology
    }

    /// Play `policy` from `state` with initial `memory`.
    ///
    /// Returns 0 turns immediately when `state` has no parcels.
    pub fn run<O: RunObserver + ?Sized>(
        &self,
        state:    WorldState,
        policy:   &dyn Policy,
        memory:   Route,
        rng:      &mut SimRng,
        observer: &mut O,
    ) -> RunSummary {
        let topology = self.ctx.topology;
        let mut state = state;
        let mut memory = memory;
        let mut turn = Turn::ZERO;
        let mut wasted_moves = 0;

        while !state.is_complete() && turn.count() < self.turn_cap {
            observer.on_turn_start(turn, &state);

            let Decision { direction, memory: next_memory } =
                policy.decide(&state, memory, &self.ctx, rng);
            let next = state.move_to(topology, direction);
            if next == state {
                wasted_moves += 1;
            }
            trace!(
                policy = policy.name(),
                %turn,
                from = %state.place,
                to = %direction,
                remaining = next.parcel_count(),
                "turn"
            );

            state = next;
            memory = next_memory;
            observer.on_turn_end(turn, direction, &state);
            turn = turn.next();
        }

        let summary = RunSummary {
            turns:     turn.count(),
            wasted_moves,
            completed: state.is_complete(),
        };
        if summary.capped() {
            warn!(
                policy = policy.name(),
                cap = self.turn_cap,
                remaining = state.parcel_count(),
                "run hit the turn cap"
            );
        }
        observer.on_run_end(&summary, &state);
        summary
    }
}
