//! Run observer trait for progress reporting and data collection.

use pd_core::{LocationId, Turn};
use pd_world::WorldState;

use crate::RunSummary;

/// Callbacks invoked by [`Runner::run`][crate::Runner::run] at key points in
/// the turn loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — route printer
///
/// ```rust,ignore
/// struct RoutePrinter<'a> { topology: &'a Topology }
///
/// impl RunObserver for RoutePrinter<'_> {
///     fn on_turn_end(&mut self, turn: Turn, direction: LocationId, state: &WorldState) {
///         println!("{turn}: moved to {}", self.topology.name(direction).unwrap_or("?"));
///     }
/// }
/// ```
pub trait RunObserver {
    /// Called before the policy decides, with the state it will see.
    fn on_turn_start(&mut self, _turn: Turn, _state: &WorldState) {}

    /// Called after the move.  `direction` is what the policy asked for;
    /// `state` is the result, unchanged if the move was a no-op.
    fn on_turn_end(&mut self, _turn: Turn, _direction: LocationId, _state: &WorldState) {}

    /// Called once when the run stops, either complete or at the turn cap.
    fn on_run_end(&mut self, _summary: &RunSummary, _final_state: &WorldState) {}
}

/// A [`RunObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
