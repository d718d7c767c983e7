//! `pd-behavior` — the delivery `Policy` trait and the built-in policies.
//!
//! # Crate layout
//!
//! | Module             | Contents                                                  |
//! |--------------------|-----------------------------------------------------------|
//! | [`context`]        | `PolicyContext<'a>` — topology + router shared by a run   |
//! | [`model`]          | `Policy` trait, `Decision`, shared replanning helpers     |
//! | [`random`]         | `RandomPolicy` — uniform random neighbor                  |
//! | [`fixed_route`]    | `FixedRoutePolicy` — replays a fixed tour                 |
//! | [`goal_oriented`]  | `GoalOrientedPolicy` — always serves the first parcel     |
//! | [`nearest_target`] | `NearestTargetPolicy` — closest pickup-or-delivery        |
//! | [`delivery_first`] | `DeliveryFirstPolicy` — deliver held parcels before pickups |
//! | [`batching`]       | `BatchingPolicy` — favours crowded pickup locations       |
//! | [`pickup_first`]   | `PickupFirstPolicy` — collect everything, then deliver    |
//! | [`kind`]           | `PolicyKind` — name ↔ policy selection for the CLI        |
//! | [`error`]          | `BehaviorError`, `BehaviorResult<T>`                      |
//!
//! # Design notes
//!
//! A policy is a pure function of `(state, memory)`.  Memory is the pending
//! [`Route`][pd_spatial::Route]: while it is non-empty the policy pops the
//! next stop ("following-route"); once empty the policy selects a target and
//! replans ("need-replan").  The runner threads memory between calls and
//! never inspects it.  No state is terminal; the runner decides when to stop.
//!
//! `Policy` is `Send + Sync`: the comparator may share one instance across
//! Rayon workers.

pub mod batching;
pub mod context;
pub mod delivery_first;
pub mod error;
pub mod fixed_route;
pub mod goal_oriented;
pub mod kind;
pub mod model;
pub mod nearest_target;
pub mod pickup_first;
pub mod random;

#[cfg(test)]
mod tests;

pub use batching::BatchingPolicy;
pub use context::PolicyContext;
pub use delivery_first::DeliveryFirstPolicy;
pub use error::{BehaviorError, BehaviorResult};
pub use fixed_route::FixedRoutePolicy;
pub use goal_oriented::GoalOrientedPolicy;
pub use kind::PolicyKind;
pub use model::{Decision, Policy};
pub use nearest_target::NearestTargetPolicy;
pub use pickup_first::PickupFirstPolicy;
pub use random::RandomPolicy;
