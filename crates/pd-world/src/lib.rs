//! `pd-world` — the immutable world state and its transition model.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                 |
//! |-----------|----------------------------------------------------------|
//! | [`state`] | `Parcel`, `WorldState` — `initial`, `random`, `move_to`  |
//! | [`error`] | `WorldError`, `WorldResult<T>`                           |
//!
//! # Movement model
//!
//! One call to [`WorldState::move_to`] is one turn:
//!
//! 1. If the destination is not adjacent to the agent, nothing happens.
//! 2. Otherwise every parcel at the agent's location travels with it.
//! 3. Parcels that reach their address are delivered (dropped from the list).
//!
//! States are values.  A transition never mutates its input; it returns the
//! successor state.

pub mod error;
pub mod state;


pub use error::{WorldError, WorldResult};
pub use state::{Parcel, WorldState};
