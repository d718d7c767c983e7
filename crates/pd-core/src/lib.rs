//! `pd-core` — foundational types for the parcel delivery simulator.
//!
//! This crate is a dependency of every other `pd-*` crate.  It intentionally
//! has no `pd-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `LocationId`, `TrialId`                                   |
//! | [`turn`]    | `Turn` counter                                            |
//! | [`config`]  | `RunConfig` — parcel count, start, turn cap, trials, seed |
//! | [`rng`]     | `SimRng` — seeded, injectable random source               |
//! | [`error`]   | `PdError`, `PdResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load `RunConfig` from a JSON file.             |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod turn;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::RunConfig;
pub use error::{PdError, PdResult};
pub use ids::{LocationId, TrialId};
pub use rng::SimRng;
pub use turn::Turn;
