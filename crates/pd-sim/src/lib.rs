//! `pd-sim` — turn loop runner and policy comparator for the parcel
//! delivery simulator.
//!
//! # Turn loop
//!
//! ```text
//! while parcels remain and turn < turn_cap:
//!   ① Decide  — policy.decide(state, memory) → (direction, memory')
//!   ② Move    — state' = state.move_to(direction)
//!   ③ Adopt   — state ← state', memory ← memory'
//! ```
//!
//! # Comparison
//!
//! [`Comparator::compare`] derives one child RNG per trial from the caller's
//! RNG, draws one random task per trial, and plays every policy on its own
//! clone of that task.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs comparison trials on Rayon's thread pool.         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pd_behavior::{DeliveryFirstPolicy, NearestTargetPolicy};
//! use pd_core::{RunConfig, SimRng};
//! use pd_sim::Comparator;
//! use pd_spatial::{BfsRouter, village::village_topology};
//!
//! let topology = village_topology()?;
//! let comparator = Comparator::from_config(&topology, &BfsRouter, &RunConfig::default())?;
//! let report = comparator.compare(
//!     &[&NearestTargetPolicy, &DeliveryFirstPolicy],
//!     100,
//!     &mut SimRng::new(42),
//! )?;
//! println!("{report}");
//! ```

pub mod compare;
pub mod error;
pub mod observer;
pub mod runner;


pub use compare::{Comparator, ComparisonReport, PolicyStats};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, RunObserver};
pub use runner::{RunSummary, Runner};
