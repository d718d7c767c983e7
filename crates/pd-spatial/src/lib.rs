//! `pd-spatial` — location topology and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `Topology` (CSR adjacency), `TopologyBuilder`               |
//! | [`router`]  | `Router` trait, `Route`, `BfsRouter`                        |
//! | [`village`] | The canonical 14-road village and its mail route            |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | FxHash for the location-name interning table.              |
//! | `serde`   | Derives `Serialize`/`Deserialize` on `pd-core` types.      |

pub mod error;
pub mod network;
pub mod router;
pub mod village;


pub use error::{SpatialError, SpatialResult};
pub use network::{Topology, TopologyBuilder};
pub use router::{BfsRouter, Route, Router};
