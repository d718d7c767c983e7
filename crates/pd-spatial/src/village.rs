//! The canonical village: 11 locations joined by 14 roads.
//!
//! Both the demo binary and the test suites build their topology from these
//! literals.

use crate::{SpatialResult, Topology};

/// Road literals, one `"A-B"` pair per road.
pub const VILLAGE_ROADS: [&str; 14] = [
    "Alice's House-Bob's House",   "Alice's House-Cabin",
    "Alice's House-Post Office",   "Bob's House-Town Hall",
    "Daria's House-Ernie's House", "Daria's House-Town Hall",
    "Ernie's House-Grete's House", "Grete's House-Farm",
    "Grete's House-Shop",          "Marketplace-Farm",
    "Marketplace-Post Office",     "Marketplace-Shop",
    "Marketplace-Town Hall",       "Shop-Town Hall",
];

/// A closed tour from the post office that passes every location.  Walking it
/// twice delivers any task.
pub const MAIL_ROUTE: [&str; 13] = [
    "Alice's House", "Cabin", "Alice's House", "Bob's House",
    "Town Hall", "Daria's House", "Ernie's House", "Grete's House",
    "Shop", "Grete's House", "Farm", "Marketplace", "Post Office",
];

/// Build the village topology from [`VILLAGE_ROADS`].
pub fn village_topology() -> SpatialResult<Topology> {
    Topology::from_edges(&VILLAGE_ROADS)
}
