//! World state value type and transitions.

use std::fmt;

use pd_core::{LocationId, SimRng};
use pd_spatial::{SpatialError, Topology};
use tracing::trace;

use crate::{WorldError, WorldResult};

/// A parcel currently at `place`, destined for `address`.
///
/// A parcel with `place == address` has been delivered and never appears in
/// a live [`WorldState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parcel {
    pub place:   LocationId,
    pub address: LocationId,
}

impl Parcel {
    #[inline]
    pub fn new(place: LocationId, address: LocationId) -> Self {
        Self { place, address }
    }
}

/// Immutable snapshot of the agent's location and the outstanding parcels.
///
/// Every transition produces a new value; `Clone` is how the comparator
/// hands identical copies of one task to several policies.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    pub place:   LocationId,
    pub parcels: Vec<Parcel>,
}

impl WorldState {
    /// Construct a state as given.  No validation beyond the types.
    pub fn initial(place: LocationId, parcels: Vec<Parcel>) -> Self {
        Self { place, parcels }
    }

    /// Draw a random task starting at `start`.
    ///
    /// For each parcel the address is drawn uniformly from all locations,
    /// then the pickup place is re-drawn uniformly until it differs from the
    /// address.  Draws are independent across parcels, so several parcels
    /// may share a place or an address.
    pub fn random(
        topology:     &Topology,
        parcel_count: usize,
        start:        LocationId,
        rng:          &mut SimRng,
    ) -> WorldResult<Self> {
        let n = topology.location_count();
        if n < 2 {
            return Err(WorldError::TooFewLocations(n));
        }
        if !topology.contains(start) {
            return Err(SpatialError::LocationNotFound(start).into());
        }

        let mut parcels = Vec::with_capacity(parcel_count);
        for _ in 0..parcel_count {
            let address = LocationId(rng.gen_range(0..n as u32));
            let place = loop {
                let candidate = LocationId(rng.gen_range(0..n as u32));
                if candidate != address {
                    break candidate;
                }
            };
            parcels.push(Parcel { place, address });
        }

        Ok(Self { place: start, parcels })
    }

    /// Like [`random`](Self::random), resolving the start by name.
    pub fn random_from(
        topology:     &Topology,
        parcel_count: usize,
        start:        &str,
        rng:          &mut SimRng,
    ) -> WorldResult<Self> {
        let start = topology.resolve(start)?;
        Self::random(topology, parcel_count, start, rng)
    }

    /// The successor state after the agent tries to step to `destination`.
    ///
    /// A destination that is not adjacent to the agent yields an unchanged
    /// copy of `self`.  This silent no-op is part of the contract: policies
    /// may return their own location (or any non-neighbor) to stay put.
    ///
    /// Otherwise parcels at the agent's location move with it, and parcels
    /// whose new place equals their address are delivered.  Surviving
    /// parcels keep their relative order.
    pub fn move_to(&self, topology: &Topology, destination: LocationId) -> WorldState {
        if !topology.is_adjacent(self.place, destination) {
            return self.clone();
        }

        let parcels: Vec<Parcel> = self
            .parcels
            .iter()
            .map(|p| {
                if p.place == self.place {
                    Parcel { place: destination, address: p.address }
                } else {
                    *p
                }
            })
            .filter(|p| p.place != p.address)
            .collect();

        let delivered = self.parcels.len() - parcels.len();
        if delivered > 0 {
            trace!(delivered, remaining = parcels.len(), "parcels delivered");
        }

        WorldState { place: destination, parcels }
    }

    /// `true` once every parcel has been delivered.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.parcels.is_empty()
    }

    #[inline]
    pub fn parcel_count(&self) -> usize {
        self.parcels.len()
    }

    /// Parcels the agent is carrying (at the agent's location).
    pub fn held_parcels(&self) -> impl Iterator<Item = &Parcel> + '_ {
        self.parcels.iter().filter(move |p| p.place == self.place)
    }

    /// Parcels still waiting to be picked up elsewhere.
    pub fn waiting_parcels(&self) -> impl Iterator<Item = &Parcel> + '_ {
        self.parcels.iter().filter(move |p| p.place != self.place)
    }

    /// Borrow a `Display` adapter that prints location names.
    pub fn display<'a>(&'a self, topology: &'a Topology) -> WorldStateDisplay<'a> {
        WorldStateDisplay { state: self, topology }
    }
}

/// Renders a [`WorldState`] with location names, e.g.
/// `at Post Office; 2 parcels: Shop → Farm, Cabin → Town Hall`.
pub struct WorldStateDisplay<'a> {
    state:    &'a WorldState,
    topology: &'a Topology,
}

impl fmt::Display for WorldStateDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = |id: LocationId| self.topology.name(id).unwrap_or("?");
        write!(
            f,
            "at {}; {} parcels",
            name(self.state.place),
            self.state.parcels.len()
        )?;
        for (i, p) in self.state.parcels.iter().enumerate() {
            let sep = if i == 0 { ": " } else { ", " };
            write!(f, "{sep}{} → {}", name(p.place), name(p.address))?;
        }
        Ok(())
    }
}
