//! Location topology and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format.  Given a
//! `LocationId n`, its neighbors occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! Every undirected road is stored as two directed entries, so adjacency is
//! symmetric by construction.  Within one location's slice, neighbors keep
//! the order in which their roads were first added; policies and the BFS
//! router depend on that order for tie-breaking.
//!
//! # Names
//!
//! Location names are interned once at build time.  `resolve` maps a name to
//! its `LocationId`; `name` maps back for reporting.

use std::collections::HashSet;

use pd_core::LocationId;
use tracing::debug;

use crate::{SpatialError, SpatialResult};

/// Separator between the two endpoints of an edge literal.
pub const EDGE_SEPARATOR: char = '-';

#[cfg(feature = "fx-hash")]
type NameMap = rustc_hash::FxHashMap<String, LocationId>;
#[cfg(not(feature = "fx-hash"))]
type NameMap = std::collections::HashMap<String, LocationId>;

// ── Topology ──────────────────────────────────────────────────────────────────

/// Undirected location graph in CSR format plus the name interning table.
///
/// Read-only after construction: there is no mutation API.  Build it once
/// with [`TopologyBuilder`] or [`Topology::from_edges`] and pass it by
/// reference to every component that needs it.
#[derive(Debug, Clone)]
pub struct Topology {
    /// Display name of each location.  Indexed by `LocationId`.
    names: Vec<String>,

    by_name: NameMap,

    /// CSR row pointer.  Neighbors of location `n` are at
    /// `edge_to[node_out_start[n] .. node_out_start[n+1]]`.
    /// Length = `location_count + 1`.
    node_out_start: Vec<u32>,

    /// Destination of each directed edge, grouped by source location.
    edge_to: Vec<LocationId>,
}

impl Topology {
    /// Parse a list of `"A-B"` road literals into a topology.
    ///
    /// Fails on the first malformed entry; no partial topology is returned.
    pub fn from_edges<S: AsRef<str>>(edges: &[S]) -> SpatialResult<Self> {
        let mut b = TopologyBuilder::new();
        for edge in edges {
            b.add_edge_str(edge.as_ref())?;
        }
        Ok(b.build())
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn location_count(&self) -> usize {
        self.names.len()
    }

    /// Number of directed edges (twice the number of distinct roads).
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    // ── Names ─────────────────────────────────────────────────────────────

    /// Look up a location by name.
    pub fn resolve(&self, name: &str) -> SpatialResult<LocationId> {
        self.by_name
            .get(name.trim())
            .copied()
            .ok_or_else(|| SpatialError::UnknownLocation(name.to_string()))
    }

    /// Display name of `id`, or `None` if the ID did not come from this
    /// topology.
    pub fn name(&self, id: LocationId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    /// `true` if `id` indexes a location of this topology.
    #[inline]
    pub fn contains(&self, id: LocationId) -> bool {
        id.index() < self.names.len()
    }

    /// Every location, in the order its name was first seen.
    pub fn locations(&self) -> impl Iterator<Item = LocationId> + '_ {
        (0..self.names.len()).map(|i| LocationId(i as u32))
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Neighbors of `id` in first-seen road order.
    ///
    /// Returns an empty slice for IDs outside this topology.
    #[inline]
    pub fn neighbors(&self, id: LocationId) -> &[LocationId] {
        if !self.contains(id) {
            return &[];
        }
        let start = self.node_out_start[id.index()] as usize;
        let end   = self.node_out_start[id.index() + 1] as usize;
        &self.edge_to[start..end]
    }

    /// `true` if a road connects `from` and `to`.
    #[inline]
    pub fn is_adjacent(&self, from: LocationId, to: LocationId) -> bool {
        self.neighbors(from).contains(&to)
    }
}

// ── TopologyBuilder ───────────────────────────────────────────────────────────

/// Construct a [`Topology`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use pd_spatial::TopologyBuilder;
///
/// let mut b = TopologyBuilder::new();
/// b.add_edge_str("Cabin-Alice's House").unwrap();
/// b.add_edge_str("Alice's House-Post Office").unwrap();
/// let topo = b.build();
/// assert_eq!(topo.location_count(), 3);
/// assert_eq!(topo.edge_count(), 4); // bidirectional
/// ```
pub struct TopologyBuilder {
    names:     Vec<String>,
    by_name:   NameMap,
    raw_edges: Vec<(LocationId, LocationId)>,
}

impl TopologyBuilder {
    pub fn new() -> Self {
        Self {
            names:     Vec::new(),
            by_name:   NameMap::default(),
            raw_edges: Vec::new(),
        }
    }

    /// Intern `name`, returning the existing ID if it was already added.
    pub fn add_location(&mut self, name: &str) -> LocationId {
        let name = name.trim();
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = LocationId(self.names.len() as u32);
        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Add an undirected road between two locations this builder issued.
    ///
    /// Any other ID is rejected with [`SpatialError::LocationNotFound`] and
    /// nothing is added.
    pub fn add_road(&mut self, a: LocationId, b: LocationId) -> SpatialResult<()> {
        for id in [a, b] {
            if id.index() >= self.names.len() {
                return Err(SpatialError::LocationNotFound(id));
            }
        }
        self.raw_edges.push((a, b));
        self.raw_edges.push((b, a));
        Ok(())
    }

    /// Parse one `"A-B"` literal and add the road it names.
    pub fn add_edge_str(&mut self, edge: &str) -> SpatialResult<()> {
        let (a, b) = parse_edge(edge)?;
        let a = self.add_location(a);
        let b = self.add_location(b);
        self.add_road(a, b)
    }

    pub fn location_count(&self) -> usize { self.names.len() }

    /// Consume the builder and produce a [`Topology`].
    ///
    /// Duplicate roads collapse to one entry.  The sort is stable, so each
    /// location's neighbors stay in first-seen order.
    pub fn build(self) -> Topology {
        let location_count = self.names.len();

        let mut seen = HashSet::with_capacity(self.raw_edges.len());
        let mut raw: Vec<(LocationId, LocationId)> = self
            .raw_edges
            .into_iter()
            .filter(|edge| seen.insert(*edge))
            .collect();
        raw.sort_by_key(|&(from, _)| from.0);

        let edge_to: Vec<LocationId> = raw.iter().map(|&(_, to)| to).collect();

        let mut node_out_start = vec![0u32; location_count + 1];
        for &(from, _) in &raw {
            node_out_start[from.index() + 1] += 1;
        }
        for i in 1..=location_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[location_count] as usize, edge_to.len());

        debug!(
            locations = location_count,
            directed_edges = edge_to.len(),
            "topology built"
        );

        Topology {
            names: self.names,
            by_name: self.by_name,
            node_out_start,
            edge_to,
        }
    }
}

impl Default for TopologyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Split `"A-B"` into its two trimmed, non-empty endpoints.
fn parse_edge(edge: &str) -> SpatialResult<(&str, &str)> {
    let mut parts = edge.split(EDGE_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) if !a.trim().is_empty() && !b.trim().is_empty() => {
            Ok((a.trim(), b.trim()))
        }
        _ => Err(SpatialError::MalformedEdge(edge.to_string())),
    }
}
