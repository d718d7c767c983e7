//! Run configuration and road-list loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pd_core::RunConfig;
use pd_spatial::Topology;
use pd_spatial::village::village_topology;

/// Load a JSON `RunConfig`.  Missing fields take their defaults; no path at
/// all yields `RunConfig::default()`.
pub fn load_config(path: Option<&Path>) -> Result<RunConfig> {
    let Some(path) = path else {
        return Ok(RunConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

/// Build the topology from a road list (one `A-B` per line, `#` comments),
/// or the built-in village when no path is given.
pub fn load_topology(path: Option<&Path>) -> Result<Topology> {
    let Some(path) = path else {
        return Ok(village_topology()?);
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading roads {}", path.display()))?;
    let roads: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect();
    Topology::from_edges(roads.as_slice()).with_context(|| format!("parsing roads {}", path.display()))
}
