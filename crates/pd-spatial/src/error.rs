//! Spatial-subsystem error type.

use thiserror::Error;

use pd_core::LocationId;

/// Errors produced by `pd-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    /// An edge string did not split into exactly two non-empty endpoints.
    #[error("malformed edge {0:?}: expected \"A-B\"")]
    MalformedEdge(String),

    #[error("unknown location {0:?}")]
    UnknownLocation(String),

    /// Also returned for `from == to`: the caller has already arrived.
    #[error("no route from {from} to {to}")]
    NoRoute { from: LocationId, to: LocationId },

    #[error("location {0} not found in topology")]
    LocationNotFound(LocationId),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
