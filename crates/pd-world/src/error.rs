use pd_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    /// Random tasks need a pickup distinct from the address.
    #[error("random tasks need at least 2 locations, topology has {0}")]
    TooFewLocations(usize),

    #[error("spatial error: {0}")]
    Spatial(#[from] SpatialError),
}

pub type WorldResult<T> = Result<T, WorldError>;
