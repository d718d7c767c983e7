use pd_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("policy configuration error: {0}")]
    Config(String),

    #[error("spatial error: {0}")]
    Spatial(#[from] SpatialError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
