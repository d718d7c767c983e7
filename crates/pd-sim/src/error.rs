use pd_behavior::BehaviorError;
use pd_core::PdError;
use pd_spatial::SpatialError;
use pd_world::WorldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("world error: {0}")]
    World(#[from] WorldError),

    #[error("spatial error: {0}")]
    Spatial(#[from] SpatialError),

    #[error("policy error: {0}")]
    Behavior(#[from] BehaviorError),

    #[error(transparent)]
    Core(#[from] PdError),
}

pub type SimResult<T> = Result<T, SimError>;
