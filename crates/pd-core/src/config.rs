//! Run configuration.

use crate::{PdError, PdResult};

/// Default hard bound on turns per run.
pub const DEFAULT_TURN_CAP: u32 = 1_000;

/// Top-level configuration for a comparison run.
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature) and then overridden from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunConfig {
    /// Parcels per random task.
    pub parcel_count: usize,

    /// Name of the location every random task starts from.
    pub start: String,

    /// Maximum turns per run.  A run that reaches the cap reports the cap as
    /// its turn count.
    pub turn_cap: u32,

    /// Number of shared random tasks per comparison.
    pub trials: u32,

    /// Master RNG seed.  The same seed always produces identical results;
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            parcel_count: 5,
            start:        "Post Office".to_string(),
            turn_cap:     DEFAULT_TURN_CAP,
            trials:       100,
            seed:         None,
        }
    }
}

impl RunConfig {
    /// Reject values that would make a run meaningless.
    pub fn validate(&self) -> PdResult<()> {
        if self.turn_cap == 0 {
            return Err(PdError::Config("turn_cap must be at least 1".into()));
        }
        if self.parcel_count == 0 {
            return Err(PdError::Config("parcel_count must be at least 1".into()));
        }
        if self.trials == 0 {
            return Err(PdError::Config("trials must be at least 1".into()));
        }
        if self.start.trim().is_empty() {
            return Err(PdError::Config("start location must not be empty".into()));
        }
        Ok(())
    }
}
