//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `PdError` as one variant
//! where they need to surface configuration problems.

use thiserror::Error;

/// The top-level error type for `pd-core`.
#[derive(Debug, Error)]
pub enum PdError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `pd-core`.
pub type PdResult<T> = Result<T, PdError>;
