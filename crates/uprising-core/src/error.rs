//! Error types for fallible setup paths.

use thiserror::Error;

/// Rejected session or run configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("tick length must be a finite positive number of seconds, got {0}")]
    InvalidDt(f32),
    #[error("tick length {dt} exceeds the maximum step of {max} seconds")]
    DtTooLarge { dt: f32, max: f32 },
    #[error("a run needs at least one tick")]
    ZeroTicks,
}
