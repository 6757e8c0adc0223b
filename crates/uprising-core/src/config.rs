//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DT, MAX_DT};
use crate::error::ConfigError;

/// Parameters fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Seed for the session's random stream.
    pub seed: u64,
    /// Default tick length in seconds.
    pub dt: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42, dt: DT }
    }
}

impl SimConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_dt(self.dt)
    }
}

/// Check a tick length against the accepted range (0, MAX_DT].
pub fn validate_dt(dt: f32) -> Result<(), ConfigError> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(ConfigError::InvalidDt(dt));
    }
    if dt > MAX_DT {
        return Err(ConfigError::DtTooLarge { dt, max: MAX_DT });
    }
    Ok(())
}
