//! Errors surfaced by the headless runner.

use thiserror::Error;
use uprising_core::error::ConfigError;

#[derive(Error, Debug)]
pub enum HeadlessError {
    /// Rejected run configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// Failed to write a report.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    /// Failed to encode a report.
    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}
