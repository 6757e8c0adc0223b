//! Headless session runner for UPRISING.
//!
//! Drives a [`uprising_sim::Session`] with no presentation attached, using a
//! scripted player strategy, and reports the result as JSON. Useful for
//! playtesting balance changes and for checking determinism in CI.
//!
//! # Example
//!
//! ```bash
//! # One session with the autopilot player
//! cargo run -p uprising-headless -- run --seed 7 --strategy autopilot
//!
//! # Win rate over 50 seeds
//! cargo run -p uprising-headless -- batch --count 50 --pretty
//! ```

pub mod error;
pub mod runner;
pub mod strategies;

pub use error::HeadlessError;
pub use runner::{run_batch, run_session, BatchSummary, RunConfig, SessionReport};
pub use strategies::{Autopilot, Strategy};
