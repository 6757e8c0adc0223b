//! Simulation engine for UPRISING.
//!
//! Owns the fixed-capacity entity arenas, runs the per-tick systems in a
//! fixed order, and produces `SessionSnapshot`s for presentation.

pub mod engine;
pub mod pool;
pub mod systems;
pub mod world;
pub mod world_setup;

pub use engine::Session;
pub use uprising_core as core;
