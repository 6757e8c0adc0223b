//! Per-tick systems that operate on the session world.
//!
//! Systems are plain functions over the world and the session aggregate.
//! They do not own state; the engine calls them in a fixed order.

pub mod helicopter;
pub mod input;
pub mod police;
pub mod projectiles;
pub mod protesters;
pub mod snapshot;
pub mod surge;
pub mod tear_gas;
pub mod victory;
