//! Agent AI for UPRISING.
//!
//! Implements steering forces and the protester and police state machines.
//! Everything here is a pure function over plain entity data: no RNG,
//! no session state. Cross-agent effects come back as action lists that the
//! simulation applies in order.

pub mod animation;
pub mod police;
pub mod protester;
pub mod steering;

pub use uprising_core as core;

#[cfg(test)]
mod tests;
