//! Core types and definitions for the UPRISING crowd simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entity data, commands, events, snapshot views, configuration and constants.
//! It contains no simulation logic and no presentation dependency.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
