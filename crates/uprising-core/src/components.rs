//! Entity data for the fixed-capacity populations.
//!
//! These are plain data structs with no methods.
//! Behavior lives in the AI crate and in the simulation systems.
//! A slot's index is its identity for the whole session; `alive` / `active`
//! flags mark whether the slot currently takes part in the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Player-controlled crowd member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Protester {
    pub pos: Vec2,
    /// Units per tick.
    pub vel: Vec2,
    pub state: ProtesterState,
    /// Individual morale, 0..=100.
    pub morale: f32,
    /// Spawn group (ten protesters per group).
    pub group_id: usize,
    /// Where the player last sent this protester.
    pub target_pos: Vec2,
    /// Seconds spent in the current Flee episode.
    pub behavior_timer: f32,
    pub anim_timer: f32,
    pub anim_frame: u8,
    pub face_right: bool,
    pub alive: bool,
    pub selected: bool,
    /// Seconds until this protester may throw again.
    pub stone_cooldown: f32,
    /// Total distance walked, in playfield units.
    pub distance_travelled: f32,
}

/// AI-controlled officer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Police {
    pub pos: Vec2,
    /// Units per tick.
    pub vel: Vec2,
    pub state: PoliceState,
    /// Countdown for the current state (Deploy window).
    pub timer: f32,
    pub health: f32,
    pub alive: bool,
    pub anim_timer: f32,
    pub anim_frame: u8,
    pub face_right: bool,
}

/// Stone or bullet in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    /// Units per second.
    pub vel: Vec2,
    pub owner: ProjectileOwner,
    pub kind: ProjectileKind,
    pub damage: f32,
    /// Seconds since launch.
    pub lifetime: f32,
    /// Distance covered since launch.
    pub distance: f32,
    pub max_distance: f32,
    pub active: bool,
}

/// Expanding tear-gas cloud.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TearGasCloud {
    pub pos: Vec2,
    pub radius: f32,
    /// Seconds since deployment.
    pub age: f32,
    pub active: bool,
}

/// The single scheduled helicopter gunship.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Helicopter {
    pub pos: Vec2,
    /// Units per tick.
    pub vel: Vec2,
    pub active: bool,
    /// Countdown drawn on arrival. Shown on the HUD; the pass ends only by
    /// leaving the stage or running out of shots.
    pub dwell_remaining: f32,
    pub shots_fired: u32,
    pub shot_cooldown: f32,
    /// Session times (seconds) of the scheduled appearances, ascending.
    pub spawn_times: [f64; crate::constants::HELICOPTER_SPAWN_COUNT],
    /// How many scheduled appearances have already happened.
    pub spawns_done: usize,
}

/// Periodic forced police advance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SurgeState {
    pub active: bool,
    /// Session time at which the running surge ends.
    pub ends_at: f64,
    /// Session time at which the previous surge ended (0 before the first).
    pub last_ended_at: f64,
}
