//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each playing tick).
    pub tick: u64,
    /// Elapsed session time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of length `dt`.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += f64::from(dt);
    }

    /// Session time left before the clock runs out, floored at zero.
    pub fn remaining_secs(&self) -> f64 {
        (SESSION_DURATION_SECS - self.elapsed_secs).max(0.0)
    }
}

/// Axis-aligned rectangle, always stored normalized (min <= max).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Build from two arbitrary corners (drag start and end).
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Clamp an agent position to the playfield interior.
pub fn clamp_to_playfield(p: Vec2) -> Vec2 {
    Vec2::new(
        p.x.clamp(PLAYFIELD_MIN_X, PLAYFIELD_MAX_X),
        p.y.clamp(PLAYFIELD_MIN_Y, PLAYFIELD_MAX_Y),
    )
}

/// Whether a projectile position is still on stage.
pub fn on_stage(p: Vec2) -> bool {
    p.x >= 0.0 && p.x <= STAGE_WIDTH && p.y >= 0.0 && p.y <= STAGE_HEIGHT
}

/// Clamp a morale-like value to [MORALE_MIN, MORALE_MAX].
pub fn clamp_morale(value: f32) -> f32 {
    value.clamp(MORALE_MIN, MORALE_MAX)
}
