//! Session-owned entity arenas and aggregate state.
//!
//! Both populations are dense vectors with an `alive` flag per slot; a slot
//! index is stable for the whole session and is what projectiles, events and
//! views use to refer to an agent.

use serde::{Deserialize, Serialize};

use uprising_core::components::{Helicopter, Police, Protester, SurgeState};
use uprising_core::constants::*;
use uprising_core::enums::ProtesterState;
use uprising_core::types::clamp_morale;

use crate::pool::{ProjectilePool, TearGasField};

/// Every entity in a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub protesters: Vec<Protester>,
    pub police: Vec<Police>,
    /// Per-officer fire cooldown, indexed like `police`.
    pub fire_cooldowns: Vec<f32>,
    pub projectiles: ProjectilePool,
    pub gas: TearGasField,
    pub helicopter: Helicopter,
}

impl World {
    /// Protesters still taking part in the simulation.
    pub fn living_protesters(&self) -> usize {
        self.protesters
            .iter()
            .filter(|p| p.alive && p.state != ProtesterState::Arrested)
            .count()
    }

    pub fn living_police(&self) -> usize {
        self.police.iter().filter(|p| p.alive).count()
    }

    /// Living protesters past the territory line.
    pub fn protesters_in_territory(&self) -> usize {
        self.protesters
            .iter()
            .filter(|p| p.alive && p.pos.x > TERRITORY_LINE_X)
            .count()
    }
}

/// Session-wide scalars mutated by every system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Crowd morale, the primary win/lose signal. Always within [0, 100].
    pub global_morale: f32,
    /// Highest global morale seen this session.
    pub max_morale: f32,
    pub protesters_alive: usize,
    pub police_alive: usize,
    pub arrests: u32,
    /// Seconds the territory win thresholds have held continuously.
    pub control_streak: f32,
    /// Session time of the last once-a-second morale decay.
    pub last_decay_at: f64,
    pub surge: SurgeState,
}

impl Default for SessionStats {
    fn default() -> Self {
        Self {
            global_morale: GLOBAL_MORALE_START,
            max_morale: GLOBAL_MORALE_START,
            protesters_alive: MAX_PROTESTERS,
            police_alive: MAX_POLICE,
            arrests: 0,
            control_streak: 0.0,
            last_decay_at: 0.0,
            surge: SurgeState::default(),
        }
    }
}

impl SessionStats {
    /// Apply a change to global morale and clamp the result.
    pub fn adjust_morale(&mut self, delta: f32) {
        self.global_morale = clamp_morale(self.global_morale + delta);
    }

    pub fn record_watermark(&mut self) {
        self.max_morale = self.max_morale.max(self.global_morale);
    }

    pub fn recount(&mut self, world: &World) {
        self.protesters_alive = world.living_protesters();
        self.police_alive = world.living_police();
    }

    /// Share of living protesters beyond the territory line.
    pub fn control_fraction(&self, world: &World) -> f32 {
        if self.protesters_alive == 0 {
            return 0.0;
        }
        world.protesters_in_territory() as f32 / self.protesters_alive as f32
    }
}
