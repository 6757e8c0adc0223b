//! Tear-gas clouds: growth, ageing and forcing protesters to flee.

use glam::Vec2;

use uprising_core::constants::*;
use uprising_core::enums::ProtesterState;
use uprising_core::types::clamp_morale;

use crate::world::{SessionStats, World};

/// Grow and age every active cloud. A living protester that is not already
/// fleeing and stands inside the radius is sent fleeing to the retreat line.
/// Since fleeing protesters are skipped, the penalty lands once per
/// cloud and protester.
pub fn run(world: &mut World, stats: &mut SessionStats, dt: f32) {
    let World {
        gas, protesters, ..
    } = world;

    for cloud in gas.slots_mut().iter_mut().filter(|c| c.active) {
        cloud.radius += GAS_GROWTH_PER_SEC * dt;
        cloud.age += dt;

        for p in protesters.iter_mut() {
            if !p.alive || p.state == ProtesterState::Flee {
                continue;
            }
            if cloud.pos.distance(p.pos) < cloud.radius {
                p.state = ProtesterState::Flee;
                p.morale = clamp_morale(p.morale - GAS_PROTESTER_MORALE_PENALTY);
                p.behavior_timer = 0.0;
                p.target_pos = Vec2::new(RETREAT_LINE_X, p.pos.y);
                stats.adjust_morale(-GAS_GLOBAL_MORALE_PENALTY);
            }
        }

        if cloud.age > GAS_MAX_AGE_SECS || cloud.radius > GAS_MAX_RADIUS {
            cloud.active = false;
        }
    }
}
