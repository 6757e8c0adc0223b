//! Helicopter gunship: scheduled passes across the top of the stage.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use uprising_core::components::Protester;
use uprising_core::constants::*;
use uprising_core::enums::ProtesterState;
use uprising_core::events::SimEvent;

use crate::systems::projectiles;
use crate::world::World;

pub fn run(world: &mut World, rng: &mut ChaCha8Rng, events: &mut Vec<SimEvent>, now: f64, dt: f32) {
    if now >= SESSION_DURATION_SECS {
        return;
    }

    let heli = &mut world.helicopter;
    if !heli.active
        && heli.spawns_done < HELICOPTER_SPAWN_COUNT
        && now >= heli.spawn_times[heli.spawns_done]
    {
        heli.active = true;
        heli.pos = Vec2::new(HELICOPTER_ENTRY_X, HELICOPTER_ENTRY_Y);
        heli.vel = Vec2::new(HELICOPTER_SPEED, 0.0);
        heli.dwell_remaining =
            rng.gen_range(HELICOPTER_DWELL_SECS.0..=HELICOPTER_DWELL_SECS.1) as f32;
        heli.shots_fired = 0;
        heli.shot_cooldown = 0.0;
        heli.spawns_done += 1;
        tracing::debug!(pass = heli.spawns_done, at = now, "helicopter inbound");
        events.push(SimEvent::HelicopterInbound);
    }

    if !heli.active {
        return;
    }

    heli.pos.x += heli.vel.x;
    heli.pos.y += ((now * f64::from(HELICOPTER_BOB_FREQUENCY)).sin() as f32) * HELICOPTER_BOB_AMPLITUDE;
    heli.dwell_remaining -= dt;
    heli.shot_cooldown -= dt;

    if heli.pos.x < HELICOPTER_EXIT_X || heli.shots_fired >= HELICOPTER_SHOT_LIMIT {
        heli.active = false;
        tracing::debug!(shots = heli.shots_fired, "helicopter departed");
        events.push(SimEvent::HelicopterDeparted);
        return;
    }

    if heli.shot_cooldown > 0.0 {
        return;
    }
    let Some(target) = pick_target(&world.protesters, rng) else {
        return;
    };
    let from = world.helicopter.pos;
    let aim = world.protesters[target].pos;
    if world
        .projectiles
        .acquire(projectiles::helicopter_bullet(from, aim))
        .is_some()
    {
        let heli = &mut world.helicopter;
        heli.shots_fired += 1;
        heli.shot_cooldown = rng
            .gen_range(HELICOPTER_SHOT_COOLDOWN_SECS.0..=HELICOPTER_SHOT_COOLDOWN_SECS.1)
            as f32;
        events.push(SimEvent::HelicopterFired { at: from });
    }
}

/// A rioter found by a few random probes, otherwise the first living protester.
pub fn pick_target(protesters: &[Protester], rng: &mut ChaCha8Rng) -> Option<usize> {
    if protesters.is_empty() {
        return None;
    }
    for _ in 0..HELICOPTER_TARGET_PROBES {
        let j = rng.gen_range(0..protesters.len());
        if protesters[j].alive && protesters[j].state == ProtesterState::Riot {
            return Some(j);
        }
    }
    protesters.iter().position(|p| p.alive)
}
