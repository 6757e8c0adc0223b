//! Seeding for a fresh session world.
//!
//! All randomness is drawn from the session RNG in a fixed order
//! (protesters, police, helicopter schedule) so a seed reproduces the
//! same opening exactly.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use uprising_core::components::*;
use uprising_core::constants::*;
use uprising_core::enums::*;

use crate::pool::{ProjectilePool, TearGasField};
use crate::world::World;

/// Build the opening world for a session.
pub fn build_world(rng: &mut ChaCha8Rng) -> World {
    let protesters = spawn_protesters(rng);
    let police = spawn_police(rng);
    let helicopter = Helicopter {
        spawn_times: helicopter_schedule(rng),
        ..Default::default()
    };
    World {
        protesters,
        fire_cooldowns: vec![0.0; police.len()],
        police,
        projectiles: ProjectilePool::default(),
        gas: TearGasField::default(),
        helicopter,
    }
}

fn draw(rng: &mut ChaCha8Rng, range: (i32, i32)) -> f32 {
    rng.gen_range(range.0..=range.1) as f32
}

/// The crowd gathers on the left; every third protester starts chanting.
pub fn spawn_protesters(rng: &mut ChaCha8Rng) -> Vec<Protester> {
    (0..MAX_PROTESTERS)
        .map(|i| {
            let pos = Vec2::new(draw(rng, PROTESTER_SPAWN_X), draw(rng, AGENT_SPAWN_Y));
            let morale = draw(rng, PROTESTER_MORALE_SPAWN);
            Protester {
                pos,
                vel: Vec2::ZERO,
                state: if i % 3 == 0 {
                    ProtesterState::Chant
                } else {
                    ProtesterState::Idle
                },
                morale,
                group_id: i / PROTESTERS_PER_GROUP,
                target_pos: pos,
                face_right: true,
                alive: true,
                ..Default::default()
            }
        })
        .collect()
}

/// Officers hold the right side in Patrol.
pub fn spawn_police(rng: &mut ChaCha8Rng) -> Vec<Police> {
    (0..MAX_POLICE)
        .map(|_| Police {
            pos: Vec2::new(draw(rng, POLICE_SPAWN_X), draw(rng, AGENT_SPAWN_Y)),
            state: PoliceState::Patrol,
            health: POLICE_START_HEALTH,
            alive: true,
            face_right: true,
            ..Default::default()
        })
        .collect()
}

/// Three whole-second appearance times in [0, 300], ascending, each pushed
/// at least 30 s past its predecessor (capped at 300).
pub fn helicopter_schedule(rng: &mut ChaCha8Rng) -> [f64; HELICOPTER_SPAWN_COUNT] {
    let mut times = [0.0f64; HELICOPTER_SPAWN_COUNT];
    for t in &mut times {
        *t = f64::from(rng.gen_range(0..=HELICOPTER_SCHEDULE_MAX_SECS));
    }
    times.sort_by(f64::total_cmp);
    let max = f64::from(HELICOPTER_SCHEDULE_MAX_SECS);
    let spacing = f64::from(HELICOPTER_MIN_SPACING_SECS);
    for i in 1..times.len() {
        if times[i] - times[i - 1] < spacing {
            times[i] = (times[i] + spacing).min(max);
        }
    }
    times
}
