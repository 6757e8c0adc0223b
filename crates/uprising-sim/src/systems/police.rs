//! Police update: roam points and bullet spray are drawn here, decisions
//! come from the AI crate, and bullets, gas and arrests are applied per
//! officer in index order.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use uprising_ai::police::{self, PoliceAction, PoliceContext};
use uprising_core::components::TearGasCloud;
use uprising_core::constants::*;
use uprising_core::enums::{DownCause, PoliceState, ProtesterState};
use uprising_core::events::SimEvent;

use crate::systems::projectiles;
use crate::world::{SessionStats, World};

pub fn run(
    world: &mut World,
    stats: &mut SessionStats,
    rng: &mut ChaCha8Rng,
    actions: &mut Vec<PoliceAction>,
    events: &mut Vec<SimEvent>,
    dt: f32,
) {
    for i in 0..world.police.len() {
        let officer = &world.police[i];
        if !officer.alive {
            continue;
        }

        let origin = officer.pos;
        let roam_point = if officer.state == PoliceState::Patrol {
            roam_point(rng, officer.pos)
        } else {
            officer.pos
        };

        actions.clear();
        let update = {
            let ctx = PoliceContext {
                officer: &world.police[i],
                fire_ready: world.fire_cooldowns[i] <= 0.0,
                roam_point,
                protesters: &world.protesters,
                dt,
            };
            police::evaluate(&ctx, actions)
        };
        if update.state_changed {
            tracing::trace!(officer = i, state = ?update.next.state, "police state change");
        }
        world.police[i] = update.next;

        for action in actions.drain(..) {
            match action {
                PoliceAction::Fire { target } => {
                    fire_bullet(world, rng, i, origin, target, events)
                }
                PoliceAction::DeployGas { at } => deploy_gas(world, i, at, events),
                PoliceAction::Arrest { protester } => arrest(world, stats, i, protester, events),
            }
        }
    }

    stats.recount(world);
}

/// Random roaming goal on the police side, near the officer's current row.
fn roam_point(rng: &mut ChaCha8Rng, pos: Vec2) -> Vec2 {
    let x = rng.gen_range(PATROL_ROAM_X.0..=PATROL_ROAM_X.1) as f32;
    let jitter = rng.gen_range(-PATROL_ROAM_Y_JITTER..=PATROL_ROAM_Y_JITTER) as f32;
    Vec2::new(x, pos.y + jitter)
}

/// Fire from `from` (the officer's position before it moved this tick) at
/// `target` with a whole-degree random spray. The cooldown only resets if a
/// projectile slot was free.
fn fire_bullet(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    officer: usize,
    from: Vec2,
    target: Vec2,
    events: &mut Vec<SimEvent>,
) {
    if !world.projectiles.has_free_slot() {
        return;
    }
    let spray = (rng.gen_range(-BULLET_SPRAY_DEGREES..=BULLET_SPRAY_DEGREES) as f32).to_radians();
    let dir = (target - from).normalize_or_zero();
    let vel = Vec2::from_angle(spray).rotate(dir) * BULLET_SPEED;
    if world
        .projectiles
        .acquire(projectiles::bullet(from, vel, officer))
        .is_some()
    {
        world.fire_cooldowns[officer] = FIRE_COOLDOWN_SECS;
        events.push(SimEvent::BulletFired { officer, at: from });
    }
}

fn deploy_gas(world: &mut World, officer: usize, at: Vec2, events: &mut Vec<SimEvent>) {
    let cloud = TearGasCloud {
        pos: at,
        radius: GAS_INITIAL_RADIUS,
        age: 0.0,
        active: true,
    };
    if world.gas.acquire(cloud).is_some() {
        tracing::debug!(officer, x = at.x, y = at.y, "tear gas deployed");
        events.push(SimEvent::GasDeployed { officer, at });
    }
}

fn arrest(
    world: &mut World,
    stats: &mut SessionStats,
    officer: usize,
    protester: usize,
    events: &mut Vec<SimEvent>,
) {
    let p = &mut world.protesters[protester];
    p.state = ProtesterState::Arrested;
    p.alive = false;
    p.selected = false;
    stats.adjust_morale(-ARREST_MORALE_PENALTY);
    stats.arrests += 1;
    tracing::debug!(officer, protester, arrests = stats.arrests, "arrest");
    events.push(SimEvent::Arrest { officer, protester });
    events.push(SimEvent::ProtesterDown {
        protester,
        cause: DownCause::Arrest,
    });
}

/// Apply damage to an officer. Returns true if this blow took it down.
pub fn wound_officer(world: &mut World, officer: usize, damage: f32) -> bool {
    let target = &mut world.police[officer];
    if !target.alive {
        return false;
    }
    target.health -= damage;
    if target.health <= 0.0 {
        target.alive = false;
        return true;
    }
    false
}

/// Tick down every running fire cooldown.
pub fn cool_down(world: &mut World, dt: f32) {
    for cooldown in world.fire_cooldowns.iter_mut().filter(|c| **c > 0.0) {
        *cooldown -= dt;
    }
}
