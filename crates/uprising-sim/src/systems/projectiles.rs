//! Projectile launch and flight: integration, expiry, first-hit collision.

use glam::Vec2;

use uprising_core::components::Projectile;
use uprising_core::constants::*;
use uprising_core::enums::*;
use uprising_core::events::SimEvent;
use uprising_core::types::{clamp_morale, on_stage};

use uprising_ai::steering::{self, living_police};

use crate::world::{SessionStats, World};

/// A stone thrown by `owner`, travelling along `dir`.
/// A near-zero direction is replaced by +x.
pub fn stone(from: Vec2, dir: Vec2, owner: usize) -> Projectile {
    let mut dir = dir.normalize_or_zero();
    if dir.length() < 0.01 {
        dir = Vec2::X;
    }
    Projectile {
        pos: from,
        vel: dir * STONE_SPEED,
        owner: ProjectileOwner::Protester(owner),
        kind: ProjectileKind::Stone,
        damage: STONE_DAMAGE,
        max_distance: PROJECTILE_RANGE,
        active: true,
        ..Default::default()
    }
}

/// A police bullet with its velocity already including spray.
pub fn bullet(from: Vec2, vel: Vec2, officer: usize) -> Projectile {
    Projectile {
        pos: from,
        vel,
        owner: ProjectileOwner::Officer(officer),
        kind: ProjectileKind::Bullet,
        damage: BULLET_DAMAGE,
        max_distance: PROJECTILE_RANGE,
        active: true,
        ..Default::default()
    }
}

pub fn helicopter_bullet(from: Vec2, target: Vec2) -> Projectile {
    Projectile {
        pos: from,
        vel: (target - from).normalize_or_zero() * HELICOPTER_BULLET_SPEED,
        owner: ProjectileOwner::Helicopter,
        kind: ProjectileKind::HelicopterBullet,
        damage: HELICOPTER_BULLET_DAMAGE,
        max_distance: HELICOPTER_BULLET_RANGE,
        active: true,
        ..Default::default()
    }
}

/// Protester `index` throws at the nearest living officer, or along `aim`
/// from its position when no officer is left. Returns the slot used, or
/// `None` when the pool is full.
pub fn throw_stone(
    world: &mut World,
    index: usize,
    aim: Vec2,
    events: &mut Vec<SimEvent>,
) -> Option<usize> {
    if !world.projectiles.has_free_slot() {
        return None;
    }
    let from = world.protesters[index].pos;
    let dir = match steering::nearest(from, living_police(&world.police), f32::INFINITY) {
        Some((officer, _)) => world.police[officer].pos - from,
        None => aim - from,
    };
    let slot = world.projectiles.acquire(stone(from, dir, index))?;
    events.push(SimEvent::StoneThrown {
        protester: index,
        at: from,
    });
    Some(slot)
}

/// Advance every active projectile and resolve hits.
///
/// Expiry is checked before collision. Each projectile hits at most one
/// target: the lowest-index living agent within its hit radius.
pub fn run(world: &mut World, stats: &mut SessionStats, events: &mut Vec<SimEvent>, dt: f32) {
    let World {
        projectiles,
        protesters,
        police,
        ..
    } = world;

    for proj in projectiles.slots_mut().iter_mut().filter(|p| p.active) {
        let step = proj.vel * dt;
        proj.pos += step;
        proj.distance += step.length();
        proj.lifetime += dt;

        if proj.distance > proj.max_distance
            || proj.lifetime > PROJECTILE_LIFETIME_SECS
            || !on_stage(proj.pos)
        {
            proj.active = false;
            continue;
        }

        match proj.kind {
            ProjectileKind::Bullet | ProjectileKind::HelicopterBullet => {
                let Some(j) = protesters
                    .iter()
                    .position(|p| p.alive && p.pos.distance(proj.pos) < BULLET_HIT_RADIUS)
                else {
                    continue;
                };
                let target = &mut protesters[j];
                target.morale = clamp_morale(target.morale - proj.damage);
                if target.morale <= 0.0 {
                    target.alive = false;
                    let (penalty, cause) = if proj.kind == ProjectileKind::HelicopterBullet {
                        (HELICOPTER_KILL_MORALE_PENALTY, DownCause::HelicopterBullet)
                    } else {
                        (BULLET_KILL_MORALE_PENALTY, DownCause::Bullet)
                    };
                    stats.adjust_morale(-penalty);
                    events.push(SimEvent::ProtesterDown {
                        protester: j,
                        cause,
                    });
                }
                proj.active = false;
            }
            ProjectileKind::Stone => {
                let Some(j) = police
                    .iter()
                    .position(|p| p.alive && p.pos.distance(proj.pos) < STONE_HIT_RADIUS)
                else {
                    continue;
                };
                let officer = &mut police[j];
                officer.health -= proj.damage;
                officer.vel += proj.vel * STONE_KNOCKBACK;
                proj.active = false;
                stats.adjust_morale(STONE_HIT_MORALE_BONUS);
                if officer.health <= 0.0 {
                    officer.alive = false;
                    events.push(SimEvent::OfficerDown { officer: j });
                }
            }
        }
    }
}
