//! Steering primitives shared by both populations.

use glam::Vec2;

use uprising_core::components::{Police, Protester};
use uprising_core::constants::*;
use uprising_core::enums::ProtesterState;

/// Unit direction from `from` toward `to`, scaled by `weight`.
/// Coincident points produce no force.
pub fn seek(from: Vec2, to: Vec2, weight: f32) -> Vec2 {
    (to - from).normalize_or_zero() * weight
}

/// Seek that switches off once within `arrival_radius` of the goal.
pub fn arrive(from: Vec2, to: Vec2, arrival_radius: f32, weight: f32) -> Vec2 {
    if from.distance(to) > arrival_radius {
        seek(from, to, weight)
    } else {
        Vec2::ZERO
    }
}

/// Unit direction away from `threat`, scaled by `weight`.
pub fn repel(from: Vec2, threat: Vec2, weight: f32) -> Vec2 {
    (from - threat).normalize_or_zero() * weight
}

/// Limit a force to `max` magnitude, keeping its direction.
pub fn cap(force: Vec2, max: f32) -> Vec2 {
    force.clamp_length_max(max)
}

/// Index and distance of the closest candidate strictly within `range`.
/// Ties go to the earlier candidate.
pub fn nearest<I>(origin: Vec2, candidates: I, range: f32) -> Option<(usize, f32)>
where
    I: IntoIterator<Item = (usize, Vec2)>,
{
    let mut best: Option<(usize, f32)> = None;
    let mut best_dist = range;
    for (index, pos) in candidates {
        let dist = origin.distance(pos);
        if dist < best_dist {
            best_dist = dist;
            best = Some((index, dist));
        }
    }
    best
}

/// Living protesters as (index, position) pairs.
pub fn living_protesters(protesters: &[Protester]) -> impl Iterator<Item = (usize, Vec2)> + '_ {
    protesters
        .iter()
        .enumerate()
        .filter(|(_, p)| p.alive)
        .map(|(i, p)| (i, p.pos))
}

/// Living officers as (index, position) pairs.
pub fn living_police(police: &[Police]) -> impl Iterator<Item = (usize, Vec2)> + '_ {
    police
        .iter()
        .enumerate()
        .filter(|(_, p)| p.alive)
        .map(|(i, p)| (i, p.pos))
}

/// Averaged personal-space repulsion for protester `index` at `pos`.
///
/// Crowd neighbours inside the separation radius push with `20 / (d + 1)`.
/// Officers inside the avoidance radius push with `100 / (d + 1)` unless the
/// protester is rioting. Coincident agents are skipped. Returns the mean of
/// all contributions, unweighted.
pub fn crowd_separation(
    index: usize,
    pos: Vec2,
    state: ProtesterState,
    protesters: &[Protester],
    police: &[Police],
) -> Vec2 {
    let mut sum = Vec2::ZERO;
    let mut count = 0u32;

    for (j, other) in living_protesters(protesters) {
        if j == index {
            continue;
        }
        let dist = pos.distance(other);
        if dist < CROWD_SEPARATION_RADIUS && dist > 0.0 {
            sum += repel(pos, other, CROWD_SEPARATION_RADIUS / (dist + 1.0));
            count += 1;
        }
    }

    if state != ProtesterState::Riot {
        for (_, officer) in living_police(police) {
            let dist = pos.distance(officer);
            if dist < POLICE_AVOID_RADIUS && dist > 0.0 {
                sum += repel(pos, officer, POLICE_AVOID_STRENGTH / (dist + 1.0));
                count += 1;
            }
        }
    }

    if count == 0 {
        Vec2::ZERO
    } else {
        sum / count as f32
    }
}
