//! Police behavior state machine.
//!
//! Pure function: the caller supplies the random roam point and the fire
//! readiness, and applies the returned actions (bullets, gas, arrests).

use glam::Vec2;

use uprising_core::components::{Police, Protester};
use uprising_core::constants::*;
use uprising_core::enums::{PoliceState, ProtesterState};
use uprising_core::types::clamp_to_playfield;

use crate::animation;
use crate::steering::{self, living_protesters};

/// Input to the police FSM for a single officer.
pub struct PoliceContext<'a> {
    pub officer: &'a Police,
    /// Personal fire cooldown has expired.
    pub fire_ready: bool,
    /// Random roaming goal for this tick (used only while patrolling).
    pub roam_point: Vec2,
    pub protesters: &'a [Protester],
    pub dt: f32,
}

/// Side effect requested by an officer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PoliceAction {
    /// Shoot at a protester's current position.
    Fire { target: Vec2 },
    /// Place a tear-gas cloud if a slot is free.
    DeployGas { at: Vec2 },
    /// Take a fleeing protester out of play.
    Arrest { protester: usize },
}

/// Output from the police FSM.
#[derive(Debug, Clone)]
pub struct PoliceUpdate {
    pub next: Police,
    pub state_changed: bool,
}

/// Evaluate one officer. Dead officers come back unchanged.
pub fn evaluate(ctx: &PoliceContext, actions: &mut Vec<PoliceAction>) -> PoliceUpdate {
    let me = ctx.officer;
    let mut next = me.clone();
    if !me.alive {
        return PoliceUpdate {
            next,
            state_changed: false,
        };
    }

    let (anim_timer, anim_frame) =
        animation::step(me.anim_timer, me.anim_frame, me.state.is_running(), ctx.dt);
    next.anim_timer = anim_timer;
    next.anim_frame = anim_frame;
    next.face_right = me.vel.x >= 0.0;
    next.timer = me.timer - ctx.dt;

    if ctx.fire_ready {
        if let Some((target, _)) =
            steering::nearest(me.pos, living_protesters(ctx.protesters), FIRE_RANGE)
        {
            actions.push(PoliceAction::Fire {
                target: ctx.protesters[target].pos,
            });
        }
    }

    match me.state {
        PoliceState::Patrol => patrol(ctx, &mut next),
        PoliceState::Deploy => deploy(ctx, &mut next, actions),
        PoliceState::Intervene => intervene(ctx, &mut next),
        PoliceState::Arrest => arrest(ctx, &mut next, actions),
        PoliceState::Retreat => {}
    }

    next.pos = clamp_to_playfield(next.pos + next.vel);
    PoliceUpdate {
        state_changed: next.state != me.state,
        next,
    }
}

fn patrol(ctx: &PoliceContext, next: &mut Police) {
    let me = ctx.officer;
    if me.pos.distance(ctx.roam_point) > PATROL_ARRIVAL_RADIUS {
        next.vel = steering::seek(me.pos, ctx.roam_point, PATROL_SPEED);
    } else {
        next.vel = me.vel * PATROL_DAMPING;
    }

    let crowd_close = ctx.protesters.iter().any(|p| {
        p.alive && p.state != ProtesterState::Flee && me.pos.distance(p.pos) < DEPLOY_TRIGGER_RADIUS
    });
    if crowd_close {
        next.state = PoliceState::Deploy;
        next.timer = DEPLOY_DURATION_SECS;
    } else if fleeing_within_reach(me.pos, ctx.protesters).is_some() {
        next.state = PoliceState::Arrest;
    }
}

fn deploy(ctx: &PoliceContext, next: &mut Police, actions: &mut Vec<PoliceAction>) {
    if let Some((target, _)) = steering::nearest(
        ctx.officer.pos,
        living_protesters(ctx.protesters),
        GAS_TARGET_RADIUS,
    ) {
        actions.push(PoliceAction::DeployGas {
            at: ctx.protesters[target].pos,
        });
    }
    if next.timer <= 0.0 {
        next.state = PoliceState::Patrol;
    }
}

fn intervene(ctx: &PoliceContext, next: &mut Police) {
    if let Some(centre) = crowd_centroid(ctx.protesters) {
        if ctx.officer.pos.distance(centre) > PATROL_ARRIVAL_RADIUS {
            next.vel = steering::seek(ctx.officer.pos, centre, INTERVENE_SPEED);
        }
    }
}

fn arrest(ctx: &PoliceContext, next: &mut Police, actions: &mut Vec<PoliceAction>) {
    if let Some(protester) = fleeing_within_reach(ctx.officer.pos, ctx.protesters) {
        actions.push(PoliceAction::Arrest { protester });
    }
    next.state = PoliceState::Patrol;
}

/// First living fleeing protester, in index order, within arrest range.
fn fleeing_within_reach(pos: Vec2, protesters: &[Protester]) -> Option<usize> {
    protesters.iter().position(|p| {
        p.alive && p.state == ProtesterState::Flee && pos.distance(p.pos) < ARREST_RADIUS
    })
}

/// Centre of all living protesters that are not fleeing.
pub fn crowd_centroid(protesters: &[Protester]) -> Option<Vec2> {
    let (sum, count) = protesters
        .iter()
        .filter(|p| p.alive && p.state != ProtesterState::Flee)
        .fold((Vec2::ZERO, 0u32), |(sum, n), p| (sum + p.pos, n + 1));
    (count > 0).then(|| sum / count as f32)
}
