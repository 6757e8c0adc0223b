//! Protester behavior state machine.
//!
//! One call computes a protester's next movement, morale and state from the
//! current crowd and police positions. Effects on other agents are reported
//! as [`ProtesterAction`]s for the caller to apply before the next protester
//! is evaluated.

use glam::Vec2;

use uprising_core::components::{Police, Protester};
use uprising_core::constants::*;
use uprising_core::enums::ProtesterState;
use uprising_core::types::{clamp_morale, clamp_to_playfield};

use crate::animation;
use crate::steering::{self, living_police, living_protesters};

/// Input to the protester FSM for a single agent.
pub struct ProtesterContext<'a> {
    pub index: usize,
    pub protesters: &'a [Protester],
    pub police: &'a [Police],
    pub dt: f32,
}

/// Side effect on another agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProtesterAction {
    /// Chant spill-over onto a neighbour.
    BoostMorale { protester: usize, amount: f32 },
    /// Riot contact damage on an officer.
    Strike { officer: usize, damage: f32 },
}

/// Output from the protester FSM.
#[derive(Debug, Clone)]
pub struct ProtesterUpdate {
    pub next: Protester,
    /// Whether this protester chanted this tick.
    pub chanting: bool,
}

/// Speed multiplier applied to the force cap.
pub fn speed_multiplier(state: ProtesterState) -> f32 {
    match state {
        ProtesterState::Chant => CHANT_SPEED_MULTIPLIER,
        ProtesterState::Riot => RIOT_SPEED_MULTIPLIER,
        ProtesterState::Flee => FLEE_SPEED_MULTIPLIER,
        ProtesterState::Idle | ProtesterState::Arrested => IDLE_SPEED_MULTIPLIER,
    }
}

/// Evaluate one protester. Dead or arrested agents come back unchanged.
pub fn evaluate(ctx: &ProtesterContext, actions: &mut Vec<ProtesterAction>) -> ProtesterUpdate {
    let me = &ctx.protesters[ctx.index];
    let mut next = me.clone();
    if !me.alive || me.state == ProtesterState::Arrested {
        return ProtesterUpdate {
            next,
            chanting: false,
        };
    }

    let (anim_timer, anim_frame) =
        animation::step(me.anim_timer, me.anim_frame, me.state.is_running(), ctx.dt);
    next.anim_timer = anim_timer;
    next.anim_frame = anim_frame;
    next.face_right = me.vel.x >= 0.0;
    next.stone_cooldown = (me.stone_cooldown - ctx.dt).max(0.0);

    let seek = steering::arrive(me.pos, me.target_pos, SEEK_ARRIVAL_RADIUS, SEEK_WEIGHT);
    let multiplier = speed_multiplier(me.state);
    let mut state_force = Vec2::ZERO;
    let mut chanting = false;

    match me.state {
        ProtesterState::Chant => {
            chanting = true;
            for (j, pos) in living_protesters(ctx.protesters) {
                if j != ctx.index && me.pos.distance(pos) < CHANT_RADIUS {
                    actions.push(ProtesterAction::BoostMorale {
                        protester: j,
                        amount: CHANT_NEIGHBOUR_BOOST,
                    });
                }
            }
        }
        ProtesterState::Riot => {
            if let Some((officer, _)) =
                steering::nearest(me.pos, living_police(ctx.police), f32::INFINITY)
            {
                state_force =
                    steering::seek(me.pos, ctx.police[officer].pos, RIOT_SEEK_WEIGHT);
            }
        }
        ProtesterState::Flee => {
            for (_, pos) in living_police(ctx.police) {
                if me.pos.distance(pos) < FLEE_REPULSION_RADIUS {
                    state_force += steering::repel(me.pos, pos, FLEE_REPULSION_WEIGHT);
                }
            }
            next.behavior_timer = me.behavior_timer + ctx.dt;
            if next.behavior_timer > FLEE_DURATION_SECS {
                next.state = ProtesterState::Idle;
                next.behavior_timer = 0.0;
            }
        }
        ProtesterState::Idle | ProtesterState::Arrested => {}
    }

    // The cap uses the multiplier of the state the tick started in.
    let separation = steering::crowd_separation(
        ctx.index,
        me.pos,
        me.state,
        ctx.protesters,
        ctx.police,
    ) * SEPARATION_WEIGHT;
    let force = steering::cap(
        seek + state_force + separation,
        PROTESTER_MAX_FORCE * multiplier,
    );

    next.vel = me.vel.lerp(force, VELOCITY_BLEND);
    let moved = clamp_to_playfield(me.pos + next.vel);
    next.distance_travelled = me.distance_travelled + me.pos.distance(moved);
    next.pos = moved;

    let morale_delta = match next.state {
        ProtesterState::Chant => CHANT_SELF_BOOST,
        ProtesterState::Flee => -FLEE_MORALE_DECAY,
        _ => 0.0,
    };
    next.morale = clamp_morale(me.morale + morale_delta);

    if next.state == ProtesterState::Riot {
        let damage = RIOT_STRIKE_DPS * ctx.dt;
        for (officer, pos) in living_police(ctx.police) {
            if next.pos.distance(pos) < RIOT_STRIKE_RADIUS {
                actions.push(ProtesterAction::Strike { officer, damage });
            }
        }
    }

    ProtesterUpdate { next, chanting }
}
