//! Snapshot builder: reads the world and produces a `SessionSnapshot`.
//!
//! Read-only; runs after all other systems.

use uprising_core::enums::{GamePhase, Outcome};
use uprising_core::events::SimEvent;
use uprising_core::state::*;
use uprising_core::types::{Rect, SimTime};

use crate::world::{SessionStats, World};

/// Everything outside the world the snapshot needs.
pub struct SnapshotInput<'a> {
    pub world: &'a World,
    pub stats: &'a SessionStats,
    pub time: SimTime,
    pub phase: GamePhase,
    pub outcome: Option<Outcome>,
    pub selection: Option<Rect>,
    pub events: Vec<SimEvent>,
}

pub fn build_snapshot(input: SnapshotInput) -> SessionSnapshot {
    let world = input.world;
    let stats = input.stats;

    let protesters: Vec<ProtesterView> = world
        .protesters
        .iter()
        .enumerate()
        .filter(|(_, p)| p.alive)
        .map(|(index, p)| ProtesterView {
            index,
            pos: p.pos,
            state: p.state,
            morale: p.morale,
            selected: p.selected,
            anim_frame: p.anim_frame,
            face_right: p.face_right,
        })
        .collect();

    let police: Vec<PoliceView> = world
        .police
        .iter()
        .enumerate()
        .filter(|(_, p)| p.alive)
        .map(|(index, p)| PoliceView {
            index,
            pos: p.pos,
            state: p.state,
            health: p.health,
            anim_frame: p.anim_frame,
            face_right: p.face_right,
        })
        .collect();

    let paint_order = paint_order(&protesters, &police);

    let projectiles = world
        .projectiles
        .active()
        .map(|p| ProjectileView {
            pos: p.pos,
            vel: p.vel,
            kind: p.kind,
        })
        .collect();

    let gas_clouds = world
        .gas
        .active()
        .map(|c| GasCloudView {
            pos: c.pos,
            radius: c.radius,
            age: c.age,
        })
        .collect();

    let heli = &world.helicopter;
    let helicopter = heli.active.then(|| HelicopterView {
        pos: heli.pos,
        shots_fired: heli.shots_fired,
        dwell_remaining: heli.dwell_remaining.max(0.0),
    });

    let surge_remaining_secs = stats
        .surge
        .active
        .then(|| (stats.surge.ends_at - input.time.elapsed_secs).max(0.0));

    let hud = HudView {
        global_morale: stats.global_morale,
        max_morale: stats.max_morale,
        time_remaining_secs: input.time.remaining_secs(),
        protesters_alive: stats.protesters_alive,
        police_alive: stats.police_alive,
        arrests: stats.arrests,
        control_fraction: stats.control_fraction(world),
        control_streak_secs: stats.control_streak,
        surge_remaining_secs,
    };

    SessionSnapshot {
        time: input.time,
        phase: input.phase,
        outcome: input.outcome,
        protesters,
        police,
        paint_order,
        projectiles,
        gas_clouds,
        helicopter,
        selection: input.selection,
        hud,
        events: input.events,
    }
}

/// Living agents back to front. The sort is stable, so equal rows keep
/// protesters before police and lower indices first.
fn paint_order(protesters: &[ProtesterView], police: &[PoliceView]) -> Vec<PaintEntry> {
    let mut order: Vec<PaintEntry> = protesters
        .iter()
        .map(|p| PaintEntry {
            kind: AgentKind::Protester,
            index: p.index,
            y: p.pos.y,
        })
        .chain(police.iter().map(|p| PaintEntry {
            kind: AgentKind::Police,
            index: p.index,
            y: p.pos.y,
        }))
        .collect();
    order.sort_by(|a, b| a.y.total_cmp(&b.y));
    order
}
