//! Session snapshot: the complete visible state handed to presentation each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{Rect, SimTime};

/// Complete session state after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub outcome: Option<Outcome>,
    pub protesters: Vec<ProtesterView>,
    pub police: Vec<PoliceView>,
    /// Living agents ordered back to front (ascending y).
    pub paint_order: Vec<PaintEntry>,
    pub projectiles: Vec<ProjectileView>,
    pub gas_clouds: Vec<GasCloudView>,
    pub helicopter: Option<HelicopterView>,
    /// Rectangle being dragged, if any.
    pub selection: Option<Rect>,
    pub hud: HudView,
    /// Events raised since the previous snapshot.
    pub events: Vec<SimEvent>,
}

/// A living protester.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProtesterView {
    pub index: usize,
    pub pos: Vec2,
    pub state: ProtesterState,
    pub morale: f32,
    pub selected: bool,
    pub anim_frame: u8,
    pub face_right: bool,
}

/// A living officer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoliceView {
    pub index: usize,
    pub pos: Vec2,
    pub state: PoliceState,
    pub health: f32,
    pub anim_frame: u8,
    pub face_right: bool,
}

/// Which population a paint entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentKind {
    Protester,
    Police,
}

/// One agent in depth order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaintEntry {
    pub kind: AgentKind,
    pub index: usize,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub pos: Vec2,
    pub vel: Vec2,
    pub kind: ProjectileKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasCloudView {
    pub pos: Vec2,
    pub radius: f32,
    pub age: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HelicopterView {
    pub pos: Vec2,
    pub shots_fired: u32,
    /// Display countdown for the current pass, floored at zero.
    pub dwell_remaining: f32,
}

/// Heads-up aggregates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HudView {
    pub global_morale: f32,
    /// Highest global morale reached this session.
    pub max_morale: f32,
    pub time_remaining_secs: f64,
    pub protesters_alive: usize,
    pub police_alive: usize,
    pub arrests: u32,
    /// Share of living protesters beyond the territory line.
    pub control_fraction: f32,
    /// Seconds the win thresholds have held without a break.
    pub control_streak_secs: f32,
    /// Seconds left in the running police surge, if any.
    pub surge_remaining_secs: Option<f64>,
}
