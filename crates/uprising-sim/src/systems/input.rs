//! Player input: rectangle selection and crowd orders.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use uprising_core::commands::PlayerCommand;
use uprising_core::constants::*;
use uprising_core::enums::ProtesterState;
use uprising_core::events::SimEvent;
use uprising_core::types::Rect;

use crate::systems::projectiles;
use crate::world::World;

/// Pointer state carried between commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    /// Drag origin and latest pointer position while the primary button is held.
    drag: Option<(Vec2, Vec2)>,
}

impl InputState {
    /// Rectangle currently being dragged.
    pub fn selection_rect(&self) -> Option<Rect> {
        self.drag.map(|(start, end)| Rect::from_corners(start, end))
    }
}

/// Apply one gameplay command. Session-control commands are ignored here.
pub fn apply(
    command: PlayerCommand,
    input: &mut InputState,
    world: &mut World,
    events: &mut Vec<SimEvent>,
) {
    match command {
        PlayerCommand::PointerDown { pos } => {
            input.drag = Some((pos, pos));
        }
        PlayerCommand::PointerDrag { pos } => {
            if let Some((_, end)) = input.drag.as_mut() {
                *end = pos;
            }
        }
        PlayerCommand::PointerUp { pos } => {
            if let Some((start, _)) = input.drag.take() {
                select_in(world, Rect::from_corners(start, pos));
            }
        }
        PlayerCommand::SelectAll => {
            for p in &mut world.protesters {
                p.selected = p.alive;
            }
        }
        PlayerCommand::Command { target } => {
            for i in selected(world) {
                let p = &mut world.protesters[i];
                p.target_pos = target;
                p.state = p.state.cycled();
                try_throw(world, i, target, events);
            }
        }
        PlayerCommand::ThrowStones { target } => {
            for i in selected(world) {
                try_throw(world, i, target, events);
            }
        }
        PlayerCommand::EmergencyRetreat => {
            for i in selected(world) {
                let p = &mut world.protesters[i];
                p.state = ProtesterState::Flee;
                p.target_pos = Vec2::new(RETREAT_LINE_X, p.pos.y);
            }
        }
        PlayerCommand::Start
        | PlayerCommand::Pause
        | PlayerCommand::Resume
        | PlayerCommand::Restart => {}
    }
}

/// Living protesters take the selection flag from the rectangle; dead ones keep theirs.
fn select_in(world: &mut World, rect: Rect) {
    for p in world.protesters.iter_mut().filter(|p| p.alive) {
        p.selected = rect.contains(p.pos);
    }
}

fn selected(world: &World) -> Vec<usize> {
    world
        .protesters
        .iter()
        .enumerate()
        .filter(|(_, p)| p.selected && p.alive)
        .map(|(i, _)| i)
        .collect()
}

fn try_throw(world: &mut World, index: usize, aim: Vec2, events: &mut Vec<SimEvent>) {
    if world.protesters[index].stone_cooldown > 0.0 {
        return;
    }
    projectiles::throw_stone(world, index, aim, events);
    world.protesters[index].stone_cooldown = STONE_COOLDOWN_SECS;
}
