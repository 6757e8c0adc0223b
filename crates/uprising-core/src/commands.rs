//! Player commands sent from the presentation layer to the session.
//!
//! Commands are queued and processed at the next tick boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Selection ---
    /// Primary button pressed: starts a selection rectangle.
    PointerDown { pos: Vec2 },
    /// Pointer moved with the primary button held.
    PointerDrag { pos: Vec2 },
    /// Primary button released: selects every living protester in the rectangle.
    PointerUp { pos: Vec2 },
    /// Select every living protester.
    SelectAll,

    // --- Orders ---
    /// Secondary click: move selected protesters, cycle their state, throw.
    Command { target: Vec2 },
    /// Throw stones from the selection without changing state.
    ThrowStones { target: Vec2 },
    /// Send the selection fleeing back to the retreat line.
    EmergencyRetreat,

    // --- Session control ---
    /// Leave the briefing and start the clock.
    Start,
    Pause,
    Resume,
    /// Re-seed the session from its configured seed.
    Restart,
}

impl PlayerCommand {
    /// Commands that change the crowd and therefore only apply while playing.
    pub fn is_gameplay(&self) -> bool {
        !matches!(
            self,
            Self::Start | Self::Pause | Self::Resume | Self::Restart
        )
    }
}
