//! Events emitted by the simulation for audio and UI feedback.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// One notable thing that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A protester threw a stone.
    StoneThrown { protester: usize, at: Vec2 },
    /// An officer fired at the crowd.
    BulletFired { officer: usize, at: Vec2 },
    /// The helicopter fired at the crowd.
    HelicopterFired { at: Vec2 },
    /// A tear-gas cloud was placed.
    GasDeployed { officer: usize, at: Vec2 },
    /// A protester left play.
    ProtesterDown { protester: usize, cause: DownCause },
    /// An officer's health reached zero.
    OfficerDown { officer: usize },
    /// An officer arrested a fleeing protester.
    Arrest { officer: usize, protester: usize },
    SurgeStarted,
    SurgeEnded,
    HelicopterInbound,
    HelicopterDeparted,
    SessionWon { reason: WinReason },
    SessionLost { reason: LossReason },
}
