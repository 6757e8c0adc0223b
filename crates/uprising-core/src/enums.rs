//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Protester behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtesterState {
    /// Walking toward the current target, no extra behavior.
    #[default]
    Idle,
    /// Nearly stationary, raising own and nearby morale.
    Chant,
    /// Charging the nearest officer.
    Riot,
    /// Running from police, losing morale.
    Flee,
    /// Removed from play by an arrest. Terminal.
    Arrested,
}

impl ProtesterState {
    /// State reached when the player cycles this protester with a command click.
    pub fn cycled(self) -> Self {
        match self {
            Self::Idle => Self::Chant,
            Self::Chant => Self::Riot,
            Self::Riot | Self::Flee => Self::Idle,
            Self::Arrested => Self::Arrested,
        }
    }

    /// Riot and Flee animate on the fast run cycle.
    pub fn is_running(self) -> bool {
        matches!(self, Self::Riot | Self::Flee)
    }
}

/// Police behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoliceState {
    /// Roaming the police side of the stage.
    #[default]
    Patrol,
    /// Throwing tear gas for a fixed window.
    Deploy,
    /// Grabbing a nearby fleeing protester.
    Arrest,
    /// Forced advance on the crowd during a surge.
    Intervene,
    /// Declared but never entered.
    Retreat,
}

impl PoliceState {
    /// Deploy and Intervene animate on the fast run cycle.
    pub fn is_running(self) -> bool {
        matches!(self, Self::Deploy | Self::Intervene)
    }
}

/// Projectile type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Thrown by protesters, hurts police.
    #[default]
    Stone,
    /// Fired by police officers.
    Bullet,
    /// Fired by the helicopter.
    HelicopterBullet,
}

/// Who fired a projectile. Indices refer to stable population slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileOwner {
    #[default]
    None,
    Protester(usize),
    Officer(usize),
    Helicopter,
}

/// Top-level session phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Seeded and waiting for the start command.
    #[default]
    Briefing,
    Playing,
    Paused,
    Won,
    Lost,
}

impl GamePhase {
    pub fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Why the session was won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinReason {
    /// Every officer is down.
    PoliceDefeated,
    /// Morale and territory thresholds were held long enough.
    TerritoryHeld,
}

/// Why the session was lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossReason {
    MoraleCollapsed,
    CrowdDispersed,
    TimeExpired,
}

/// Final result of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won(WinReason),
    Lost(LossReason),
}

impl Outcome {
    pub fn phase(self) -> GamePhase {
        match self {
            Self::Won(_) => GamePhase::Won,
            Self::Lost(_) => GamePhase::Lost,
        }
    }
}

/// What took a protester out of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DownCause {
    Bullet,
    HelicopterBullet,
    Arrest,
}
