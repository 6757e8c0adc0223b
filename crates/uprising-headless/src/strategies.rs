//! Scripted player strategies for headless sessions.
//!
//! A strategy looks at the latest snapshot and answers with the commands a
//! player would issue before the next tick.

use clap::ValueEnum;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use uprising_core::commands::PlayerCommand;
use uprising_core::constants::TERRITORY_LINE_X;
use uprising_core::state::SessionSnapshot;

/// Which scripted player drives the crowd.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Never issues a gameplay command.
    #[default]
    Passive,
    /// Pushes toward police territory, throws stones and retreats when
    /// morale collapses.
    Autopilot,
}

impl Strategy {
    /// Fresh per-session executor, or `None` for a player that never acts.
    pub fn executor(self) -> Option<Autopilot> {
        match self {
            Self::Passive => None,
            Self::Autopilot => Some(Autopilot::default()),
        }
    }
}

/// Seconds between re-issued advance orders.
pub const ADVANCE_INTERVAL_SECS: f64 = 4.0;
/// Seconds between stone volleys.
pub const VOLLEY_INTERVAL_SECS: f64 = 1.0;
/// Global morale below which the crowd is pulled back.
pub const RETREAT_BELOW_MORALE: f32 = 25.0;
/// Orders are held back this long after a retreat.
pub const RETREAT_HOLD_SECS: f64 = 6.0;
/// Minimum gap between two retreats.
pub const RETREAT_COOLDOWN_SECS: f64 = 30.0;

/// Rally point just past the territory line.
const ADVANCE_TARGET: Vec2 = Vec2::new(TERRITORY_LINE_X + 200.0, 520.0);

/// Timer-driven player. Every advance order selects the whole crowd, so the
/// volleys in between reuse that selection.
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    next_advance_at: f64,
    next_volley_at: f64,
    hold_until: f64,
    next_retreat_allowed_at: f64,
}

impl Autopilot {
    pub fn decide(&mut self, snapshot: &SessionSnapshot) -> Vec<PlayerCommand> {
        let now = snapshot.time.elapsed_secs;
        let mut commands = Vec::new();

        if snapshot.hud.global_morale < RETREAT_BELOW_MORALE && now >= self.next_retreat_allowed_at {
            tracing::debug!(now, morale = snapshot.hud.global_morale, "autopilot retreat");
            commands.push(PlayerCommand::SelectAll);
            commands.push(PlayerCommand::EmergencyRetreat);
            self.hold_until = now + RETREAT_HOLD_SECS;
            self.next_retreat_allowed_at = now + RETREAT_COOLDOWN_SECS;
            self.next_advance_at = self.hold_until;
            return commands;
        }
        if now < self.hold_until {
            return commands;
        }

        if now >= self.next_advance_at {
            commands.push(PlayerCommand::SelectAll);
            commands.push(PlayerCommand::Command {
                target: ADVANCE_TARGET,
            });
            self.next_advance_at = now + ADVANCE_INTERVAL_SECS;
            self.next_volley_at = now + VOLLEY_INTERVAL_SECS;
        } else if now >= self.next_volley_at {
            commands.push(PlayerCommand::ThrowStones {
                target: ADVANCE_TARGET,
            });
            self.next_volley_at = now + VOLLEY_INTERVAL_SECS;
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_at(secs: f64, morale: f32) -> SessionSnapshot {
        let mut snapshot = SessionSnapshot::default();
        snapshot.time.elapsed_secs = secs;
        snapshot.hud.global_morale = morale;
        snapshot
    }

    #[test]
    fn test_passive_has_no_executor() {
        assert!(Strategy::Passive.executor().is_none());
        assert!(Strategy::Autopilot.executor().is_some());
    }

    #[test]
    fn test_first_decision_advances_whole_crowd() {
        let mut pilot = Autopilot::default();
        let commands = pilot.decide(&snapshot_at(0.0, 50.0));
        assert_eq!(
            commands,
            vec![
                PlayerCommand::SelectAll,
                PlayerCommand::Command {
                    target: ADVANCE_TARGET
                },
            ]
        );
        assert!(ADVANCE_TARGET.x > TERRITORY_LINE_X);
    }

    #[test]
    fn test_volleys_between_advances() {
        let mut pilot = Autopilot::default();
        pilot.decide(&snapshot_at(0.0, 50.0));
        assert!(pilot.decide(&snapshot_at(0.5, 50.0)).is_empty());
        assert_eq!(
            pilot.decide(&snapshot_at(1.0, 50.0)),
            vec![PlayerCommand::ThrowStones {
                target: ADVANCE_TARGET
            }]
        );
        let again = pilot.decide(&snapshot_at(4.0, 50.0));
        assert_eq!(again[0], PlayerCommand::SelectAll);
    }

    #[test]
    fn test_low_morale_retreats_then_holds() {
        let mut pilot = Autopilot::default();
        let commands = pilot.decide(&snapshot_at(10.0, 20.0));
        assert_eq!(
            commands,
            vec![PlayerCommand::SelectAll, PlayerCommand::EmergencyRetreat]
        );
        // Still low, but inside the hold window and the retreat cooldown.
        assert!(pilot.decide(&snapshot_at(12.0, 20.0)).is_empty());
        // Hold over: orders resume even though morale is still low.
        let resumed = pilot.decide(&snapshot_at(16.0, 20.0));
        assert!(resumed.contains(&PlayerCommand::SelectAll));
        assert!(!resumed.contains(&PlayerCommand::EmergencyRetreat));
        // Cooldown over: retreat again.
        let second = pilot.decide(&snapshot_at(40.0, 20.0));
        assert_eq!(second[1], PlayerCommand::EmergencyRetreat);
    }

    #[test]
    fn test_strategy_serializes_snake_case() {
        let json = serde_json::to_string(&Strategy::Autopilot).unwrap();
        assert_eq!(json, "\"autopilot\"");
    }
}
