//! Win/lose evaluation at the end of a playing tick.

use uprising_core::constants::*;
use uprising_core::enums::{LossReason, Outcome, WinReason};

use crate::world::{SessionStats, World};

/// Recount the populations and decide whether the session is over.
/// A win takes priority over a simultaneous loss.
pub fn run(world: &World, stats: &mut SessionStats, now: f64, dt: f32) -> Option<Outcome> {
    stats.recount(world);
    check_win(world, stats, dt)
        .map(Outcome::Won)
        .or_else(|| check_loss(stats, now).map(Outcome::Lost))
}

/// Police wiped out, or morale and territory held together long enough.
/// The control streak resets the moment either threshold fails.
pub fn check_win(world: &World, stats: &mut SessionStats, dt: f32) -> Option<WinReason> {
    if stats.police_alive == 0 {
        return Some(WinReason::PoliceDefeated);
    }

    let holding = stats.global_morale > WIN_MORALE_THRESHOLD
        && stats.control_fraction(world) > WIN_CONTROL_FRACTION;
    if !holding {
        stats.control_streak = 0.0;
        return None;
    }

    stats.control_streak += dt;
    (stats.control_streak >= WIN_CONTROL_HOLD_SECS).then_some(WinReason::TerritoryHeld)
}

pub fn check_loss(stats: &SessionStats, now: f64) -> Option<LossReason> {
    if stats.global_morale < LOSE_MORALE_THRESHOLD {
        Some(LossReason::MoraleCollapsed)
    } else if stats.protesters_alive < LOSE_MIN_PROTESTERS {
        Some(LossReason::CrowdDispersed)
    } else if now > SESSION_DURATION_SECS {
        Some(LossReason::TimeExpired)
    } else {
        None
    }
}
