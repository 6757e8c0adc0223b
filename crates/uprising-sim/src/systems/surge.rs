//! Police surge: a periodic window in which every officer advances on the crowd.

use uprising_core::constants::*;
use uprising_core::enums::PoliceState;
use uprising_core::events::SimEvent;

use crate::world::{SessionStats, World};

pub fn run(world: &mut World, stats: &mut SessionStats, events: &mut Vec<SimEvent>, now: f64) {
    let surge = &mut stats.surge;

    if !surge.active && now - surge.last_ended_at > SURGE_INTERVAL_SECS {
        surge.active = true;
        surge.ends_at = now + SURGE_DURATION_SECS;
        set_living_police(world, PoliceState::Intervene);
        tracing::debug!(at = now, until = surge.ends_at, "police surge started");
        events.push(SimEvent::SurgeStarted);
    }

    if surge.active && now > surge.ends_at {
        surge.active = false;
        surge.last_ended_at = now;
        set_living_police(world, PoliceState::Patrol);
        tracing::debug!(at = now, "police surge ended");
        events.push(SimEvent::SurgeEnded);
    }
}

fn set_living_police(world: &mut World, state: PoliceState) {
    for officer in world.police.iter_mut().filter(|p| p.alive) {
        officer.state = state;
    }
}
