//! Protester update: runs the FSM for each living protester in index order
//! and applies its effects before the next one is evaluated.

use uprising_ai::protester::{self, ProtesterAction, ProtesterContext};
use uprising_core::constants::*;
use uprising_core::enums::ProtesterState;
use uprising_core::events::SimEvent;
use uprising_core::types::clamp_morale;

use crate::systems::police::wound_officer;
use crate::world::{SessionStats, World};

pub fn run(
    world: &mut World,
    stats: &mut SessionStats,
    actions: &mut Vec<ProtesterAction>,
    events: &mut Vec<SimEvent>,
    now: f64,
    dt: f32,
) {
    let mut chanting = 0u32;

    for i in 0..world.protesters.len() {
        let p = &world.protesters[i];
        if !p.alive || p.state == ProtesterState::Arrested {
            continue;
        }

        actions.clear();
        let update = {
            let ctx = ProtesterContext {
                index: i,
                protesters: &world.protesters,
                police: &world.police,
                dt,
            };
            protester::evaluate(&ctx, actions)
        };
        if update.chanting {
            chanting += 1;
        }
        world.protesters[i] = update.next;

        for action in actions.drain(..) {
            match action {
                ProtesterAction::BoostMorale { protester, amount } => {
                    let other = &mut world.protesters[protester];
                    other.morale = clamp_morale(other.morale + amount);
                }
                ProtesterAction::Strike { officer, damage } => {
                    if wound_officer(world, officer, damage) {
                        stats.adjust_morale(OFFICER_KILL_MORALE_BONUS);
                        tracing::debug!(protester = i, officer, "officer down in melee");
                        events.push(SimEvent::OfficerDown { officer });
                    }
                }
            }
        }
    }

    stats.adjust_morale(CHANT_GLOBAL_BOOST * chanting as f32);

    if now - stats.last_decay_at > 1.0 {
        stats.adjust_morale(-MORALE_DECAY_PER_SEC);
        stats.last_decay_at = now;
    }

    stats.recount(world);
    stats.record_watermark();
}
