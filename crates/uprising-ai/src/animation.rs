//! Sprite frame cycling.

use uprising_core::constants::*;

/// Advance an animation by `dt`. Running agents use the fast three-frame
/// cycle, everyone else the slow two-frame one. Returns the new timer and frame.
pub fn step(timer: f32, frame: u8, running: bool, dt: f32) -> (f32, u8) {
    let (cycle, frames) = if running {
        (ANIM_FAST_CYCLE_SECS, ANIM_FAST_FRAMES)
    } else {
        (ANIM_SLOW_CYCLE_SECS, ANIM_SLOW_FRAMES)
    };
    let timer = timer + dt;
    if timer >= cycle {
        (0.0, (frame + 1) % frames)
    } else {
        (timer, frame)
    }
}
