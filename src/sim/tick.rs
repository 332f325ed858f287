//! Single integration step
//!
//! Advances the body by one step from an input snapshot. Step order:
//! jump, movement keys, grapple, vertical integration, horizontal speed,
//! horizontal position.

use serde::{Deserialize, Serialize};

use super::state::{Contact, SimState};
use super::vector::Vector2;

/// Input held during a step, written by the host's input handlers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Grapple trigger (primary pointer button)
    pub grapple: bool,
    /// Pointer position in surface coordinates
    pub target: Vector2,
}

/// Advance the simulation by one step of `dt` seconds
pub fn tick(state: &mut SimState, input: &InputSnapshot, dt: f64) {
    let tuning = &state.tuning;
    let motion = &mut state.motion;

    if input.jump && motion.try_jump(tuning.jump_velocity) {
        log::debug!("Jump at step {}", state.time_steps);
    }

    let moving = motion.steer(input.left, input.right);

    let mut position = state.body.position();
    if input.grapple && motion.try_grapple(position, input.target, tuning.grapple_impulse) {
        log::debug!(
            "Grapple toward {:?}, velocity now {:?}",
            input.target,
            motion.velocity
        );
    }

    let floor_y = state.surface.y - state.body.height();
    match motion.contact(position.y, floor_y) {
        Contact::Airborne => {
            motion.fall(dt, tuning.gravity);
            position.y = (position.y + motion.velocity.y).min(floor_y);
        }
        Contact::Grounded => {
            if motion.land() {
                log::debug!("Landed at x={:.2}", position.x);
            }
        }
    }

    motion.run(moving, dt, tuning);
    position.x += motion.direction.x * motion.velocity.x;

    state.body.set_position(position);
    state.time_steps += 1;

    log::trace!(
        "step {} pos={:?} vel={:?}",
        state.time_steps,
        position,
        state.motion.velocity
    );
}
