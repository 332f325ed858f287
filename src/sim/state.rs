//! Simulation state and motion rules
//!
//! Everything the per-step update mutates lives here, in one context struct
//! the host owns. No module-level mutable state.

use serde::Serialize;

use super::rect::OrientedRect;
use super::vector::{Vector2, VectorExt};
use crate::error::SandboxError;
use crate::settings::{PhysicsTuning, Settings};

/// Whether the body rests on the floor line this step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Contact {
    Grounded,
    Airborne,
}

/// Jump lock: set by the jump input, released only by landing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum JumpPhase {
    #[default]
    Ready,
    Jumping,
}

/// Grapple lock: set by the grapple trigger, released only by landing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum GrapplePhase {
    #[default]
    Ready,
    Grappling,
}

/// Velocity, facing and the two input locks of the player body
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MotionState {
    /// `x` is a non-negative speed; the sign lives in `direction`.
    /// `y` is signed, negative is up.
    pub velocity: Vector2,
    /// Horizontal facing, `x` in {-1, 0, 1}
    pub direction: Vector2,
    pub jump: JumpPhase,
    pub grapple: GrapplePhase,
}

impl MotionState {
    /// Grounded iff the body sits exactly on the floor line and is not moving up
    pub fn contact(&self, y: f64, floor_y: f64) -> Contact {
        if y == floor_y && self.velocity.y >= 0.0 {
            Contact::Grounded
        } else {
            Contact::Airborne
        }
    }

    #[inline]
    pub fn is_jumping(&self) -> bool {
        self.jump == JumpPhase::Jumping
    }

    #[inline]
    pub fn is_grappling(&self) -> bool {
        self.grapple == GrapplePhase::Grappling
    }

    /// Launch upward unless a jump is already in progress
    pub fn try_jump(&mut self, jump_velocity: f64) -> bool {
        if self.is_jumping() {
            return false;
        }
        self.jump = JumpPhase::Jumping;
        self.velocity.y = jump_velocity;
        true
    }

    /// Rebuild facing from the held keys. Returns whether any movement key is
    /// held; with none held the previous facing is kept.
    pub fn steer(&mut self, left: bool, right: bool) -> bool {
        if !(left || right) {
            return false;
        }
        self.direction.x = 0.0;
        if right {
            self.direction.x += 1.0;
        }
        if left {
            self.direction.x -= 1.0;
        }
        true
    }

    /// Fire the grapple from `from` toward `target`.
    ///
    /// The velocity is replaced by a vector of length `impulse` pointing at the
    /// target. Returns false when already grappling, or when the target sits
    /// on `from` (no direction to pull in).
    pub fn try_grapple(&mut self, from: Vector2, target: Vector2, impulse: f64) -> bool {
        if self.is_grappling() {
            return false;
        }
        let offset = target - from;
        let Some(unit) = offset.checked_norm() else {
            log::warn!("Grapple target on the body at {target:?}, ignoring");
            return false;
        };
        self.grapple = GrapplePhase::Grappling;
        self.direction.x = if offset.x < 0.0 { -1.0 } else { 1.0 };
        let pull = unit * impulse;
        self.velocity = Vector2::new(pull.x.abs(), pull.y);
        true
    }

    /// Integrate gravity into vertical velocity
    #[inline]
    pub fn fall(&mut self, dt: f64, gravity: f64) {
        self.velocity.y += dt * gravity;
    }

    /// Stop vertical motion and release both locks. Returns true if the body
    /// was mid-jump or mid-grapple.
    pub fn land(&mut self) -> bool {
        let was_active = self.is_jumping() || self.is_grappling();
        self.velocity.y = 0.0;
        self.jump = JumpPhase::Ready;
        self.grapple = GrapplePhase::Ready;
        was_active
    }

    /// Accelerate toward the run cap while moving, otherwise decay toward zero.
    /// Speed never reverses sign on its own.
    pub fn run(&mut self, moving: bool, dt: f64, tuning: &PhysicsTuning) {
        if moving {
            self.velocity.x = (self.velocity.x + dt * tuning.ground_accel).min(tuning.max_run_speed);
        } else {
            let friction = tuning.friction.factor();
            self.velocity.x = (self.velocity.x - dt * tuning.ground_accel * friction).max(0.0);
        }
    }
}

/// A static platform and whether the body touched it this frame
#[derive(Debug, Clone)]
pub struct Platform {
    pub rect: OrientedRect,
    /// Derived from the SAT test each frame, display-only
    pub touching: bool,
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct SimState {
    /// Player body (never rotated by the simulation)
    pub body: OrientedRect,
    pub motion: MotionState,
    pub platforms: Vec<Platform>,
    pub tuning: PhysicsTuning,
    /// Surface width and height
    pub surface: Vector2,
    /// Integration steps taken so far
    pub time_steps: u64,
}

impl SimState {
    /// Build the world described by `settings`
    pub fn new(settings: &Settings) -> Result<Self, SandboxError> {
        settings.validate()?;
        let world = &settings.world;

        let body = OrientedRect::new(
            world.spawn.x,
            world.spawn.y,
            world.body_size,
            world.body_size,
        )?;

        let platforms = world
            .platforms
            .iter()
            .map(|spec| {
                let mut rect = OrientedRect::new(spec.x, spec.y, spec.width, spec.height)?;
                rect.rotate(spec.angle_degrees);
                Ok(Platform {
                    rect,
                    touching: false,
                })
            })
            .collect::<Result<Vec<_>, SandboxError>>()?;

        let mut state = Self {
            body,
            motion: MotionState::default(),
            platforms,
            tuning: settings.physics.clone(),
            surface: Vector2::new(world.width, world.height),
            time_steps: 0,
        };

        // Never start below the floor line
        let floor_y = state.floor_y();
        if state.body.position().y > floor_y {
            let position = Vector2::new(state.body.position().x, floor_y);
            state.body.set_position(position);
        }
        state.refresh_contacts();

        log::info!(
            "Simulation world: {}x{} surface, {} platform(s)",
            world.width,
            world.height,
            state.platforms.len()
        );
        Ok(state)
    }

    /// Highest `y` the body's top edge may reach (body resting on the bottom)
    #[inline]
    pub fn floor_y(&self) -> f64 {
        self.surface.y - self.body.height()
    }

    #[inline]
    pub fn contact(&self) -> Contact {
        self.motion.contact(self.body.position().y, self.floor_y())
    }

    /// Re-run the SAT test of the body against every platform. Returns how many
    /// platforms are touched.
    pub fn refresh_contacts(&mut self) -> usize {
        let body = &self.body;
        self.platforms
            .iter_mut()
            .map(|platform| {
                platform.touching = platform.rect.collides_with(body);
                platform.touching
            })
            .filter(|&touching| touching)
            .count()
    }
}
