//! Grapple Sandbox - a 2D side-view movement sandbox
//!
//! Core modules:
//! - `sim`: Simulation core (vector math, oriented rectangles, SAT, integration)
//! - `settings`: Data-driven physics tuning, timestep and world layout
//! - `error`: Crate error type
//!
//! Rendering and input wiring are left to the host; it feeds [`sim::Simulation`]
//! an elapsed time plus an [`sim::InputSnapshot`] each display refresh and draws
//! the returned [`sim::FrameSnapshot`].

pub mod error;
pub mod settings;
pub mod sim;

pub use error::SandboxError;
pub use settings::{
    Friction, FrictionPreset, PhysicsTuning, PlatformSpec, Settings, TimestepMode, WorldConfig,
};

/// Default tuning constants
pub mod consts {
    /// Downward acceleration added to vertical velocity (per second)
    pub const GRAVITY: f64 = 20.0;
    /// Horizontal acceleration while a movement key is held (per second)
    pub const GROUND_ACCEL: f64 = 10.0;
    /// Friction multiplier on `GROUND_ACCEL` when decelerating (tuned feel)
    pub const GROUND_FRICTION_SCALED: f64 = 5.0;
    /// Friction equal to acceleration (decelerates as fast as it speeds up)
    pub const GROUND_FRICTION_UNSCALED: f64 = 1.0;
    /// Horizontal speed cap while running (pixels per step)
    pub const MAX_RUN_SPEED: f64 = 4.0;
    /// Vertical velocity applied on jump (negative is up)
    pub const JUMP_VELOCITY: f64 = -8.0;
    /// Length of the velocity vector set by the grapple
    pub const GRAPPLE_IMPULSE: f64 = 12.0;

    /// Fixed simulation rate
    pub const SIM_HZ: f64 = 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame time fed to the integrator (seconds)
    pub const MAX_FRAME_TIME: f64 = 0.25;

    /// Surface dimensions
    pub const SURFACE_WIDTH: f64 = 400.0;
    pub const SURFACE_HEIGHT: f64 = 400.0;
    /// Player body edge length
    pub const BODY_SIZE: f64 = 20.0;
}
