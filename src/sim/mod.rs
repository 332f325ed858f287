//! Simulation core
//!
//! All movement and collision logic lives here. This module must stay free of
//! rendering and platform dependencies:
//! - State is owned by an explicit context (`Simulation` / `SimState`)
//! - Fixed timestep by default, deterministic for a given input sequence
//! - Seeded RNG only (autopilot)

pub mod autopilot;
pub mod collision;
pub mod frame;
pub mod rect;
pub mod state;
pub mod tick;
pub mod timestep;
pub mod vector;

pub use autopilot::Autopilot;
pub use collision::{Projection, rects_collide, separating_axis};
pub use frame::{BodySnapshot, FrameSnapshot, PlatformSnapshot, Simulation};
pub use rect::OrientedRect;
pub use state::{Contact, GrapplePhase, JumpPhase, MotionState, Platform, SimState};
pub use tick::{InputSnapshot, tick};
pub use timestep::{Clock, FixedStepper, FpsCounter};
pub use vector::{Vector2, VectorExt};
