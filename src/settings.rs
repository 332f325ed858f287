//! Sandbox settings: physics tuning, timestep and world layout
//!
//! Loaded from a JSON document. Every field has a default, so a partial
//! document only overrides what it names.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SandboxError;
use crate::sim::Vector2;

/// Named friction tunings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FrictionPreset {
    /// Decelerate five times faster than the run acceleration
    #[default]
    Scaled,
    /// Decelerate at the run acceleration
    Unscaled,
}

impl FrictionPreset {
    /// Multiplier applied to `ground_accel` while decelerating
    pub fn factor(&self) -> f64 {
        match self {
            FrictionPreset::Scaled => GROUND_FRICTION_SCALED,
            FrictionPreset::Unscaled => GROUND_FRICTION_UNSCALED,
        }
    }
}

/// Friction as written in settings: a preset name (`"scaled"`,
/// `"unscaled"`) or a raw multiplier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Friction {
    Preset(FrictionPreset),
    Factor(f64),
}

impl Friction {
    /// Multiplier applied to `ground_accel` while decelerating
    pub fn factor(&self) -> f64 {
        match self {
            Friction::Preset(preset) => preset.factor(),
            Friction::Factor(factor) => *factor,
        }
    }
}

impl Default for Friction {
    fn default() -> Self {
        Friction::Preset(FrictionPreset::default())
    }
}

impl From<FrictionPreset> for Friction {
    fn from(preset: FrictionPreset) -> Self {
        Friction::Preset(preset)
    }
}

/// Acceleration and impulse constants.
///
/// Rates are per second of simulated time; velocities are pixels per step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    pub gravity: f64,
    pub ground_accel: f64,
    /// Deceleration when no movement key is held
    pub friction: Friction,
    pub max_run_speed: f64,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_velocity: f64,
    /// Speed the grapple launches the body at
    pub grapple_impulse: f64,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            ground_accel: GROUND_ACCEL,
            friction: Friction::default(),
            max_run_speed: MAX_RUN_SPEED,
            jump_velocity: JUMP_VELOCITY,
            grapple_impulse: GRAPPLE_IMPULSE,
        }
    }
}

/// Timestep discipline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TimestepMode {
    /// Fixed-size steps drained from an accumulator (deterministic)
    Fixed { hz: f64, max_substeps: u32 },
    /// One step per rendered frame with the measured frame time
    Variable,
}

impl Default for TimestepMode {
    fn default() -> Self {
        TimestepMode::Fixed {
            hz: SIM_HZ,
            max_substeps: MAX_SUBSTEPS,
        }
    }
}

/// A static platform: unrotated top-left, extents and rotation in degrees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub angle_degrees: f64,
}

/// Surface size, player body and static geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub body_size: f64,
    /// Body top-left at startup
    pub spawn: Vector2,
    pub platforms: Vec<PlatformSpec>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
            body_size: BODY_SIZE,
            spawn: Vector2::new(SURFACE_WIDTH * 0.5, SURFACE_HEIGHT * 0.5),
            platforms: vec![
                PlatformSpec {
                    x: 50.0,
                    y: 350.0,
                    width: 100.0,
                    height: 20.0,
                    angle_degrees: 0.0,
                },
                PlatformSpec {
                    x: 250.0,
                    y: 330.0,
                    width: 100.0,
                    height: 20.0,
                    angle_degrees: 15.0,
                },
            ],
        }
    }
}

/// Complete sandbox settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub physics: PhysicsTuning,
    pub timestep: TimestepMode,
    pub world: WorldConfig,
}

impl Settings {
    /// Parse and validate a JSON settings document
    pub fn from_json(json: &str) -> Result<Self, SandboxError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SandboxError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SandboxError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check ranges. Platform and body extents are checked when the geometry
    /// is built.
    pub fn validate(&self) -> Result<(), SandboxError> {
        let p = &self.physics;
        let finite = [
            p.gravity,
            p.ground_accel,
            p.friction.factor(),
            p.max_run_speed,
            p.jump_velocity,
            p.grapple_impulse,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(SandboxError::NonFinite("physics tuning"));
        }
        if p.gravity <= 0.0 {
            return Err(invalid("physics.gravity", "must be positive"));
        }
        if p.ground_accel <= 0.0 {
            return Err(invalid("physics.ground_accel", "must be positive"));
        }
        if p.friction.factor() < 0.0 {
            return Err(invalid("physics.friction", "must not be negative"));
        }
        if p.max_run_speed <= 0.0 {
            return Err(invalid("physics.max_run_speed", "must be positive"));
        }
        if p.jump_velocity >= 0.0 {
            return Err(invalid("physics.jump_velocity", "must be negative (upward)"));
        }
        if p.grapple_impulse <= 0.0 {
            return Err(invalid("physics.grapple_impulse", "must be positive"));
        }

        if let TimestepMode::Fixed { hz, max_substeps } = self.timestep {
            if !hz.is_finite() || hz <= 0.0 {
                return Err(invalid("timestep.hz", "must be positive"));
            }
            if max_substeps == 0 {
                return Err(invalid("timestep.max_substeps", "must be at least 1"));
            }
        }

        let w = &self.world;
        if !(w.width.is_finite() && w.height.is_finite()) {
            return Err(SandboxError::NonFinite("world size"));
        }
        if w.width <= 0.0 || w.height <= 0.0 {
            return Err(invalid("world.width/height", "must be positive"));
        }
        if w.body_size >= w.height {
            return Err(invalid("world.body_size", "must be smaller than the surface"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> SandboxError {
    SandboxError::InvalidSetting { field, reason }
}
