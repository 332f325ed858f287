//! Per-frame driver and render-facing output
//!
//! The host calls [`Simulation::frame`] once per display refresh with the
//! elapsed time and the current input, and draws the returned snapshot.

use serde::Serialize;

use super::state::{Contact, SimState};
use super::tick::{InputSnapshot, tick};
use super::timestep::{Clock, FpsCounter};
use super::vector::Vector2;
use crate::consts::MAX_FRAME_TIME;
use crate::error::SandboxError;
use crate::settings::Settings;

/// Body placement for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodySnapshot {
    pub position: Vector2,
    pub center: Vector2,
    pub angle: f64,
    pub width: f64,
    pub height: f64,
}

/// Platform outline and contact flag (used to pick a display color)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformSnapshot {
    pub corners: [Vector2; 4],
    pub touching: bool,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub body: BodySnapshot,
    pub velocity: Vector2,
    pub direction: Vector2,
    pub grounded: bool,
    pub jumping: bool,
    pub grappling: bool,
    pub platforms: Vec<PlatformSnapshot>,
    pub fps: u32,
    /// Integration steps taken since startup
    pub steps: u64,
}

/// Simulation context owned by the host loop
#[derive(Debug, Clone)]
pub struct Simulation {
    state: SimState,
    clock: Clock,
    fps: FpsCounter,
}

impl Simulation {
    pub fn new(settings: &Settings) -> Result<Self, SandboxError> {
        let state = SimState::new(settings)?;
        let clock = Clock::from_mode(&settings.timestep);
        log::info!("Simulation ready ({:?})", settings.timestep);
        Ok(Self {
            state,
            clock,
            fps: FpsCounter::default(),
        })
    }

    #[inline]
    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// Advance by `elapsed` seconds of wall-clock time and report the result
    pub fn frame(&mut self, elapsed: f64, input: &InputSnapshot) -> FrameSnapshot {
        let elapsed = sanitize_elapsed(elapsed);

        match &mut self.clock {
            Clock::Fixed(stepper) => {
                // Integrate with the interval; `elapsed` only feeds the lag
                let dt = stepper.interval();
                for _ in 0..stepper.advance(elapsed) {
                    tick(&mut self.state, input, dt);
                }
            }
            Clock::Variable => {
                if elapsed > 0.0 {
                    tick(&mut self.state, input, elapsed);
                }
            }
        }

        self.state.refresh_contacts();
        self.fps.tick(elapsed);
        self.snapshot()
    }

    /// Current state without advancing time
    pub fn snapshot(&self) -> FrameSnapshot {
        let body = &self.state.body;
        let motion = &self.state.motion;
        FrameSnapshot {
            body: BodySnapshot {
                position: body.position(),
                center: body.center(),
                angle: body.angle(),
                width: body.width(),
                height: body.height(),
            },
            velocity: motion.velocity,
            direction: motion.direction,
            grounded: self.state.contact() == Contact::Grounded,
            jumping: motion.is_jumping(),
            grappling: motion.is_grappling(),
            platforms: self
                .state
                .platforms
                .iter()
                .map(|p| PlatformSnapshot {
                    corners: p.rect.corners(),
                    touching: p.touching,
                })
                .collect(),
            fps: self.fps.fps(),
            steps: self.state.time_steps,
        }
    }
}

/// Negative or non-finite frame times become zero; long stalls are clamped
fn sanitize_elapsed(elapsed: f64) -> f64 {
    if !elapsed.is_finite() || elapsed < 0.0 {
        log::warn!("Ignoring invalid frame time {elapsed}");
        return 0.0;
    }
    if elapsed > MAX_FRAME_TIME {
        log::warn!("Frame time {elapsed:.3}s clamped to {MAX_FRAME_TIME}s");
        return MAX_FRAME_TIME;
    }
    elapsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::GROUND_ACCEL;
    use crate::settings::TimestepMode;

    fn fixed(hz: f64) -> Settings {
        Settings {
            timestep: TimestepMode::Fixed {
                hz,
                max_substeps: 64,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_fixed_mode_step_count() {
        let mut sim = Simulation::new(&fixed(4.0)).unwrap();
        let idle = InputSnapshot::default();
        assert_eq!(sim.frame(0.125, &idle).steps, 0);
        assert_eq!(sim.frame(0.125, &idle).steps, 1);
        assert_eq!(sim.frame(0.25, &idle).steps, 2);
    }

    #[test]
    fn test_fixed_step_integrates_with_interval() {
        let mut sim = Simulation::new(&fixed(64.0)).unwrap();
        let right = InputSnapshot {
            right: true,
            ..Default::default()
        };
        // One 1/32 s frame runs two 1/64 s steps, not two steps of the frame time
        let snapshot = sim.frame(1.0 / 32.0, &right);
        assert_eq!(snapshot.steps, 2);
        assert_eq!(snapshot.velocity.x, 2.0 * GROUND_ACCEL / 64.0);
    }

    #[test]
    fn test_fixed_mode_ignores_frame_split() {
        let settings = fixed(64.0);
        let mut coarse = Simulation::new(&settings).unwrap();
        let mut fine = Simulation::new(&settings).unwrap();
        let right = InputSnapshot {
            right: true,
            ..Default::default()
        };

        let mut a = coarse.snapshot();
        for _ in 0..30 {
            a = coarse.frame(0.125, &right);
        }
        let mut b = fine.snapshot();
        for _ in 0..120 {
            b = fine.frame(0.03125, &right);
        }
        assert_eq!(a.steps, b.steps);
        assert_eq!(a.body, b.body);
        assert_eq!(a.velocity, b.velocity);
    }

    #[test]
    fn test_variable_mode_steps_every_frame() {
        let settings = Settings {
            timestep: TimestepMode::Variable,
            ..Default::default()
        };
        let mut sim = Simulation::new(&settings).unwrap();
        let idle = InputSnapshot::default();
        assert_eq!(sim.frame(0.016, &idle).steps, 1);
        assert_eq!(sim.frame(0.033, &idle).steps, 2);
        // Zero-length frame does not integrate
        assert_eq!(sim.frame(0.0, &idle).steps, 2);
    }

    #[test]
    fn test_invalid_elapsed_is_ignored() {
        let mut sim = Simulation::new(&Settings::default()).unwrap();
        let idle = InputSnapshot::default();
        let before = sim.snapshot();
        let after = sim.frame(f64::NAN, &idle);
        assert_eq!(after.steps, before.steps);
        let after = sim.frame(-1.0, &idle);
        assert_eq!(after.steps, before.steps);
    }

    #[test]
    fn test_long_stall_is_clamped() {
        let mut sim = Simulation::new(&fixed(60.0)).unwrap();
        let snapshot = sim.frame(30.0, &InputSnapshot::default());
        // 0.25s at 60 Hz is 15 steps (up to float rounding of the interval)
        assert!(snapshot.steps >= 14 && snapshot.steps <= 15);
    }

    #[test]
    fn test_platform_contact_reported() {
        let mut sim = Simulation::new(&fixed(60.0)).unwrap();
        let idle = InputSnapshot::default();
        let snapshot = sim.frame(1.0 / 60.0, &idle);
        assert_eq!(snapshot.platforms.len(), 2);
        assert!(snapshot.platforms.iter().all(|p| !p.touching));

        // The default spawn falls clear of both platforms; drop the body
        // through the flat one instead.
        let mut settings = fixed(60.0);
        settings.world.spawn = Vector2::new(80.0, 300.0);
        let mut sim = Simulation::new(&settings).unwrap();
        let mut touched = false;
        for _ in 0..120 {
            touched |= sim.frame(1.0 / 60.0, &idle).platforms[0].touching;
        }
        assert!(touched);
    }

    #[test]
    fn test_snapshot_serializes() {
        let sim = Simulation::new(&Settings::default()).unwrap();
        let json = serde_json::to_value(sim.snapshot()).unwrap();
        assert_eq!(json["body"]["width"], 20.0);
        assert_eq!(json["platforms"].as_array().unwrap().len(), 2);
        assert_eq!(json["fps"], 0);
    }
}
