//! Seeded input generator for demo/idle mode
//!
//! Plays the sandbox without a human: holds a movement choice for a random
//! number of frames, hops now and then and fires the grapple at random points
//! on the surface. The same seed always yields the same input sequence.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::tick::InputSnapshot;
use super::vector::Vector2;

/// Chance per frame to press jump
const JUMP_CHANCE: f64 = 1.0 / 45.0;
/// Chance per frame to pull the grapple trigger
const GRAPPLE_CHANCE: f64 = 1.0 / 90.0;
/// Frames a movement choice is held for
const MIN_HOLD_FRAMES: u32 = 15;
const MAX_HOLD_FRAMES: u32 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    Left,
    Right,
    Idle,
}

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    surface: Vector2,
    heading: Heading,
    hold_frames: u32,
    /// Pointer position, wanders between grapple shots
    target: Vector2,
}

impl Autopilot {
    pub fn new(seed: u64, surface: Vector2) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            surface,
            heading: Heading::Idle,
            hold_frames: 0,
            target: surface * 0.5,
        }
    }

    /// Input for the next frame
    pub fn next_input(&mut self) -> InputSnapshot {
        if self.hold_frames == 0 {
            self.heading = match self.rng.random_range(0..3) {
                0 => Heading::Left,
                1 => Heading::Right,
                _ => Heading::Idle,
            };
            self.hold_frames = self.rng.random_range(MIN_HOLD_FRAMES..=MAX_HOLD_FRAMES);
        }
        self.hold_frames -= 1;

        let grapple = self.rng.random_bool(GRAPPLE_CHANCE);
        if grapple {
            self.target = Vector2::new(
                self.rng.random_range(0.0..self.surface.x),
                self.rng.random_range(0.0..self.surface.y),
            );
        }

        InputSnapshot {
            left: self.heading == Heading::Left,
            right: self.heading == Heading::Right,
            jump: self.rng.random_bool(JUMP_CHANCE),
            grapple,
            target: self.target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::Simulation;

    const SURFACE: Vector2 = Vector2::new(400.0, 400.0);

    #[test]
    fn test_same_seed_same_inputs() {
        let mut a = Autopilot::new(42, SURFACE);
        let mut b = Autopilot::new(42, SURFACE);
        for _ in 0..500 {
            assert_eq!(a.next_input(), b.next_input());
        }
    }

    #[test]
    fn test_inputs_stay_on_surface() {
        let mut pilot = Autopilot::new(7, SURFACE);
        let mut grapples = 0;
        for _ in 0..5000 {
            let input = pilot.next_input();
            assert!(!(input.left && input.right));
            assert!(input.target.x >= 0.0 && input.target.x < SURFACE.x);
            assert!(input.target.y >= 0.0 && input.target.y < SURFACE.y);
            grapples += input.grapple as u32;
        }
        assert!(grapples > 0);
    }

    #[test]
    fn test_replay_is_deterministic() {
        let settings = Settings::default();
        let run = |seed: u64| {
            let mut sim = Simulation::new(&settings).unwrap();
            let mut pilot = Autopilot::new(seed, SURFACE);
            let mut snapshot = sim.snapshot();
            for _ in 0..1200 {
                snapshot = sim.frame(1.0 / 60.0, &pilot.next_input());
                assert!(snapshot.body.position.is_finite());
                assert!(snapshot.velocity.is_finite());
            }
            snapshot
        };
        assert_eq!(run(99999), run(99999));
    }
}
