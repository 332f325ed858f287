//! Timestep disciplines and frame-rate telemetry

use crate::settings::TimestepMode;

/// Fixed-timestep accumulator.
///
/// Elapsed frame time is banked in `lag` and drained in whole `interval`
/// steps, so the number and size of integration steps depends only on the
/// total time fed in, not on how it was split across frames.
#[derive(Debug, Clone)]
pub struct FixedStepper {
    interval: f64,
    lag: f64,
    max_substeps: u32,
}

impl FixedStepper {
    pub fn new(hz: f64, max_substeps: u32) -> Self {
        Self {
            interval: 1.0 / hz,
            lag: 0.0,
            max_substeps,
        }
    }

    /// Length of one step in seconds
    #[inline]
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Banked time not yet simulated
    #[inline]
    pub fn lag(&self) -> f64 {
        self.lag
    }

    /// Bank `elapsed` and return how many steps to run now.
    ///
    /// At most `max_substeps` are returned; whole steps beyond the cap are
    /// dropped so a long stall cannot snowball.
    pub fn advance(&mut self, elapsed: f64) -> u32 {
        self.lag += elapsed;

        let mut steps = 0;
        while self.lag >= self.interval && steps < self.max_substeps {
            self.lag -= self.interval;
            steps += 1;
        }

        if self.lag >= self.interval {
            log::debug!(
                "Substep cap hit, dropping {:.4}s of simulation time",
                self.lag - self.lag % self.interval
            );
            self.lag %= self.interval;
        }

        steps
    }
}

/// How frame time is turned into integration steps
#[derive(Debug, Clone)]
pub enum Clock {
    /// Whole steps of a fixed interval.
    ///
    /// Every step integrates with [`FixedStepper::interval`], never with the
    /// frame's wall-clock delta; the delta only decides how many steps run.
    /// A run therefore replays exactly from its input sequence, however the
    /// frames were split.
    Fixed(FixedStepper),
    /// One step per frame with the measured frame time
    Variable,
}

impl Clock {
    pub fn from_mode(mode: &TimestepMode) -> Self {
        match *mode {
            TimestepMode::Fixed { hz, max_substeps } => {
                Clock::Fixed(FixedStepper::new(hz, max_substeps))
            }
            TimestepMode::Variable => Clock::Variable,
        }
    }
}

/// Frames-per-second counter published once per second of elapsed time
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    elapsed: f64,
    frames: u32,
    fps: u32,
}

impl FpsCounter {
    pub fn tick(&mut self, dt: f64) {
        if self.elapsed >= 1.0 {
            self.fps = self.frames;
            self.elapsed = 0.0;
            self.frames = 0;
        } else {
            self.elapsed += dt;
            self.frames += 1;
        }
    }

    /// Last published rate (0 until the first full second)
    #[inline]
    pub fn fps(&self) -> u32 {
        self.fps
    }
}
