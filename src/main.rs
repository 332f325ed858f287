//! Grapple Sandbox headless runner
//!
//! Runs the simulation without a display, driven by the autopilot at a
//! simulated 60 Hz refresh, and prints the final frame as JSON.
//!
//! Usage: `grapple-sandbox [settings.json] [frames]`

#[cfg(not(target_arch = "wasm32"))]
use grapple_sandbox::{
    Settings,
    sim::{Autopilot, Simulation},
};

/// Simulated display refresh rate
#[cfg(not(target_arch = "wasm32"))]
const DISPLAY_HZ: f64 = 60.0;
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_FRAMES: u64 = 600;
#[cfg(not(target_arch = "wasm32"))]
const AUTOPILOT_SEED: u64 = 0x5eed;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    log::info!("Grapple Sandbox (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(&path)?,
        None => {
            log::info!("Using default settings");
            Settings::default()
        }
    };
    let frames = match args.next() {
        Some(n) => n.parse::<u64>()?,
        None => DEFAULT_FRAMES,
    };

    let mut sim = Simulation::new(&settings)?;
    let mut pilot = Autopilot::new(AUTOPILOT_SEED, sim.state().surface);
    let elapsed = 1.0 / DISPLAY_HZ;

    let mut snapshot = sim.snapshot();
    for frame in 1..=frames {
        let input = pilot.next_input();
        snapshot = sim.frame(elapsed, &input);

        if frame % DISPLAY_HZ as u64 == 0 {
            let touching = snapshot.platforms.iter().filter(|p| p.touching).count();
            log::info!(
                "t={:>3}s pos=({:.1}, {:.1}) vel=({:.3}, {:.3}) grounded={} touching={} fps={}",
                frame / DISPLAY_HZ as u64,
                snapshot.body.position.x,
                snapshot.body.position.y,
                snapshot.velocity.x,
                snapshot.velocity.y,
                snapshot.grounded,
                touching,
                snapshot.fps,
            );
        }
    }

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser host drives `Simulation::frame` from its own refresh callback
}
