//! Orbit Breaker headless driver
//!
//! Runs a scripted session at a fixed 60 ticks per simulated second and
//! renders every frame into a vertex batch. Pass a JSON config path as the
//! first argument to override the defaults.

use std::path::PathBuf;

use glam::Vec2;

use orbit_breaker::SimConfig;
use orbit_breaker::consts::TICKS_PER_SECOND;
use orbit_breaker::renderer::VertexBatch;
use orbit_breaker::sim::{Command, Layout, MouseButton, SimEvent, Simulation};

/// Input for a given tick of the scripted session
fn scripted_commands(tick: u32, center: Vec2) -> Vec<Command> {
    let second = TICKS_PER_SECOND;
    let mut commands = Vec::new();

    if tick == 2 * second {
        commands.push(Command::Click {
            pos: center,
            button: MouseButton::Primary,
        });
    }
    if tick == 3 * second {
        commands.push(Command::ToggleParticlesOnCursor);
    }
    if (3 * second..4 * second).contains(&tick) {
        let t = tick as f32 / second as f32;
        commands.push(Command::MouseMove(center + Vec2::new(t.cos(), t.sin()) * 100.0));
    }
    if tick == 4 * second {
        commands.push(Command::SelectLayout(Layout::Synchronized));
        commands.push(Command::Scroll(5.0));
    }
    if tick == 6 * second {
        commands.push(Command::ToggleDestroyOnCollide);
        commands.push(Command::SelectLayout(Layout::Mirrored));
    }
    commands
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Orbit Breaker (headless) starting...");

    let config = SimConfig::load_or_default(std::env::args().nth(1).map(PathBuf::from).as_deref());

    let mut sim = match Simulation::new(&config) {
        Ok(sim) => sim,
        Err(e) => {
            log::error!("Failed to build simulation: {e}");
            std::process::exit(1);
        }
    };

    let mut batch = VertexBatch::new();
    let (mut bounces, mut shatters) = (0u32, 0u32);

    for tick in 0..config.ticks {
        let commands = scripted_commands(tick, sim.center());
        let report = match sim.frame(&commands, &mut batch) {
            Ok(report) => report,
            Err(e) => {
                log::error!("Simulation halted at tick {tick}: {e}");
                std::process::exit(1);
            }
        };

        for event in &report.events {
            match event {
                SimEvent::Bounced { .. } => bounces += 1,
                SimEvent::Shattered { .. } => shatters += 1,
                SimEvent::LayoutChanged(_) => {}
            }
        }

        if tick % TICKS_PER_SECOND == 0 {
            log::info!(
                "t={}s arcs={} particles={} vertices={} speed={:.1}",
                tick / TICKS_PER_SECOND,
                sim.arcs().len(),
                sim.particles().len(),
                batch.vertex_count(),
                sim.speed_mult()
            );
        }
    }

    println!(
        "Ran {} ticks: {} bounces, {} arcs shattered, {} arcs left",
        config.ticks,
        bounces,
        shatters,
        sim.arcs().len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser driver; the library is used directly from a host page
}
