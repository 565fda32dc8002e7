//! Per-tick simulation step
//!
//! Order within a tick: input commands, ball and arc updates, particle
//! updates, then the collision rule against the innermost arc.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::{PI, TAU};

use super::collision::{collide_ball, needs_check, reflect_ball};
use super::entity::{Arc, ArcParams, Entity, random_arc_speed, random_color};
use super::fracture::break_arc;
use super::state::{Layout, SimEvent, Simulation};
use crate::consts::*;
use crate::error::SimError;

/// Mouse buttons the simulation reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Middle,
}

/// Discrete input produced by the event source
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    SelectLayout(Layout),
    ToggleDestroyOnCollide,
    ToggleParticlesOnCursor,
    Click { pos: Vec2, button: MouseButton },
    MouseMove(Vec2),
    /// Wheel notches, positive is up
    Scroll(f32),
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub commands: Vec<Command>,
}

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Tick counter after this tick
    pub tick: u64,
    pub events: Vec<SimEvent>,
}

impl TickReport {
    pub fn bounced(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, SimEvent::Bounced { .. }))
    }

    pub fn shattered(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, SimEvent::Shattered { .. }))
    }
}

/// Advance the simulation by one tick
pub fn tick(sim: &mut Simulation, input: &TickInput) -> Result<TickReport, SimError> {
    let mut events = Vec::new();
    for command in &input.commands {
        events.extend(apply_command(sim, command)?);
    }

    sim.time_ticks += 1;

    let ctx = sim.tick_context();
    sim.ball.update(&ctx);
    sim.arcs.update(&ctx);
    sim.particles.update(&ctx);

    events.extend(resolve_innermost(sim)?);

    Ok(TickReport {
        tick: sim.time_ticks,
        events,
    })
}

/// Apply one command to the simulation state
pub fn apply_command(sim: &mut Simulation, command: &Command) -> Result<Option<SimEvent>, SimError> {
    match *command {
        Command::SelectLayout(layout) => {
            sim.set_layout(layout)?;
            return Ok(Some(SimEvent::LayoutChanged(layout)));
        }
        Command::ToggleDestroyOnCollide => sim.toggle_destroy_on_collide(),
        Command::ToggleParticlesOnCursor => sim.toggle_particles_on_cursor(),
        Command::Click {
            pos,
            button: MouseButton::Primary,
        } => {
            sim.spawn_sparks(pos)?;
        }
        Command::Click {
            button: MouseButton::Middle,
            ..
        } => sim.reset_speed(),
        Command::MouseMove(pos) => {
            sim.spawn_cursor_trail(pos)?;
        }
        Command::Scroll(delta) => sim.scroll(delta),
    }
    Ok(None)
}

/// Check the ball against the innermost arc once it is no longer fully
/// enclosed: bounce off the stroke, or shatter the arc when the ball slips
/// through the cut. A bounce with destroy-on-collide set reports both.
fn resolve_innermost(sim: &mut Simulation) -> Result<Vec<SimEvent>, SimError> {
    let mut events = Vec::new();
    let Some(arc) = sim.arcs.last_mut() else {
        return Ok(events);
    };
    if !arc.is_alive() || !needs_check(arc, &sim.ball) {
        return Ok(events);
    }

    let arc_radius = arc.circle().radius();
    if collide_ball(arc, &mut sim.ball, sim.overlap.as_ref())? {
        events.push(SimEvent::Bounced { arc_radius });
        if sim.destroy_on_collide {
            let particles = break_arc(arc, &mut sim.particles, sim.center, &mut sim.rng)?;
            events.push(SimEvent::Shattered {
                arc_radius,
                particles,
            });
        }
        reflect_ball(&mut sim.ball, arc.circle(), &mut sim.rng)?;
        log::debug!("Ball bounced off arc r={arc_radius} at tick {}", sim.time_ticks);
    } else {
        let particles = break_arc(arc, &mut sim.particles, sim.center, &mut sim.rng)?;
        log::debug!("Ball escaped arc r={arc_radius} at tick {}", sim.time_ticks);
        events.push(SimEvent::Shattered {
            arc_radius,
            particles,
        });
    }
    Ok(events)
}

/// Build the concentric arcs for `layout`, outermost first
pub fn generate_layout<R: Rng + ?Sized>(layout: Layout, center: Vec2, rng: &mut R) -> Result<Vec<Arc>, SimError> {
    let max_radius = center.x.min(center.y) - ARC_MARGIN;
    let color = random_color(rng);
    let angle = rng.random::<f32>() * TAU;
    let speed = random_arc_speed(rng);

    (0..ARC_COUNT)
        .map(|i| {
            let radius = max_radius - i as f32 * ARC_STEP;
            let params = match layout {
                Layout::Scattered => ArcParams::default(),
                Layout::Synchronized => ArcParams {
                    color: Some(color),
                    angle: Some(angle),
                    speed: Some(speed + i as f32 / 2000.0),
                },
                Layout::Mirrored => {
                    let odd = i % 2 == 1;
                    ArcParams {
                        color: Some(color),
                        angle: Some(if odd { angle + PI } else { angle }),
                        speed: Some(if odd { speed } else { -speed }),
                    }
                }
            };
            Arc::new(center, radius, params, rng)
        })
        .collect()
}
