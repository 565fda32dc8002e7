//! Simulation state
//!
//! Everything one run owns: the ball, the arcs (outer to inner, so the last
//! one is the innermost), the particles, the user-adjustable knobs and the
//! seeded RNG every random draw goes through.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{OverlapTest, SdfOverlap};
use super::entity::{Arc, Ball, Entity, Particle, ParticleParams, TickContext, random_color};
use super::geometry::rotate_deg;
use super::group::Group;
use super::tick::{Command, TickInput, TickReport, generate_layout, tick};
use crate::config::SimConfig;
use crate::consts::*;
use crate::error::SimError;
use crate::renderer::RenderTarget;

/// Arc arrangement strategies, selected by keys 1, 2 and 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Layout {
    /// Every arc gets its own color, angle and speed
    #[default]
    Scattered,
    /// Shared color and angle, speed creeping up per arc
    Synchronized,
    /// Shared color, neighbours turned half a turn and spinning the other way
    Mirrored,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Scattered => "Scattered",
            Layout::Synchronized => "Synchronized",
            Layout::Mirrored => "Mirrored",
        }
    }
}

/// Something observable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    /// Ball bounced off the innermost arc
    Bounced { arc_radius: f32 },
    /// An arc shattered into particles
    Shattered { arc_radius: f32, particles: usize },
    LayoutChanged(Layout),
}

/// Complete simulation state
pub struct Simulation {
    pub(crate) center: Vec2,
    pub(crate) seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) ball: Ball,
    pub(crate) arcs: Group<Arc>,
    pub(crate) particles: Group<Particle>,
    pub(crate) speed_mult: f32,
    pub(crate) destroy_on_collide: bool,
    pub(crate) particles_on_cursor: bool,
    pub(crate) layout: Layout,
    pub(crate) time_ticks: u64,
    pub(crate) overlap: Box<dyn OverlapTest>,
}

impl Simulation {
    /// Ball at rest in the middle of the arena, arcs in the default layout
    pub fn new(config: &SimConfig) -> Result<Self, SimError> {
        let center = config.center();
        let mut sim = Self {
            center,
            seed: config.seed,
            rng: Pcg32::seed_from_u64(config.seed),
            ball: Ball::new(center, BALL_RADIUS)?,
            arcs: Group::new(),
            particles: Group::new(),
            speed_mult: 1.0,
            destroy_on_collide: false,
            particles_on_cursor: false,
            layout: Layout::default(),
            time_ticks: 0,
            overlap: Box::new(SdfOverlap),
        };
        sim.arcs
            .extend(generate_layout(Layout::default(), center, &mut sim.rng)?);

        log::info!(
            "Simulation ready: center=({}, {}), seed={}, {} arcs",
            center.x,
            center.y,
            sim.seed,
            sim.arcs.len()
        );
        Ok(sim)
    }

    /// Replace the ball/stroke overlap test
    pub fn with_overlap(mut self, overlap: impl OverlapTest + 'static) -> Self {
        self.overlap = Box::new(overlap);
        self
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    /// Arcs from outermost to innermost
    pub fn arcs(&self) -> &Group<Arc> {
        &self.arcs
    }

    pub fn arcs_mut(&mut self) -> &mut Group<Arc> {
        &mut self.arcs
    }

    /// The only arc the ball can collide with
    pub fn innermost_arc(&self) -> Option<&Arc> {
        self.arcs.last()
    }

    pub fn particles(&self) -> &Group<Particle> {
        &self.particles
    }

    /// Ball plus arcs: everything that is drawn before the particles
    pub fn sprite_count(&self) -> usize {
        1 + self.arcs.len()
    }

    pub fn speed_mult(&self) -> f32 {
        self.speed_mult
    }

    pub fn destroy_on_collide(&self) -> bool {
        self.destroy_on_collide
    }

    pub fn particles_on_cursor(&self) -> bool {
        self.particles_on_cursor
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub(crate) fn tick_context(&self) -> TickContext {
        TickContext {
            speed_mult: self.speed_mult,
        }
    }

    /// Rebuild the arcs with `layout`, clear particles, recenter the ball
    /// and reset the speed multiplier
    pub fn set_layout(&mut self, layout: Layout) -> Result<(), SimError> {
        self.speed_mult = 1.0;
        self.arcs.clear();
        self.particles.clear();
        self.ball.reset(self.center);
        self.arcs
            .extend(generate_layout(layout, self.center, &mut self.rng)?);
        self.layout = layout;

        log::info!("Layout switched to {}", layout.as_str());
        Ok(())
    }

    pub fn toggle_destroy_on_collide(&mut self) {
        self.destroy_on_collide = !self.destroy_on_collide;
        log::info!("Destroy on collide: {}", self.destroy_on_collide);
    }

    pub fn toggle_particles_on_cursor(&mut self) {
        self.particles_on_cursor = !self.particles_on_cursor;
        log::info!("Particles on cursor: {}", self.particles_on_cursor);
    }

    /// Mouse wheel: each notch changes the multiplier by 0.1
    pub fn scroll(&mut self, delta: f32) {
        self.speed_mult =
            (self.speed_mult + SPEED_MULT_STEP * delta).clamp(SPEED_MULT_MIN, SPEED_MULT_MAX);
    }

    pub fn reset_speed(&mut self) {
        self.speed_mult = 1.0;
    }

    /// Burst of 40 orange sparks shooting up from `pos`
    pub fn spawn_sparks(&mut self, pos: Vec2) -> Result<usize, SimError> {
        const SPARK_COLOR: [i16; 3] = [235, 113, 20];
        const SPARK_COUNT: usize = 40;

        for _ in 0..SPARK_COUNT {
            let rng = &mut self.rng;
            let color = SPARK_COLOR.map(|c| (c + rng.random_range(-20..=20)).clamp(0, 255) as u8);
            let radius = f32::from(rng.random_range(2u8..=5));
            let params = ParticleParams {
                velocity: Some(Vec2::new((rng.random::<f32>() - 0.5) * 2.0, -1.0)),
                gravity: Some(Vec2::new(0.0, rng.random::<f32>() / 40.0)),
                lifetime: Some(f32::from(rng.random_range(30u8..=60))),
            };
            let particle = Particle::new(pos, color, radius, params, rng)?;
            self.particles.add(particle);
        }
        Ok(SPARK_COUNT)
    }

    /// Five particles scattering from the cursor, when enabled
    pub fn spawn_cursor_trail(&mut self, pos: Vec2) -> Result<usize, SimError> {
        const TRAIL_COUNT: usize = 5;

        if !self.particles_on_cursor {
            return Ok(0);
        }

        let rng = &mut self.rng;
        let color = random_color(rng);
        for _ in 0..TRAIL_COUNT {
            let radius = f32::from(rng.random_range(2u8..=5));
            let velocity = Vec2::new(0.0, rng.random::<f32>() * 2.0);
            let params = ParticleParams {
                velocity: Some(rotate_deg(velocity, f32::from(rng.random_range(0u16..=360)))),
                gravity: None,
                lifetime: Some(f32::from(rng.random_range(30u8..=60))),
            };
            let particle = Particle::new(pos, color, radius, params, rng)?;
            self.particles.add(particle);
        }
        Ok(TRAIL_COUNT)
    }

    /// Apply `commands`, then advance every entity and resolve collisions
    pub fn advance_one_tick(&mut self, commands: &[Command]) -> Result<TickReport, SimError> {
        let input = TickInput {
            commands: commands.to_vec(),
        };
        tick(self, &input)
    }

    /// Draw the frame: background, ball, arcs, then particles
    pub fn render(&self, target: &mut dyn RenderTarget) {
        target.clear([0, 0, 0, 255]);
        self.ball.render(target);
        self.arcs.render(target);
        self.particles.render(target);
    }

    /// One full frame: tick, then render
    pub fn frame(&mut self, commands: &[Command], target: &mut dyn RenderTarget) -> Result<TickReport, SimError> {
        let report = self.advance_one_tick(commands)?;
        self.render(target);
        Ok(report)
    }
}
