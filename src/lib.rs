//! Orbit Breaker - a ball bouncing inside concentric rotating arcs
//!
//! Core modules:
//! - `sim`: Simulation (entities, collisions, arc fracture, orchestration)
//! - `renderer`: Render target interface and vertex tessellation
//! - `config`: Data-driven arena setup
//! - `error`: Error types

pub mod config;
pub mod error;
pub mod renderer;
pub mod sim;

pub use config::SimConfig;
pub use error::{ConfigError, SimError};

use glam::Vec2;
use std::f32::consts::TAU;

/// Simulation constants (fixed, not configurable)
pub mod consts {
    use std::f32::consts::PI;

    /// Target tick rate of the frame driver
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.5;
    pub const BALL_COLOR: [u8; 3] = [255, 255, 255];
    /// Downward acceleration added to the ball each tick
    pub const BALL_GRAVITY: f32 = 0.275;
    /// Full width of the reflection jitter, in degrees (±half applied)
    pub const BALL_REFLECT_ANGLE: f32 = 5.0;

    /// Angular length of the cut in every arc
    pub const ARC_DELTA: f32 = PI / 6.0;
    /// Arc speed is π / n for n drawn from this range
    pub const ARC_SPEED_MIN: u32 = 150;
    pub const ARC_SPEED_MAX: u32 = 300;
    /// Radial distance between neighbouring arcs
    pub const ARC_STEP: f32 = 40.0;
    /// Stroke width of the drawn arc
    pub const ARC_WIDTH: f32 = 2.0;
    /// Number of arcs in every layout
    pub const ARC_COUNT: usize = 9;
    /// Gap between the outermost arc and the nearest arena edge
    pub const ARC_MARGIN: f32 = 50.0;

    /// Particle defaults
    pub const PARTICLE_SPEED: f32 = 0.5;
    pub const PARTICLE_GRAVITY: f32 = 0.1;
    pub const PARTICLE_LIFETIME: f32 = 40.0;
    /// Particles spawned when an arc shatters
    pub const PARTICLE_AMOUNT: usize = 200;

    /// Speed multiplier bounds and scroll step
    pub const SPEED_MULT_MIN: f32 = 0.1;
    pub const SPEED_MULT_MAX: f32 = 3.0;
    pub const SPEED_MULT_STEP: f32 = 0.1;
}

/// Wrap an angle to [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Point at angle `theta` on a circle of radius `r`, in screen space (y down).
///
/// Angles increase counter-clockwise as seen on screen, the same direction
/// arcs are drawn in.
#[inline]
pub fn screen_polar(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), -r * theta.sin())
}

/// Inverse of [`screen_polar`]: the angle of a screen-space offset, in [0, 2π)
#[inline]
pub fn screen_angle(offset: Vec2) -> f32 {
    wrap_angle((-offset.y).atan2(offset.x))
}
