//! Shattering an arc into a burst of particles
//!
//! Particles are placed on the arc's circle, uniformly over the part that was
//! actually drawn. The cut interval stays empty.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use super::entity::{Arc, Entity, Particle, ParticleParams};
use super::group::Group;
use crate::consts::{ARC_DELTA, PARTICLE_AMOUNT};
use crate::error::SimError;
use crate::{screen_polar, wrap_angle};

/// Uniform random angle in [0, 2π) outside `[start, start + length)`.
///
/// `length` must lie strictly between 0 and 2π.
pub fn random_angle_with_cut<R: Rng + ?Sized>(start: f32, length: f32, rng: &mut R) -> Result<f32, SimError> {
    if !(length > 0.0 && length < TAU) {
        return Err(SimError::InvalidArcLength { length });
    }

    // The allowed region is the single interval [start + length, start + 2π)
    let offset = rng.random::<f32>() * (TAU - length);
    let angle = wrap_angle(start) + length + offset;

    Ok(wrap_angle(angle))
}

/// Kill `arc` and add its particle burst to `particles`.
///
/// `center` is the point the burst is laid out around (the arc center).
/// Returns the number of particles spawned.
pub fn break_arc<R: Rng + ?Sized>(
    arc: &mut Arc,
    particles: &mut Group<Particle>,
    center: Vec2,
    rng: &mut R,
) -> Result<usize, SimError> {
    arc.kill();

    let radius = arc.circle().radius();
    for _ in 0..PARTICLE_AMOUNT {
        let theta = random_angle_with_cut(arc.cut_start(), ARC_DELTA, rng)?;
        let size = f32::from(rng.random_range(1u8..=3));
        particles.add(Particle::new(
            center + screen_polar(radius, theta),
            arc.color(),
            size,
            ParticleParams::default(),
            rng,
        )?);
    }

    log::debug!("Arc r={radius} shattered into {PARTICLE_AMOUNT} particles");
    Ok(PARTICLE_AMOUNT)
}
