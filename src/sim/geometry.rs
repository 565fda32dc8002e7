//! Geometry primitives: circles and the vector operations the engine needs

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// A circle in screen space, mutated in place as its owner moves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    radius: f32,
}

impl Circle {
    /// Negative radii clamp to zero
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn move_by(&mut self, delta: Vec2) {
        self.center += delta;
    }

    /// Whether `other` lies entirely inside this circle
    pub fn contains(&self, other: &Circle) -> bool {
        self.center.distance(other.center) + other.radius <= self.radius
    }
}

/// Rotate counter-clockwise (in math coordinates) by `radians`
#[inline]
pub fn rotate(v: Vec2, radians: f32) -> Vec2 {
    Vec2::from_angle(radians).rotate(v)
}

#[inline]
pub fn rotate_deg(v: Vec2, degrees: f32) -> Vec2 {
    rotate(v, degrees.to_radians())
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect(v: Vec2, normal: Vec2) -> Vec2 {
    v - 2.0 * v.dot(normal) * normal
}

/// Unit vector in the direction of `v`; zero-length input is an error
pub fn try_normalize(v: Vec2, context: &'static str) -> Result<Vec2, SimError> {
    v.try_normalize()
        .ok_or(SimError::DegenerateVector { context })
}
