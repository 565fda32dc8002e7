//! Angular geometry of a drawn arc stroke
//!
//! An arc is a ring with one Δ-radian cut. The stroke is a thin band that
//! starts at `theta_start` and runs counter-clockwise (on screen) for `span`
//! radians; the cut fills the rest of the turn.
//!
//! All positions here are offsets from the arc's center, in screen space.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::{screen_polar, wrap_angle};

/// A thickened arc band in polar space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcBand {
    /// Centerline radius from the arc's center
    pub radius: f32,
    /// Radial thickness (extends radius ± thickness/2)
    pub thickness: f32,
    /// Start angle (radians, wrapped to [0, 2π))
    pub theta_start: f32,
    /// Angular length, counter-clockwise from `theta_start`
    pub span: f32,
}

impl ArcBand {
    pub fn new(radius: f32, thickness: f32, theta_start: f32, span: f32) -> Self {
        Self {
            radius,
            thickness,
            theta_start: wrap_angle(theta_start),
            span: span.clamp(0.0, TAU),
        }
    }

    /// The band left over when `[cut_start, cut_start + cut_len]` is removed
    /// from a stroke whose outer edge lies on `outer_radius`
    pub fn around_cut(outer_radius: f32, thickness: f32, cut_start: f32, cut_len: f32) -> Self {
        Self::new(
            outer_radius - thickness / 2.0,
            thickness,
            cut_start + cut_len,
            TAU - cut_len,
        )
    }

    /// Check if an angle is within the band's angular extent
    pub fn contains_angle(&self, theta: f32) -> bool {
        wrap_angle(theta - self.theta_start) <= self.span
    }

    /// Centerline point at each end of the band (start, end)
    pub fn endpoints(&self) -> (Vec2, Vec2) {
        (
            screen_polar(self.radius, self.theta_start),
            screen_polar(self.radius, self.theta_start + self.span),
        )
    }
}
