//! Shape tessellation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::screen_polar;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let p1 = center + screen_polar(radius, (i as f32 / segments as f32) * TAU);
        let p2 = center + screen_polar(radius, ((i + 1) as f32 / segments as f32) * TAU);

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Angular length drawn from `start` to `stop`, adding a turn when
/// `stop < start`
pub fn sweep(start: f32, stop: f32) -> f32 {
    if stop < start { stop + TAU - start } else { stop - start }
}

/// Generate vertices for a stroked arc whose outer edge lies on `radius`
pub fn arc_stroke(
    center: Vec2,
    radius: f32,
    start: f32,
    stop: f32,
    width: f32,
    color: [f32; 4],
    segments_per_radian: f32,
) -> Vec<Vertex> {
    let span = sweep(start, stop);
    let num_segments = ((span * segments_per_radian) as u32).max(4);
    let outer_r = radius;
    let inner_r = (radius - width).max(0.0);

    let mut vertices = Vec::with_capacity((num_segments * 6) as usize);

    for i in 0..num_segments {
        let theta1 = start + (i as f32 / num_segments as f32) * span;
        let theta2 = start + ((i + 1) as f32 / num_segments as f32) * span;

        let inner1 = center + screen_polar(inner_r, theta1);
        let outer1 = center + screen_polar(outer_r, theta1);
        let inner2 = center + screen_polar(inner_r, theta2);
        let outer2 = center + screen_polar(outer_r, theta2);

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}
