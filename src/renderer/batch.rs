//! Render target that tessellates into a vertex list

use glam::Vec2;

use super::shapes;
use super::target::{RenderTarget, Rgba};
use super::vertex::{Vertex, normalize_color};

/// Segments used for every filled circle
const CIRCLE_SEGMENTS: u32 = 24;
/// Arc tessellation density
const ARC_SEGMENTS_PER_RADIAN: f32 = 12.0;

/// Triangle list for one frame, ready for a vertex buffer
#[derive(Debug, Clone, Default)]
pub struct VertexBatch {
    pub clear_color: [f32; 4],
    pub vertices: Vec<Vertex>,
}

impl VertexBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Raw bytes for a GPU upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl RenderTarget for VertexBatch {
    fn clear(&mut self, color: Rgba) {
        self.clear_color = normalize_color(color);
        self.vertices.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.vertices.extend(shapes::circle(
            center,
            radius,
            normalize_color(color),
            CIRCLE_SEGMENTS,
        ));
    }

    fn arc(&mut self, center: Vec2, radius: f32, start: f32, stop: f32, width: f32, color: Rgba) {
        self.vertices.extend(shapes::arc_stroke(
            center,
            radius,
            start,
            stop,
            width,
            normalize_color(color),
            ARC_SEGMENTS_PER_RADIAN,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim::Simulation;

    #[test]
    fn test_clear_resets_frame() {
        let mut batch = VertexBatch::new();
        batch.fill_circle(Vec2::ZERO, 5.0, [255; 4]);
        assert_eq!(batch.vertex_count(), CIRCLE_SEGMENTS * 3);
        batch.clear([0, 0, 0, 255]);
        assert_eq!(batch.vertex_count(), 0);
        assert_eq!(batch.clear_color, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_simulation_frame_tessellates() {
        let mut sim = Simulation::new(&SimConfig::default()).unwrap();
        let mut batch = VertexBatch::new();
        sim.frame(&[], &mut batch).unwrap();
        assert!(batch.vertex_count() > CIRCLE_SEGMENTS * 3);
        assert_eq!(batch.as_bytes().len(), batch.vertices.len() * 24);
    }
}
