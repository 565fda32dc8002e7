//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use super::target::Rgba;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// 8-bit channels to normalized floats
pub fn normalize_color(color: Rgba) -> [f32; 4] {
    color.map(|c| f32::from(c) / 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let v = Vertex::new(1.0, 2.0, [0.0, 0.5, 1.0, 1.0]);
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 24);
    }

    #[test]
    fn test_normalize_color() {
        assert_eq!(normalize_color([255, 0, 51, 255]), [1.0, 0.0, 0.2, 1.0]);
    }
}
