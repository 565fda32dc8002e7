//! Draw call interface consumed by the simulation

use glam::Vec2;

/// 8-bit RGBA color
pub type Rgba = [u8; 4];

/// Something the simulation can draw on. Coordinates are screen pixels, y down.
pub trait RenderTarget {
    /// Fill the whole surface
    fn clear(&mut self, color: Rgba);

    /// Anti-aliased filled circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Stroke along the circle of `radius` around `center`, `width` pixels
    /// thick and inset from the circle's edge.
    ///
    /// Runs counter-clockwise on screen from `start` to `stop`; when
    /// `stop < start`, a full turn is added to `stop`.
    fn arc(&mut self, center: Vec2, radius: f32, start: f32, stop: f32, width: f32, color: Rgba);
}

/// A recorded draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCall {
    Clear {
        color: Rgba,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Arc {
        center: Vec2,
        radius: f32,
        start: f32,
        stop: f32,
        width: f32,
        color: Rgba,
    },
}

/// Target that stores every call, for headless runs and inspection
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    pub calls: Vec<DrawCall>,
}

impl RenderTarget for RecordingTarget {
    fn clear(&mut self, color: Rgba) {
        self.calls.push(DrawCall::Clear { color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }

    fn arc(&mut self, center: Vec2, radius: f32, start: f32, stop: f32, width: f32, color: Rgba) {
        self.calls.push(DrawCall::Arc {
            center,
            radius,
            start,
            stop,
            width,
            color,
        });
    }
}
