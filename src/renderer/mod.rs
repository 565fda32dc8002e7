//! Rendering interface
//!
//! The simulation draws through [`RenderTarget`]; a window backend implements
//! it. [`VertexBatch`] tessellates draw calls into triangles for a GPU upload
//! and [`RecordingTarget`] keeps the calls themselves.

pub mod batch;
pub mod shapes;
pub mod target;
pub mod vertex;

pub use batch::VertexBatch;
pub use target::{DrawCall, RecordingTarget, RenderTarget, Rgba};
pub use vertex::Vertex;
