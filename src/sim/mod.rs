//! Simulation module
//!
//! All behaviour lives here and must stay deterministic:
//! - One fixed step per tick, scaled only by the speed multiplier
//! - Seeded RNG only
//! - Stable iteration order (insertion order, arcs outer to inner)
//! - No platform dependencies; drawing goes through `RenderTarget`

pub mod arc;
pub mod collision;
pub mod entity;
pub mod fracture;
pub mod geometry;
pub mod group;
pub mod sdf;
pub mod state;
pub mod tick;

pub use arc::ArcBand;
pub use collision::{OverlapTest, SdfOverlap, collide_ball, needs_check, reflect_ball};
pub use entity::{Arc, ArcParams, Ball, Entity, Footprint, Particle, ParticleParams, Sprite, TickContext};
pub use fracture::{break_arc, random_angle_with_cut};
pub use geometry::Circle;
pub use group::Group;
pub use state::{Layout, SimEvent, Simulation};
pub use tick::{Command, MouseButton, TickInput, TickReport, generate_layout, tick};
