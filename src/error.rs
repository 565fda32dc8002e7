//! Error types
//!
//! Simulation errors are caller invariant violations and are surfaced
//! immediately; nothing here is retryable.

use thiserror::Error;

/// Errors raised by the simulation core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("cannot normalize a zero-length vector ({context})")]
    DegenerateVector { context: &'static str },
    #[error("cut length {length} must be in (0, 2π)")]
    InvalidArcLength { length: f32 },
    #[error("sprite footprint {width}x{height} is not a square")]
    ShapeConstraint { width: f32, height: f32 },
}

/// Errors raised while loading a [`crate::SimConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
