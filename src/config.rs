//! Arena configuration
//!
//! Physics constants are fixed (see [`crate::consts`]); only the arena size,
//! the RNG seed and the length of a headless run are configurable.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Simulation setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Arena width in pixels
    pub arena_width: f32,
    /// Arena height in pixels
    pub arena_height: f32,
    /// Seed for every random draw in the simulation
    pub seed: u64,
    /// Ticks to run in headless mode
    pub ticks: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena_width: 1920.0,
            arena_height: 1080.0,
            seed: 0x0b17_b4ea,
            ticks: 600,
        }
    }
}

impl SimConfig {
    /// Arena center; arcs and the ball are placed around it
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.arena_width, self.arena_height) / 2.0
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load from `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::load(path).unwrap_or_else(|e| {
                log::warn!("{e}; using default config");
                Self::default()
            }),
            None => {
                log::info!("Using default config");
                Self::default()
            }
        }
    }
}
