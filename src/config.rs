//! Startup configuration
//!
//! Supplied once by the presentation layer (arena dimensions typically come
//! from the display resolution) and treated as a constant for the lifetime
//! of the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Immutable simulation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Arena width in arena units (pixels, for a pixel-mapped display)
    pub arena_width: f32,
    /// Arena height in arena units
    pub arena_height: f32,
    /// Side length of the goal's square footprint
    pub block_size: f32,
    /// Head position after reset
    pub start_x: f32,
    pub start_y: f32,
    /// Target body length after reset; also the floor for length adjustment
    pub initial_length: f32,
    /// Target-length increment per goal reached
    pub grow_length: f32,
    /// Head speed after reset, in arena units per second
    pub initial_speed: f32,
    /// Seed for goal placement
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            block_size: BLOCK_SIZE,
            start_x: START_X,
            start_y: START_Y,
            initial_length: INITIAL_LENGTH,
            grow_length: GROW_LENGTH,
            initial_speed: INITIAL_SPEED,
            seed: 0,
        }
    }
}

impl SimConfig {
    pub fn arena(&self) -> Vec2 {
        Vec2::new(self.arena_width, self.arena_height)
    }

    pub fn block(&self) -> Vec2 {
        Vec2::splat(self.block_size)
    }

    pub fn start_position(&self) -> Vec2 {
        Vec2::new(self.start_x, self.start_y)
    }
}
