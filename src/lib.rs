//! Poly Snake - continuous-motion snake simulation core
//!
//! Core modules:
//! - `sim`: deterministic simulation (geometry kernel, polyline track, tick)
//! - `config`: startup configuration supplied by the presentation layer
//!
//! The crate owns no rendering or input handling. A presentation layer feeds
//! `sim::tick` an elapsed-time delta plus a direction command each frame and
//! reads back the polyline, head, and telemetry for drawing.

pub mod config;
pub mod sim;

pub use config::SimConfig;
pub use sim::{SimState, TickInput, TickStatus, tick};

/// Simulation constants
pub mod consts {
    /// Fixed demo timestep (60 Hz; the core accepts any non-negative dt)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Snake defaults
    pub const INITIAL_LENGTH: f32 = 50.0;
    pub const GROW_LENGTH: f32 = 30.0;
    pub const INITIAL_SPEED: f32 = 100.0;

    /// Side length of the goal's square footprint, in arena units
    pub const BLOCK_SIZE: f32 = 6.0;

    /// Default arena (presentation layers derive theirs from the display)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Head start position after reset
    pub const START_X: f32 = 200.0;
    pub const START_Y: f32 = 200.0;

    /// Step sizes for the debug speed / length adjustment commands
    pub const SPEED_STEP: f32 = 5.0;
    pub const STRETCH_STEP: f32 = 1.0;
}
