//! Simulation state and core types
//!
//! `SimState` owns every piece of mutable simulation data and is mutated
//! only by the tick handler. The presentation layer reads it through a
//! shared reference.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::goal::Goal;
use super::track::Track;
use crate::config::SimConfig;

/// Four-way travel direction. No diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit displacement, y growing downward (arena coordinates).
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// What happens when the head reaches the arena boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryMode {
    /// Leaving one edge re-enters from the opposite edge through a seam.
    WrapAround,
    /// Leaving the arena kills the snake.
    Collision,
    /// The arena has no boundary.
    Unbounded,
}

impl BoundaryMode {
    /// Cycle order for the toggle command.
    pub fn next(self) -> Self {
        match self {
            BoundaryMode::WrapAround => BoundaryMode::Collision,
            BoundaryMode::Collision => BoundaryMode::Unbounded,
            BoundaryMode::Unbounded => BoundaryMode::WrapAround,
        }
    }
}

/// Current phase of a life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Running,
    Paused,
    /// Terminal per life; only reset leaves it.
    Dead,
}

/// Numeric snapshot for on-screen display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    pub speed: f32,
    pub target_length: f32,
    pub direction: Direction,
    pub joint_count: usize,
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub(crate) config: SimConfig,
    pub(crate) rng: Pcg32,
    pub phase: Phase,
    pub boundary_mode: BoundaryMode,
    /// Self-collision probe disabled (debug aid)
    pub ignore_collisions: bool,
    /// Live end of the snake; not a joint until the direction changes
    pub head: Vec2,
    pub direction: Direction,
    /// Head speed in arena units per second
    pub speed: f32,
    /// Arc length the body is trimmed to each tick
    pub target_length: f32,
    pub track: Track,
    pub goal: Goal,
}

impl SimState {
    pub fn new(config: SimConfig) -> Self {
        assert!(
            config.arena_width > 0.0 && config.arena_height > 0.0,
            "arena dimensions must be positive"
        );
        let mut rng = Pcg32::seed_from_u64(config.seed);
        let goal = Goal::reposition(&mut rng, config.arena(), config.block());
        let mut state = Self {
            config,
            rng,
            phase: Phase::Running,
            boundary_mode: BoundaryMode::Collision,
            ignore_collisions: false,
            head: config.start_position(),
            direction: Direction::Right,
            speed: config.initial_speed,
            target_length: config.initial_length,
            track: Track::new(),
            goal,
        };
        state.reset();
        state
    }

    /// Put the simulation back to its first state (new life).
    ///
    /// The boundary mode and the collision-probe toggle are sticky across
    /// resets; everything else is re-derived from the config.
    pub fn reset(&mut self) {
        self.head = self.config.start_position();
        self.direction = Direction::Right;
        self.speed = self.config.initial_speed;
        self.target_length = self.config.initial_length;
        self.track
            .reseed(self.head - self.direction.unit() * self.config.initial_length);
        self.goal = Goal::reposition(&mut self.rng, self.config.arena(), self.config.block());
        self.phase = Phase::Running;
        log::info!(
            "reset: head ({}, {}), target length {}",
            self.head.x,
            self.head.y,
            self.target_length
        );
    }

    /// Extend the target length by the configured grow increment.
    pub(crate) fn grow(&mut self) {
        self.target_length += self.config.grow_length;
    }

    pub fn config(&self) -> SimConfig {
        self.config
    }

    pub fn telemetry(&self) -> Telemetry {
        Telemetry {
            speed: self.speed,
            target_length: self.target_length,
            direction: self.direction,
            joint_count: self.track.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_seeds_one_joint_behind_head() {
        let state = SimState::new(SimConfig::default());
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.track.len(), 1);
        let anchor = state.track.joints()[0].pos;
        assert_eq!(anchor, Vec2::new(150.0, 200.0));
        assert!((state.head - anchor).length() == state.target_length);
    }

    #[test]
    fn test_reset_restores_initial_numbers() {
        let mut state = SimState::new(SimConfig::default());
        state.speed = 250.0;
        state.target_length = 500.0;
        state.track.push(Vec2::new(300.0, 300.0), false);
        state.phase = Phase::Dead;
        state.reset();
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.speed, state.config().initial_speed);
        assert_eq!(state.target_length, state.config().initial_length);
        assert_eq!(state.track.len(), 1);
    }

    #[test]
    fn test_reset_keeps_toggles() {
        let mut state = SimState::new(SimConfig::default());
        state.boundary_mode = BoundaryMode::WrapAround;
        state.ignore_collisions = true;
        state.reset();
        assert_eq!(state.boundary_mode, BoundaryMode::WrapAround);
        assert!(state.ignore_collisions);
    }

    #[test]
    fn test_serde_round_trip() {
        let state = SimState::new(SimConfig {
            seed: 99,
            ..SimConfig::default()
        });
        let json = serde_json::to_string(&state).expect("serialize");
        let back: SimState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.head, state.head);
        assert_eq!(back.phase, state.phase);
        assert_eq!(back.goal.pos, state.goal.pos);
        assert_eq!(back.track.joints(), state.track.joints());
    }

    #[test]
    #[should_panic(expected = "arena dimensions must be positive")]
    fn test_non_positive_arena_is_rejected() {
        SimState::new(SimConfig {
            arena_width: 0.0,
            ..SimConfig::default()
        });
    }
}
