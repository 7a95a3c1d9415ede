//! Per-tick simulation advance
//!
//! One call per frame: read the direction command, move the head, apply the
//! boundary policy, trim the tail, then probe the recent movement segment
//! for self- and goal-intersections.

use glam::Vec2;

use super::goal::Goal;
use super::segment::{Segment, segments_intersect};
use super::state::{BoundaryMode, Direction, Phase, SimState};

/// Input commands for a single tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Requested travel direction; `None` keeps the current one.
    pub direction: Option<Direction>,
    /// Pause toggle
    pub pause: bool,
    /// Start a new life
    pub reset: bool,
    /// Debug: disable the self-collision probe
    pub toggle_ignore_collisions: bool,
    /// Cycle WrapAround -> Collision -> Unbounded
    pub toggle_boundary_mode: bool,
    /// Debug: grow without feeding
    pub grow: bool,
    /// Speed adjustment, clamped so speed never goes negative
    pub speed_delta: f32,
    /// Target-length adjustment, floored at the configured initial length
    pub stretch_delta: f32,
}

/// Outcome of a tick, for scoring and presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    Alive,
    /// The movement segment crossed a goal side this tick.
    JustGrew,
    /// The snake died this tick (self-collision or boundary hit).
    JustDied,
}

/// Advance the simulation by `dt` seconds.
///
/// `dt == 0` is a valid no-op displacement. While `Paused` only the pause
/// and reset commands are honored; while `Dead` only reset is.
pub fn tick(state: &mut SimState, input: &TickInput, dt: f32) -> TickStatus {
    debug_assert!(dt >= 0.0, "elapsed time must not be negative");

    if input.reset {
        state.reset();
        return TickStatus::Alive;
    }

    match state.phase {
        Phase::Dead => return TickStatus::Alive,
        Phase::Paused => {
            if input.pause {
                state.phase = Phase::Running;
            }
            return TickStatus::Alive;
        }
        Phase::Running if input.pause => {
            state.phase = Phase::Paused;
            return TickStatus::Alive;
        }
        Phase::Running => {}
    }

    apply_control_commands(state, input);

    // Direction command; exact reversals are rejected (four-way movement,
    // the head can never fold straight back onto itself).
    if let Some(requested) = input.direction {
        if requested != state.direction.opposite() && requested != state.direction {
            state.track.push(state.head, false);
            state.direction = requested;
        }
    }

    let pre_move = state.head;
    state.head += state.direction.unit() * (state.speed * dt);

    // Boundary policy.
    let mut probe_start = pre_move;
    match state.boundary_mode {
        BoundaryMode::Collision => {
            let arena = state.config().arena();
            let h = state.head;
            if h.x < 0.0 || h.x > arena.x || h.y < 0.0 || h.y > arena.y {
                state.phase = Phase::Dead;
                log::info!("hit the arena boundary at ({}, {})", h.x, h.y);
                return TickStatus::JustDied;
            }
        }
        BoundaryMode::WrapAround => {
            if let Some(entry) = apply_wrap(state) {
                // The movement probe covers only the entering side; the
                // sub-displacement sliver left behind on the exit side was
                // already adjacent to the previous tick's probe.
                probe_start = entry;
            }
        }
        BoundaryMode::Unbounded => {}
    }

    state
        .track
        .trim_to_length(state.head, state.target_length);

    let probe = Segment::new(probe_start, state.head);

    if !state.ignore_collisions {
        let hit = state
            .track
            .collidable_edges()
            .any(|edge| segments_intersect(&probe, &edge));
        if hit {
            state.phase = Phase::Dead;
            log::info!(
                "self-collision at ({}, {})",
                state.head.x,
                state.head.y
            );
            return TickStatus::JustDied;
        }
    }

    let fed = state
        .goal
        .sides
        .iter()
        .any(|side| segments_intersect(&probe, side));
    if fed {
        state.grow();
        let config = state.config();
        state.goal = Goal::reposition(&mut state.rng, config.arena(), config.block());
        log::info!(
            "goal reached; target length now {}",
            state.target_length
        );
        return TickStatus::JustGrew;
    }

    TickStatus::Alive
}

fn apply_control_commands(state: &mut SimState, input: &TickInput) {
    if input.toggle_ignore_collisions {
        state.ignore_collisions = !state.ignore_collisions;
        log::info!(
            "self-collision probe {}",
            if state.ignore_collisions {
                "disabled"
            } else {
                "enabled"
            }
        );
    }
    if input.toggle_boundary_mode {
        state.boundary_mode = state.boundary_mode.next();
        log::info!("boundary mode: {:?}", state.boundary_mode);
    }
    if input.grow {
        state.grow();
    }
    if input.speed_delta != 0.0 {
        state.speed = (state.speed + input.speed_delta).max(0.0);
    }
    if input.stretch_delta != 0.0 {
        state.target_length =
            (state.target_length + input.stretch_delta).max(state.config().initial_length);
    }
}

/// Re-inject the head across the opposite edge if it left the arena.
///
/// Appends a joint at the exit point and a seam-flagged joint at the
/// mirrored entry point, then offsets the head past the entry edge by the
/// exact overflow so distance accounting stays intact. Travel is
/// axis-aligned, so at most one edge can be crossed per tick.
///
/// Returns the entry point if a wrap happened.
fn apply_wrap(state: &mut SimState) -> Option<Vec2> {
    let arena = state.config().arena();
    let head = state.head;
    let (exit, entry, wrapped) = if head.x < 0.0 {
        (
            Vec2::new(0.0, head.y),
            Vec2::new(arena.x, head.y),
            Vec2::new(arena.x + head.x, head.y),
        )
    } else if head.x > arena.x {
        (
            Vec2::new(arena.x, head.y),
            Vec2::new(0.0, head.y),
            Vec2::new(head.x - arena.x, head.y),
        )
    } else if head.y < 0.0 {
        (
            Vec2::new(head.x, 0.0),
            Vec2::new(head.x, arena.y),
            Vec2::new(head.x, arena.y + head.y),
        )
    } else if head.y > arena.y {
        (
            Vec2::new(head.x, arena.y),
            Vec2::new(head.x, 0.0),
            Vec2::new(head.x, head.y - arena.y),
        )
    } else {
        return None;
    };

    state.track.push(exit, false);
    state.track.push(entry, true);
    state.head = wrapped;
    log::debug!(
        "wrapped: exit ({}, {}) -> entry ({}, {})",
        exit.x,
        exit.y,
        entry.x,
        entry.y
    );
    Some(entry)
}
