//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Tick-driven, synchronous, single caller
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod goal;
pub mod segment;
pub mod state;
pub mod tick;
pub mod track;

pub use goal::Goal;
pub use segment::{Segment, SegmentKind, intersection, segments_intersect};
pub use state::{BoundaryMode, Direction, Phase, SimState, Telemetry};
pub use tick::{TickInput, TickStatus, tick};
pub use track::{Joint, Track};
