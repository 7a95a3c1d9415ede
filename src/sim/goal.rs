//! Goal placement
//!
//! The goal is a block-sized square; the head's movement segment is tested
//! against its four sides each tick. Placement is uniform over the arena
//! and makes no attempt to avoid the snake body.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::segment::Segment;

/// A goal position and the boundary segments of its square footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub pos: Vec2,
    /// Left, top, right, bottom sides.
    pub sides: [Segment; 4],
}

impl Goal {
    /// Pick a fresh goal position, uniform over
    /// `[0, arena.x - block.x] x [0, arena.y - block.y]`.
    pub fn reposition(rng: &mut Pcg32, arena: Vec2, block: Vec2) -> Self {
        assert!(
            arena.x > 0.0 && arena.y > 0.0,
            "arena dimensions must be positive"
        );
        let pos = Vec2::new(
            rng.random_range(0.0..=(arena.x - block.x)),
            rng.random_range(0.0..=(arena.y - block.y)),
        );
        Self::at(pos, block)
    }

    /// Build the square footprint centered on `pos`.
    pub fn at(pos: Vec2, block: Vec2) -> Self {
        let half = block / 2.0;
        let upper_left = Vec2::new(pos.x - half.x, pos.y - half.y);
        let upper_right = Vec2::new(pos.x + half.x, pos.y - half.y);
        let lower_left = Vec2::new(pos.x - half.x, pos.y + half.y);
        let lower_right = Vec2::new(pos.x + half.x, pos.y + half.y);
        Self {
            pos,
            sides: [
                Segment::new(upper_left, lower_left),
                Segment::new(upper_left, upper_right),
                Segment::new(upper_right, lower_right),
                Segment::new(lower_left, lower_right),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_reposition_stays_in_bounds() {
        let mut rng = Pcg32::seed_from_u64(7);
        let arena = Vec2::new(800.0, 600.0);
        let block = Vec2::splat(6.0);
        for _ in 0..200 {
            let goal = Goal::reposition(&mut rng, arena, block);
            assert!(goal.pos.x >= 0.0 && goal.pos.x <= arena.x - block.x);
            assert!(goal.pos.y >= 0.0 && goal.pos.y <= arena.y - block.y);
        }
    }

    #[test]
    fn test_sides_form_the_footprint() {
        let goal = Goal::at(Vec2::new(100.0, 50.0), Vec2::splat(6.0));
        let [left, top, right, bottom] = goal.sides;
        assert_eq!(left.p1, Vec2::new(97.0, 47.0));
        assert_eq!(left.p2, Vec2::new(97.0, 53.0));
        assert_eq!(top.p2, Vec2::new(103.0, 47.0));
        assert_eq!(right.p2, Vec2::new(103.0, 53.0));
        assert_eq!(bottom.p1, Vec2::new(97.0, 53.0));
    }

    #[test]
    fn test_reposition_is_deterministic_per_seed() {
        let arena = Vec2::new(800.0, 600.0);
        let block = Vec2::splat(6.0);
        let a = Goal::reposition(&mut Pcg32::seed_from_u64(42), arena, block);
        let b = Goal::reposition(&mut Pcg32::seed_from_u64(42), arena, block);
        assert_eq!(a.pos, b.pos);
    }
}
