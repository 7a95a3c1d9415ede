//! The polyline track behind the snake head
//!
//! Joints are the direction-change corners (plus wrap seams) recorded
//! oldest-first. The head itself is not a joint; it becomes one when the
//! travel direction changes. Trimming walks from the newest end and keeps
//! the connected arc length within the target.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::segment::Segment;

/// One corner of the trailing polyline.
///
/// `break_before` marks the edge from the previous (older) joint to this one
/// as a seam: a teleport across a wrapped arena edge, excluded from length
/// accounting, self-collision, and continuous rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    pub pos: Vec2,
    pub break_before: bool,
}

/// Ordered joint list, oldest-first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Track {
    joints: Vec<Joint>,
}

impl Track {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a joint at the newest end.
    pub fn push(&mut self, pos: Vec2, break_before: bool) {
        self.joints.push(Joint { pos, break_before });
    }

    /// Drop everything and place the single seed joint (reset).
    pub fn reseed(&mut self, anchor: Vec2) {
        self.joints.clear();
        self.joints.push(Joint {
            pos: anchor,
            break_before: false,
        });
    }

    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// Arc length of the connected body from `head` back to the oldest
    /// joint. Seam edges contribute nothing.
    pub fn body_length(&self, head: Vec2) -> f32 {
        let mut length = 0.0;
        let mut newer = head;
        let mut newer_break = false;
        for joint in self.joints.iter().rev() {
            if !newer_break {
                length += (newer - joint.pos).length();
            }
            newer = joint.pos;
            newer_break = joint.break_before;
        }
        length
    }

    /// Trim the tail so the connected arc length from `head` backward does
    /// not exceed `target`.
    ///
    /// Walks newest to oldest, accumulating edge lengths (seam edges count
    /// as zero; traversal continues past them). Once the running sum
    /// exceeds `target`, the stopping edge is shortened by sliding its
    /// older endpoint forward along the edge by the overflow, and every
    /// strictly older joint is dropped. The oldest surviving joint is never
    /// left flagged as a seam origin, since nothing precedes it.
    ///
    /// Returns the number of joints removed.
    pub fn trim_to_length(&mut self, head: Vec2, target: f32) -> usize {
        debug_assert!(target >= 0.0, "target length must not be negative");

        let mut length = 0.0_f32;
        let mut newer = head;
        let mut newer_break = false;
        // Direction (older -> newer) of the last connected edge walked.
        let mut edge = Vec2::ZERO;
        // Index where the walk stopped; joints below it are stale.
        let mut stop = self.joints.len();

        for (i, joint) in self.joints.iter().enumerate().rev() {
            if length > target {
                break;
            }
            stop = i;
            if !newer_break {
                edge = newer - joint.pos;
                length += edge.length();
            }
            newer = joint.pos;
            newer_break = joint.break_before;
        }

        if length > target {
            // The overflow is always smaller than the stopping edge, and
            // the stopping edge is always a connected one: seam edges add
            // no length, so the sum can only cross the target on a real
            // edge.
            let overflow = length - target;
            debug_assert!(
                edge.length_squared() > 0.0,
                "trim overflow on a degenerate edge"
            );
            self.joints[stop].pos += edge.normalize() * overflow;
        }

        let removed = stop.min(self.joints.len());
        self.joints.drain(..removed);
        if let Some(first) = self.joints.first_mut() {
            first.break_before = false;
        }

        debug_assert!(
            self.body_length(head) <= target + 1e-3,
            "trim left the body over target length"
        );
        removed
    }

    /// Body segments eligible for self-collision, newest first.
    ///
    /// Skips seam edges and the newest joint-to-joint edge: the movement
    /// probe starts on that edge, and touching endpoints count as
    /// intersections, so testing it would report a hit on every turn.
    pub fn collidable_edges(&self) -> impl Iterator<Item = Segment> + '_ {
        self.joints
            .windows(2)
            .rev()
            .skip(1)
            .filter(|pair| !pair[1].break_before)
            .map(|pair| Segment::new(pair[0].pos, pair[1].pos))
    }
}
