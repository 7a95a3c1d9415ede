//! Exact 2D line-segment classification and intersection
//!
//! The snake body is piecewise axis-aligned-or-diagonal and every edge is
//! probed once per tick, so classification uses cheap exact comparisons
//! instead of a general robust-geometry routine. All range checks are
//! inclusive: touching endpoints count as intersections.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A finite line segment. May degenerate to a point; never an infinite line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub p1: Vec2,
    pub p2: Vec2,
}

/// Shape classes a segment can fall into, by exact endpoint comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Point,
    Vertical,
    Horizontal,
    Oblique,
}

/// Exact coordinate comparison, isolated so a tolerance-based variant could
/// be swapped in without touching the dispatch below.
#[inline]
fn coords_equal(a: f32, b: f32) -> bool {
    a == b
}

impl Segment {
    pub fn new(p1: Vec2, p2: Vec2) -> Self {
        Self { p1, p2 }
    }

    pub fn kind(&self) -> SegmentKind {
        let flat_x = coords_equal(self.p1.x, self.p2.x);
        let flat_y = coords_equal(self.p1.y, self.p2.y);
        match (flat_x, flat_y) {
            (true, true) => SegmentKind::Point,
            (true, false) => SegmentKind::Vertical,
            (false, true) => SegmentKind::Horizontal,
            (false, false) => SegmentKind::Oblique,
        }
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.p1.x.min(self.p2.x)
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.p1.x.max(self.p2.x)
    }

    #[inline]
    pub fn min_y(&self) -> f32 {
        self.p1.y.min(self.p2.y)
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.p1.y.max(self.p2.y)
    }

    /// Inclusive x-range test.
    #[inline]
    fn spans_x(&self, x: f32) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }

    /// Inclusive y-range test.
    #[inline]
    fn spans_y(&self, y: f32) -> bool {
        y >= self.min_y() && y <= self.max_y()
    }
}

/// y of the line through `seg` at x = `x`. `seg` must be oblique.
fn y_at_x(seg: &Segment, x: f32) -> f32 {
    debug_assert!(
        seg.kind() == SegmentKind::Oblique,
        "y_at_x needs an oblique segment"
    );
    (seg.p2.y - seg.p1.y) / (seg.p2.x - seg.p1.x) * (x - seg.p1.x) + seg.p1.y
}

/// x of the line through `seg` at y = `y`. `seg` must be oblique.
fn x_at_y(seg: &Segment, y: f32) -> f32 {
    debug_assert!(
        seg.kind() == SegmentKind::Oblique,
        "x_at_y needs an oblique segment"
    );
    (seg.p2.x - seg.p1.x) / (seg.p2.y - seg.p1.y) * (y - seg.p1.y) + seg.p1.x
}

/// y where the infinite lines through two oblique segments meet.
///
/// Parallel lines produce a non-finite y, which fails every inclusive range
/// check downstream and therefore reads as "no intersection".
fn shared_y(a: &Segment, b: &Segment) -> f32 {
    let ma = (a.p2.y - a.p1.y) / (a.p2.x - a.p1.x);
    let mb = (b.p2.y - b.p1.y) / (b.p2.x - b.p1.x);
    let x = (mb * b.p1.x - ma * a.p1.x + a.p1.y - b.p1.y) / (mb - ma);
    ma * (x - a.p1.x) + a.p1.y
}

/// Compute the intersection point of two finite segments, if any.
///
/// Dispatches on the pair of segment kinds (ten distinct cases). Known
/// quirks, kept deliberately and pinned by tests:
/// - vertical/vertical and horizontal/horizontal pairs never intersect,
///   even when collinear and overlapping;
/// - the oblique/oblique branch range-checks the solved y against the FIRST
///   operand only, so `intersection(a, b)` and `intersection(b, a)` can
///   disagree for oblique pairs;
/// - the oblique/point branch has no range check at all, so a point on the
///   segment's infinite extension still reports a hit.
pub fn intersection(a: &Segment, b: &Segment) -> Option<Vec2> {
    use SegmentKind::*;
    match (a.kind(), b.kind()) {
        (Point, Point) => {
            (coords_equal(a.p1.x, b.p1.x) && coords_equal(a.p1.y, b.p1.y)).then_some(a.p1)
        }
        (Vertical, Vertical) | (Horizontal, Horizontal) => None,
        (Vertical, Horizontal) => vertical_horizontal(a, b),
        (Horizontal, Vertical) => vertical_horizontal(b, a),
        (Vertical, Point) => vertical_point(a, b.p1),
        (Point, Vertical) => vertical_point(b, a.p1),
        (Horizontal, Point) => horizontal_point(a, b.p1),
        (Point, Horizontal) => horizontal_point(b, a.p1),
        (Vertical, Oblique) => vertical_oblique(a, b),
        (Oblique, Vertical) => vertical_oblique(b, a),
        (Horizontal, Oblique) => horizontal_oblique(a, b),
        (Oblique, Horizontal) => horizontal_oblique(b, a),
        (Oblique, Point) => oblique_point(a, b.p1),
        (Point, Oblique) => oblique_point(b, a.p1),
        (Oblique, Oblique) => oblique_oblique(a, b),
    }
}

/// Whether two finite segments intersect.
pub fn segments_intersect(a: &Segment, b: &Segment) -> bool {
    intersection(a, b).is_some()
}

fn vertical_horizontal(v: &Segment, h: &Segment) -> Option<Vec2> {
    (h.spans_x(v.p1.x) && v.spans_y(h.p1.y)).then(|| Vec2::new(v.p1.x, h.p1.y))
}

fn vertical_point(v: &Segment, p: Vec2) -> Option<Vec2> {
    (coords_equal(p.x, v.p1.x) && v.spans_y(p.y)).then_some(p)
}

fn horizontal_point(h: &Segment, p: Vec2) -> Option<Vec2> {
    (coords_equal(p.y, h.p1.y) && h.spans_x(p.x)).then_some(p)
}

fn vertical_oblique(v: &Segment, o: &Segment) -> Option<Vec2> {
    if !o.spans_x(v.p1.x) {
        return None;
    }
    let y = y_at_x(o, v.p1.x);
    v.spans_y(y).then(|| Vec2::new(v.p1.x, y))
}

fn horizontal_oblique(h: &Segment, o: &Segment) -> Option<Vec2> {
    if !o.spans_y(h.p1.y) {
        return None;
    }
    let x = x_at_y(o, h.p1.y);
    h.spans_x(x).then(|| Vec2::new(x, h.p1.y))
}

fn oblique_point(o: &Segment, p: Vec2) -> Option<Vec2> {
    coords_equal(y_at_x(o, p.x), p.y).then_some(p)
}

fn oblique_oblique(a: &Segment, b: &Segment) -> Option<Vec2> {
    let y = shared_y(a, b);
    (y >= a.min_y() && y <= a.max_y()).then(|| Vec2::new(x_at_y(a, y), y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x1: f32, y1: f32, x2: f32, y2: f32) -> Segment {
        Segment::new(Vec2::new(x1, y1), Vec2::new(x2, y2))
    }

    #[test]
    fn test_classification() {
        assert_eq!(seg(1.0, 2.0, 1.0, 2.0).kind(), SegmentKind::Point);
        assert_eq!(seg(1.0, 0.0, 1.0, 5.0).kind(), SegmentKind::Vertical);
        assert_eq!(seg(0.0, 3.0, 7.0, 3.0).kind(), SegmentKind::Horizontal);
        assert_eq!(seg(0.0, 0.0, 2.0, 3.0).kind(), SegmentKind::Oblique);
    }

    #[test]
    fn test_point_point() {
        let p = seg(4.0, 4.0, 4.0, 4.0);
        assert_eq!(intersection(&p, &p), Some(Vec2::new(4.0, 4.0)));
        assert_eq!(intersection(&p, &seg(4.0, 5.0, 4.0, 5.0)), None);
    }

    #[test]
    fn test_parallel_axis_aligned_never_intersect() {
        // Collinear overlap is not detected; pinned as a known limitation.
        let v1 = seg(2.0, 0.0, 2.0, 10.0);
        let v2 = seg(2.0, 5.0, 2.0, 15.0);
        assert_eq!(intersection(&v1, &v2), None);

        let h1 = seg(0.0, 3.0, 10.0, 3.0);
        let h2 = seg(5.0, 3.0, 15.0, 3.0);
        assert_eq!(intersection(&h1, &h2), None);
    }

    #[test]
    fn test_vertical_horizontal_cross() {
        let v = seg(5.0, 0.0, 5.0, 10.0);
        let h = seg(0.0, 4.0, 10.0, 4.0);
        assert_eq!(intersection(&v, &h), Some(Vec2::new(5.0, 4.0)));
        assert_eq!(intersection(&h, &v), Some(Vec2::new(5.0, 4.0)));
        // Touching at an endpoint counts.
        let h_touch = seg(5.0, 10.0, 12.0, 10.0);
        assert_eq!(intersection(&v, &h_touch), Some(Vec2::new(5.0, 10.0)));
        // Crossing lines but disjoint segments.
        let h_miss = seg(6.0, 4.0, 10.0, 4.0);
        assert_eq!(intersection(&v, &h_miss), None);
    }

    #[test]
    fn test_vertical_point() {
        let v = seg(5.0, 0.0, 5.0, 10.0);
        let on = seg(5.0, 7.0, 5.0, 7.0);
        let off_line = seg(5.5, 7.0, 5.5, 7.0);
        let off_range = seg(5.0, 11.0, 5.0, 11.0);
        assert_eq!(intersection(&v, &on), Some(Vec2::new(5.0, 7.0)));
        assert_eq!(intersection(&on, &v), Some(Vec2::new(5.0, 7.0)));
        assert_eq!(intersection(&v, &off_line), None);
        assert_eq!(intersection(&v, &off_range), None);
    }

    #[test]
    fn test_horizontal_point() {
        let h = seg(0.0, 3.0, 10.0, 3.0);
        let on = seg(2.0, 3.0, 2.0, 3.0);
        let off_range = seg(11.0, 3.0, 11.0, 3.0);
        assert_eq!(intersection(&h, &on), Some(Vec2::new(2.0, 3.0)));
        assert_eq!(intersection(&h, &off_range), None);
    }

    #[test]
    fn test_vertical_oblique() {
        let v = seg(5.0, 0.0, 5.0, 10.0);
        let o = seg(0.0, 0.0, 10.0, 10.0);
        assert_eq!(intersection(&v, &o), Some(Vec2::new(5.0, 5.0)));
        assert_eq!(intersection(&o, &v), Some(Vec2::new(5.0, 5.0)));
        // Shared endpoint counts.
        let o_touch = seg(5.0, 5.0, 8.0, 8.0);
        assert_eq!(intersection(&v, &o_touch), Some(Vec2::new(5.0, 5.0)));
        // Line crosses but outside the vertical's y-range.
        let o_miss = seg(0.0, 20.0, 10.0, 30.0);
        assert_eq!(intersection(&v, &o_miss), None);
    }

    #[test]
    fn test_horizontal_oblique() {
        let h = seg(0.0, 5.0, 10.0, 5.0);
        let o = seg(0.0, 0.0, 10.0, 10.0);
        assert_eq!(intersection(&h, &o), Some(Vec2::new(5.0, 5.0)));
        assert_eq!(intersection(&o, &h), Some(Vec2::new(5.0, 5.0)));
        // Intersection x outside the horizontal's range.
        let h_short = seg(6.0, 5.0, 10.0, 5.0);
        assert_eq!(intersection(&h_short, &o), None);
    }

    #[test]
    fn test_oblique_point_on_segment() {
        let o = seg(0.0, 0.0, 10.0, 10.0);
        let p = seg(3.0, 3.0, 3.0, 3.0);
        assert_eq!(intersection(&o, &p), Some(Vec2::new(3.0, 3.0)));
        assert_eq!(intersection(&p, &o), Some(Vec2::new(3.0, 3.0)));
        let off = seg(3.0, 4.0, 3.0, 4.0);
        assert_eq!(intersection(&o, &off), None);
    }

    #[test]
    fn test_oblique_point_on_extension_still_hits() {
        // The oblique/point branch evaluates the infinite line only.
        let o = seg(0.0, 0.0, 10.0, 10.0);
        let beyond = seg(20.0, 20.0, 20.0, 20.0);
        assert_eq!(intersection(&o, &beyond), Some(Vec2::new(20.0, 20.0)));
    }

    #[test]
    fn test_oblique_oblique_cross() {
        let a = seg(0.0, 0.0, 10.0, 10.0);
        let b = seg(0.0, 10.0, 10.0, 0.0);
        assert_eq!(intersection(&a, &b), Some(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn test_oblique_oblique_parallel() {
        let a = seg(0.0, 0.0, 10.0, 10.0);
        let b = seg(0.0, 1.0, 10.0, 11.0);
        assert_eq!(intersection(&a, &b), None);
    }

    #[test]
    fn test_oblique_oblique_asymmetry_pinned() {
        // The solved y (2.0) lies inside a's y-range but outside b's, and
        // only the first operand is range-checked. The true geometric answer
        // is "no intersection"; the one-sided check reports a hit for one
        // argument order and a miss for the other.
        let a = seg(0.0, 0.0, 10.0, 10.0);
        let b = seg(3.0, 1.0, 5.0, -1.0);
        assert_eq!(intersection(&a, &b), Some(Vec2::new(2.0, 2.0)));
        assert_eq!(intersection(&b, &a), None);
        assert_ne!(segments_intersect(&a, &b), segments_intersect(&b, &a));
    }
}
