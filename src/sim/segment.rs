//! Static line-segment platforms
//!
//! A platform is the segment between two endpoints. The wheel never moves a
//! platform and a platform never references the wheel; the only coupling is
//! the closest-point query below.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An immutable line-segment obstacle the wheel can rest on or collide with.
///
/// A zero-length segment (`a == b`) degenerates to the point `a`; queries
/// treat it as such instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// Closest point on the segment to `p`.
    ///
    /// Projects `p` onto the carrying line and clamps the parameter to
    /// `[0, 1]`; the clamp is what makes this a segment query rather than a
    /// line query.
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        let line = self.b - self.a;
        let len_sq = line.length_squared();
        if len_sq == 0.0 {
            return self.a;
        }
        let t = ((p - self.a).dot(line) / len_sq).clamp(0.0, 1.0);
        self.a + line * t
    }

    /// Whether a circle at `center` with `radius` overlaps this segment.
    ///
    /// Squared distances throughout; this runs for every platform on every
    /// tick.
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        let closest = self.closest_point(center);
        center.distance_squared(closest) <= radius * radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_point_projects_interior() {
        let seg = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        assert_eq!(seg.closest_point(Vec2::new(4.0, 3.0)), Vec2::new(4.0, 0.0));
    }

    #[test]
    fn closest_point_clamps_to_endpoints() {
        let seg = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        assert_eq!(seg.closest_point(Vec2::new(-5.0, 2.0)), seg.a);
        assert_eq!(seg.closest_point(Vec2::new(15.0, -2.0)), seg.b);
    }

    #[test]
    fn closest_point_is_idempotent() {
        let seg = Segment::new(Vec2::new(100.0, 500.0), Vec2::new(300.0, 500.0));
        let once = seg.closest_point(Vec2::new(200.0, 485.0));
        assert_eq!(seg.closest_point(once), once);
    }

    #[test]
    fn zero_length_segment_acts_as_point() {
        let seg = Segment::new(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0));
        assert_eq!(seg.closest_point(Vec2::new(100.0, -40.0)), seg.a);
        assert!(seg.intersects_circle(Vec2::new(8.0, 9.0), 5.0));
        assert!(!seg.intersects_circle(Vec2::new(8.0, 9.0), 4.9));
    }

    #[test]
    fn circle_touching_counts_as_intersecting() {
        let seg = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        // Exactly tangent: distance == radius
        assert!(seg.intersects_circle(Vec2::new(5.0, 3.0), 3.0));
        assert!(!seg.intersects_circle(Vec2::new(5.0, 3.0), 2.999));
    }
}
