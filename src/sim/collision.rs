//! Circle-vs-segment contact resolution
//!
//! Detection and push-out for a circular wheel against line-segment
//! platforms. The resolver corrects position only; velocity is left to the
//! damping and gravity steps, which is what lets the wheel settle into a
//! stable rest on top of a platform.

use glam::Vec2;

use super::body::Body;
use super::segment::Segment;

/// Contact normal used when the wheel center lands exactly on a segment and
/// the displacement cannot be normalized: straight up in canvas
/// coordinates, ejecting the wheel onto the surface.
const FALLBACK_NORMAL: Vec2 = Vec2::new(0.0, -1.0);

/// Push the body out of every overlapping segment along the contact normal,
/// leaving it exactly tangent to each surface it touched.
///
/// Segments are visited in collection order and each resolution sees the
/// position already corrected by earlier ones; overlapping platforms can
/// therefore produce order-dependent results. The segment list is fixed, so
/// repeated runs resolve identically.
///
/// Returns the number of contacts resolved.
pub fn resolve_segments(body: &mut Body, segments: &[Segment]) -> u32 {
    let mut contacts = 0;
    for segment in segments {
        if !segment.intersects_circle(body.pos, body.radius) {
            continue;
        }
        let closest = segment.closest_point(body.pos);
        let normal = match (body.pos - closest).try_normalize() {
            Some(n) => n,
            None => {
                log::warn!("wheel center coincides with segment at {closest}; using fallback normal");
                FALLBACK_NORMAL
            }
        };
        body.pos = closest + normal * body.radius;
        contacts += 1;
    }
    contacts
}

/// Reflect a velocity off a surface: `v' = v - 2(v·n)n`.
///
/// `normal` must be unit length; callers normalize first.
#[inline]
pub fn reflect(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushes_out_to_tangent_above() {
        let seg = Segment::new(Vec2::new(100.0, 500.0), Vec2::new(300.0, 500.0));
        let mut body = Body::new(Vec2::new(200.0, 495.0), 20.0);

        let contacts = resolve_segments(&mut body, &[seg]);
        assert_eq!(contacts, 1);
        assert_eq!(body.pos, Vec2::new(200.0, 480.0));
    }

    #[test]
    fn pushes_out_to_tangent_below() {
        // Approaching from the underside resolves to the underside.
        let seg = Segment::new(Vec2::new(100.0, 500.0), Vec2::new(300.0, 500.0));
        let mut body = Body::new(Vec2::new(200.0, 505.0), 20.0);

        resolve_segments(&mut body, &[seg]);
        assert_eq!(body.pos, Vec2::new(200.0, 520.0));
    }

    #[test]
    fn center_on_segment_uses_fallback_normal() {
        let seg = Segment::new(Vec2::new(100.0, 500.0), Vec2::new(300.0, 500.0));
        let mut body = Body::new(Vec2::new(200.0, 500.0), 20.0);

        let contacts = resolve_segments(&mut body, &[seg]);
        assert_eq!(contacts, 1);
        assert_eq!(body.pos, Vec2::new(200.0, 480.0));
    }

    #[test]
    fn non_overlapping_body_is_untouched() {
        let seg = Segment::new(Vec2::new(100.0, 500.0), Vec2::new(300.0, 500.0));
        let mut body = Body::new(Vec2::new(200.0, 400.0), 20.0);

        let contacts = resolve_segments(&mut body, &[seg]);
        assert_eq!(contacts, 0);
        assert_eq!(body.pos, Vec2::new(200.0, 400.0));
    }

    #[test]
    fn later_segments_see_corrected_position() {
        // Two coincident platforms: the second resolves against the
        // already-tangent position and leaves it unchanged.
        let seg = Segment::new(Vec2::new(100.0, 500.0), Vec2::new(300.0, 500.0));
        let mut body = Body::new(Vec2::new(200.0, 495.0), 20.0);

        let contacts = resolve_segments(&mut body, &[seg, seg]);
        assert_eq!(contacts, 2);
        assert_eq!(body.pos, Vec2::new(200.0, 480.0));
    }

    #[test]
    fn reflect_off_vertical_wall() {
        let velocity = Vec2::new(100.0, 0.0);
        let normal = Vec2::new(-1.0, 0.0);

        let reflected = reflect(velocity, normal);
        assert!((reflected.x - (-100.0)).abs() < 0.001);
        assert!(reflected.y.abs() < 0.001);
    }

    #[test]
    fn reflect_preserves_tangential_component() {
        let velocity = Vec2::new(3.0, 4.0);
        let normal = Vec2::new(0.0, -1.0);

        let reflected = reflect(velocity, normal);
        assert!((reflected.x - 3.0).abs() < 0.001);
        assert!((reflected.y - (-4.0)).abs() < 0.001);
    }
}
