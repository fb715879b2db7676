use crate::math::{Point, Real, POINT_ON_LINE_EPSILON};
use crate::shape::Segment;

/// Tests if `pt` lies on the infinite line supporting `segment`, in the XY plane.
///
/// The line is evaluated in slope-intercept form `y = m * x + b` and the point is
/// accepted if `|pt.y - (m * pt.x + b)| < POINT_ON_LINE_EPSILON`. The Z coordinates
/// are ignored.
///
/// Vertical lines (including zero-length segments) have no slope. For those, the
/// point is accepted if `|pt.x - segment.a.x| < POINT_ON_LINE_EPSILON`.
pub fn point_on_line(pt: &Point<Real>, segment: &Segment) -> bool {
    let run = segment.b.x - segment.a.x;

    if run == 0.0 {
        return (pt.x - segment.a.x).abs() < POINT_ON_LINE_EPSILON;
    }

    let m = (segment.b.y - segment.a.y) / run;
    let b = segment.a.y - m * segment.a.x;
    (pt.y - (m * pt.x + b)).abs() < POINT_ON_LINE_EPSILON
}

/// Tests if `pt` lies on the infinite line supporting `segment`, in the XY plane.
///
/// Same as [`point_on_line`] with its arguments swapped.
#[inline]
pub fn line_contains_point(segment: &Segment, pt: &Point<Real>) -> bool {
    point_on_line(pt, segment)
}

/// Computes the point of `segment` closest to `pt`, as well as its parameter on
/// the segment.
///
/// The returned parameter `t` lies in `[0, 1]` and the returned point is
/// `segment.a + t * (segment.b - segment.a)`. A zero-length segment yields
/// `(segment.a, 0.0)`.
pub fn closest_point_segment_point_with_param(
    segment: &Segment,
    pt: &Point<Real>,
) -> (Point<Real>, Real) {
    let ab = segment.scaled_direction();
    let sqnab = ab.norm_squared();

    if sqnab == 0.0 {
        log::debug!("Closest point requested on a zero-length segment at {:?}.", segment.a);
        return (segment.a, 0.0);
    }

    let t = na::clamp((pt - segment.a).dot(&ab) / sqnab, 0.0, 1.0);
    (segment.a + ab * t, t)
}

/// Computes the point of `segment` closest to `pt`.
#[inline]
pub fn closest_point_segment_point(segment: &Segment, pt: &Point<Real>) -> Point<Real> {
    closest_point_segment_point_with_param(segment, pt).0
}

/// Computes the point of `segment` closest to `pt`.
///
/// Same as [`closest_point_segment_point`] with its arguments swapped.
#[inline]
pub fn closest_point_point_segment(pt: &Point<Real>, segment: &Segment) -> Point<Real> {
    closest_point_segment_point(segment, pt)
}
