use crate::math::{Point, Real};
use crate::shape::Plane;

/// Computes the orthogonal projection of `pt` on `plane`.
#[inline]
pub fn closest_point_plane_point(plane: &Plane, pt: &Point<Real>) -> Point<Real> {
    pt - *plane.normal * plane.signed_distance(pt)
}

/// Computes the orthogonal projection of `pt` on `plane`.
///
/// Same as [`closest_point_plane_point`] with its arguments swapped.
#[inline]
pub fn closest_point_point_plane(pt: &Point<Real>, plane: &Plane) -> Point<Real> {
    closest_point_plane_point(plane, pt)
}
