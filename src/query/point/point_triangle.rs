use crate::math::{Point, Real};
use crate::query::point::{closest_point_plane_point, closest_point_segment_point};
use crate::query::DegenerateShape;
use crate::shape::{Plane, Triangle};

/// Tests if `pt` lies inside of `triangle`.
///
/// The triangle vertices are expressed relative to `pt`, and the normals of the three
/// sub-triangles `(pt, b, c)`, `(pt, c, a)`, `(pt, a, b)` are compared. The point is
/// inside if these normals all point toward the same side. No tolerance is applied:
/// a point on an edge or a vertex yields a zero normal and is accepted as inside.
///
/// This does not check that `pt` lies on the triangle's plane. Points off the plane
/// are classified according to the prism obtained by extruding the triangle along
/// its normal.
///
/// Returns an error if the triangle has a zero area.
pub fn point_in_triangle(pt: &Point<Real>, triangle: &Triangle) -> Result<bool, DegenerateShape> {
    if triangle.is_degenerate() {
        return Err(DegenerateShape::Triangle);
    }

    let a = triangle.a - pt;
    let b = triangle.b - pt;
    let c = triangle.c - pt;

    let u = b.cross(&c);
    let v = c.cross(&a);
    let w = a.cross(&b);

    // The third test, `v · w >= 0`, follows from these two.
    Ok(u.dot(&v) >= 0.0 && u.dot(&w) >= 0.0)
}

/// Tests if `pt` lies inside of `triangle`.
///
/// Same as [`point_in_triangle`] with its arguments swapped.
#[inline]
pub fn triangle_contains_point(
    triangle: &Triangle,
    pt: &Point<Real>,
) -> Result<bool, DegenerateShape> {
    point_in_triangle(pt, triangle)
}

/// Computes the point of `triangle` closest to `pt`.
///
/// The point is first projected on the triangle's plane. If this projection lies
/// inside of the triangle, it is the result. Otherwise, the result is the closest
/// of the points of the edges `AB`, `BC`, `CA` closest to the projection. On ties,
/// the first edge of that list wins.
///
/// Degenerate triangles have no plane, so only their edges are considered.
pub fn closest_point_triangle_point(triangle: &Triangle, pt: &Point<Real>) -> Point<Real> {
    let proj = match Plane::from_triangle(triangle) {
        Ok(plane) => {
            let proj = closest_point_plane_point(&plane, pt);
            if let Ok(true) = point_in_triangle(&proj, triangle) {
                return proj;
            }
            proj
        }
        Err(_) => {
            log::debug!("Closest point requested on a degenerate triangle: {:?}.", triangle);
            *pt
        }
    };

    let mut best = triangle.a;
    let mut best_sqdist = Real::MAX;

    for edge in &triangle.edges() {
        let candidate = closest_point_segment_point(edge, &proj);
        let sqdist = na::distance_squared(&candidate, &proj);

        if sqdist < best_sqdist {
            best = candidate;
            best_sqdist = sqdist;
        }
    }

    best
}

/// Computes the point of `triangle` closest to `pt`.
///
/// Same as [`closest_point_triangle_point`] with its arguments swapped.
#[inline]
pub fn closest_point_point_triangle(pt: &Point<Real>, triangle: &Triangle) -> Point<Real> {
    closest_point_triangle_point(triangle, pt)
}
