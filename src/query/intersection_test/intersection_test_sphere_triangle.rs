use crate::query::point::closest_point_triangle_point;
use crate::shape::{Sphere, Triangle};

/// Intersection test between a triangle and a sphere.
///
/// The shapes intersect if the point of the triangle closest to the sphere center is
/// strictly closer than the radius. A sphere tangent to the triangle does not
/// intersect it.
#[inline]
pub fn intersection_test_triangle_sphere(triangle1: &Triangle, sphere2: &Sphere) -> bool {
    let closest = closest_point_triangle_point(triangle1, &sphere2.center);
    sphere2.contains_point(&closest)
}

/// Intersection test between a sphere and a triangle.
#[inline]
pub fn intersection_test_sphere_triangle(sphere1: &Sphere, triangle2: &Triangle) -> bool {
    intersection_test_triangle_sphere(triangle2, sphere1)
}
