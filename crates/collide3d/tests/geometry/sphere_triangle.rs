use crate::common;
use collide3d::math::Point;
use collide3d::query;
use collide3d::shape::{Sphere, Triangle};

#[test]
fn sphere_tangent_to_triangle() {
    let tri = Triangle::new(
        Point::new(-2.0, -2.0, 0.0),
        Point::new(2.0, -2.0, 0.0),
        Point::new(0.0, 2.0, 0.0),
    );
    let touching = Sphere::new(Point::new(0.0, 0.0, 5.0), 5.0);
    let overlapping = Sphere::new(Point::new(0.0, 0.0, 5.0), 5.0001);

    assert!(!query::intersection_test_triangle_sphere(&tri, &touching));
    assert!(!query::intersection_test_sphere_triangle(&touching, &tri));
    assert!(query::intersection_test_triangle_sphere(&tri, &overlapping));
    assert!(query::intersection_test_sphere_triangle(&overlapping, &tri));
}

#[test]
fn sphere_containing_a_triangle_point_intersects() {
    let mut rng = common::rng();

    for _ in 0..200 {
        let tri = common::random_triangle(&mut rng, 5.0);
        let center = common::random_point_on_triangle(&mut rng, &tri);
        let sphere = Sphere::new(center + common::random_point(&mut rng, 0.1).coords, 0.5);

        assert!(query::intersection_test_triangle_sphere(&tri, &sphere));
    }
}
