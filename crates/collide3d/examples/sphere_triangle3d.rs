use collide3d::math::Point;
use collide3d::query;
use collide3d::shape::{Sphere, Triangle};

fn main() {
    let triangle = Triangle::new(
        Point::new(-1.0, -1.0, 0.0),
        Point::new(1.0, -1.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    );
    let tangent = Sphere::new(Point::new(0.0, 0.0, 5.0), 5.0);
    let sinking = Sphere::new(Point::new(0.0, 0.0, 5.0), 5.0001);

    // A tangent sphere does not intersect.
    assert!(!query::intersection_test_sphere_triangle(&tangent, &triangle));
    assert!(query::intersection_test_sphere_triangle(&sinking, &triangle));
}
