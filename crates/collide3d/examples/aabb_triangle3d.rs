use collide3d::bounding_volume::Aabb;
use collide3d::math::{Point, Vector};
use collide3d::query::{self, details};
use collide3d::shape::Triangle;

fn main() {
    let aabb = Aabb::new(Point::origin(), Vector::new(1.0, 1.0, 1.0));
    let far = Triangle::new(
        Point::new(3.0, 0.0, 0.0),
        Point::new(3.0, 1.0, 0.0),
        Point::new(3.0, 0.0, 1.0),
    );
    let crossing = Triangle::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(2.0, 0.0, 0.0),
        Point::new(0.0, 2.0, 0.0),
    );

    let axis = details::aabb_triangle_find_separating_axis(&aabb, &far);
    println!("Separating axis: {:?}", axis);
    assert!(!query::intersection_test_aabb_triangle(&aabb, &far));
    assert!(query::intersection_test_aabb_triangle(&aabb, &crossing));
}
