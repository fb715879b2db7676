use collide3d::math::Point;
use collide3d::query;
use collide3d::shape::{Segment, Triangle};

fn main() {
    let segment = Segment::new(Point::origin(), Point::new(1.0, 0.0, 0.0));
    let (proj, t) = query::closest_point_segment_point_with_param(&segment, &Point::new(2.0, 1.0, 0.0));

    assert_eq!(proj, Point::new(1.0, 0.0, 0.0));
    assert_eq!(t, 1.0);

    let triangle = Triangle::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(4.0, 0.0, 0.0),
        Point::new(0.0, 4.0, 0.0),
    );

    let above = query::closest_point_triangle_point(&triangle, &Point::new(1.0, 1.0, 3.0));
    let outside = query::closest_point_triangle_point(&triangle, &Point::new(-1.0, -1.0, 0.0));

    println!("Closest point to a point above the triangle: {}", above);
    println!("Closest point to a point outside of the triangle: {}", outside);
    assert_eq!(above, Point::new(1.0, 1.0, 0.0));
    assert_eq!(outside, Point::origin());
}
