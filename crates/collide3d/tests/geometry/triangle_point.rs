use crate::common;
use collide3d::math::Point;
use collide3d::query::{self, DegenerateShape};
use collide3d::shape::Triangle;

fn right_triangle() -> Triangle {
    Triangle::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(4.0, 0.0, 0.0),
        Point::new(0.0, 4.0, 0.0),
    )
}

#[test]
fn point_in_right_triangle() {
    let tri = right_triangle();

    assert_eq!(query::point_in_triangle(&Point::new(1.0, 1.0, 0.0), &tri), Ok(true));
    assert_eq!(query::point_in_triangle(&Point::new(3.0, 3.0, 0.0), &tri), Ok(false));
    assert_eq!(query::point_in_triangle(&Point::new(4.0, 0.0, 0.0), &tri), Ok(true));
}

#[test]
fn point_in_zero_area_triangle_fails() {
    let p = Point::new(1.0, 1.0, 1.0);
    let tri = Triangle::new(p, p, Point::new(2.0, 0.0, 0.0));

    assert_eq!(
        query::triangle_contains_point(&tri, &p),
        Err(DegenerateShape::Triangle)
    );
}

#[test]
fn closest_point_outside_corner() {
    let tri = right_triangle();

    assert_eq!(
        query::closest_point_triangle_point(&tri, &Point::new(-1.0, -1.0, 0.0)),
        Point::new(0.0, 0.0, 0.0)
    );
    assert_eq!(
        query::closest_point_point_triangle(&Point::new(-1.0, -1.0, 0.0), &tri),
        Point::new(0.0, 0.0, 0.0)
    );
}

#[test]
fn closest_point_is_never_farther_than_the_triangle_points() {
    let mut rng = common::rng();

    for _ in 0..200 {
        let tri = common::random_triangle(&mut rng, 5.0);
        let pt = common::random_point(&mut rng, 10.0);
        let closest = query::closest_point_triangle_point(&tri, &pt);
        let best = na::distance(&closest, &pt);

        // The result lies on the triangle.
        let plane_dist = tri.normal().unwrap().dot(&(closest - tri.a));
        assert_relative_eq!(plane_dist, 0.0, epsilon = 1.0e-3);

        for vtx in &tri.vertices() {
            assert!(best <= na::distance(vtx, &pt) + 1.0e-3);
        }

        for _ in 0..20 {
            let sample = common::random_point_on_triangle(&mut rng, &tri);
            assert!(best <= na::distance(&sample, &pt) + 1.0e-3);
        }
    }
}
