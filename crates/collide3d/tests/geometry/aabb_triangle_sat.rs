use crate::common;
use collide3d::bounding_volume::Aabb;
use collide3d::math::{Point, Vector};
use collide3d::query::{self, AabbTriangleAxis};
use collide3d::shape::Triangle;

fn unit_box() -> Aabb {
    Aabb::new(Point::origin(), Vector::new(1.0, 1.0, 1.0))
}

#[test]
fn triangle_beyond_box_face() {
    let tri = Triangle::new(
        Point::new(3.0, 0.0, 0.0),
        Point::new(3.0, 1.0, 0.0),
        Point::new(3.0, 0.0, 1.0),
    );

    assert_eq!(
        query::details::aabb_triangle_find_separating_axis(&unit_box(), &tri),
        Some(AabbTriangleAxis::BoxFace(0))
    );
    assert!(!query::intersection_test_aabb_triangle(&unit_box(), &tri));
    assert!(!query::intersection_test_triangle_aabb(&tri, &unit_box()));
}

#[test]
fn triangle_straddling_box() {
    let tri = Triangle::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(2.0, 0.0, 0.0),
        Point::new(0.0, 2.0, 0.0),
    );

    assert!(query::intersection_test_aabb_triangle(&unit_box(), &tri));
    assert!(query::intersection_test_triangle_aabb(&tri, &unit_box()));
}

#[test]
fn large_triangle_crossing_small_box() {
    // None of the triangle vertices is inside of the box.
    let aabb = Aabb::new(Point::new(10.0, 10.0, 10.0), Vector::new(0.5, 0.5, 0.5));
    let tri = Triangle::new(
        Point::new(0.0, 0.0, 10.0),
        Point::new(30.0, 0.0, 10.0),
        Point::new(0.0, 30.0, 10.0),
    );

    assert!(query::intersection_test_aabb_triangle(&aabb, &tri));
}

#[test]
fn sat_agrees_with_sampled_points() {
    let mut rng = common::rng();
    let mut overlaps = 0;
    let mut separated = 0;

    for _ in 0..500 {
        let aabb = Aabb::new(
            common::random_point(&mut rng, 3.0),
            Vector::new(0.5, 1.0, 1.5),
        );
        let tri = common::random_triangle(&mut rng, 4.0);
        let result = query::intersection_test_aabb_triangle(&aabb, &tri);

        // A point of the triangle well inside of the box implies an overlap.
        let shrunk = Aabb::new(aabb.center, aabb.half_extents * 0.99);
        for _ in 0..50 {
            let sample = common::random_point_on_triangle(&mut rng, &tri);
            if shrunk.contains_local_point(&sample) {
                assert!(result, "{:?} {:?}", aabb, tri);
            }
        }

        // Disjoint bounding boxes imply a separation.
        let tri_aabb = Aabb::from_points(&tri.vertices()).unwrap();
        let grown = Aabb::new(aabb.center, aabb.half_extents * 1.01);
        if !grown.intersects(&tri_aabb) {
            assert!(!result, "{:?} {:?}", aabb, tri);
        }

        if result {
            overlaps += 1;
        } else {
            separated += 1;
        }
    }

    assert!(overlaps > 0 && separated > 0);
}
