/*!
collide3d
========

**collide3d** is a small narrow-phase collision detection library for 3D
primitives, written with the rust programming language.

It answers "do these two shapes touch?" and "what is the closest point?" for
points, segments, planes, triangles, spheres and axis-aligned bounding boxes.
Every query is a pure function of its inputs.

```
# #[cfg(feature = "f32")] {
use collide3d::bounding_volume::Aabb;
use collide3d::math::{Point, Vector};
use collide3d::query;
use collide3d::shape::Triangle;

let aabb = Aabb::new(Point::origin(), Vector::new(1.0, 1.0, 1.0));
let triangle = Triangle::new(
    Point::new(0.0, 0.0, 0.0),
    Point::new(2.0, 0.0, 0.0),
    Point::new(0.0, 2.0, 0.0),
);
assert!(query::intersection_test_aabb_triangle(&aabb, &triangle));
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive. Depend on `collide3d-f64` for double precision.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod query;
pub mod shape;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, UnitVector3, Vector3};

    /// The default tolerance used for detecting degenerate geometry.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The absolute tolerance of [`point_on_line`](crate::query::point_on_line).
    pub const POINT_ON_LINE_EPSILON: Real = 1.0e-4;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;
}
