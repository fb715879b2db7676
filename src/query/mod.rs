//! Non-persistent geometric queries.
//!
//! # General cases
//! The functions of this module are pure: they only read their arguments and their
//! result depends on nothing else. They all have the form `[operation]_[shape1]_[shape2]()`
//! where:
//!
//! * `[operation]` can be `closest_point`, `intersection_test`, or a classification
//!   like `point_in_triangle`.
//! * `[shape1]` and `[shape2]` name the types of the arguments, in order.
//!
//! Whenever an operation is symmetric, both argument orders are provided. One of them
//! carries the implementation and the other only swaps its arguments.
//!
//! # Tolerances
//! Each query keeps its own tolerance policy:
//!
//! * [`point_on_line`] accepts points within [`POINT_ON_LINE_EPSILON`](crate::math::POINT_ON_LINE_EPSILON).
//! * [`point_in_triangle`] uses exact sign tests and accepts points on the boundary.
//! * [`intersection_test_triangle_sphere`] uses a strict comparison: tangent shapes don't intersect.
//! * [`intersection_test_aabb_triangle`] considers touching shapes as intersecting.

pub use self::error::DegenerateShape;
pub use self::intersection_test::*;
pub use self::point::*;
pub use self::sat::AabbTriangleAxis;

mod error;
mod intersection_test;
pub mod point;
pub mod sat;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::intersection_test::*;
    pub use super::point::*;
    pub use super::sat::*;
}
