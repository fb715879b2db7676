//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis onto
//! which their projections do not overlap. For polyhedral shapes, only a finite set
//! of candidate axes needs to be tested:
//!
//! - the face normals of each shape,
//! - the cross products between the edge directions of both shapes.
//!
//! For an AABB and a triangle this gives 3 box face normals, 1 triangle normal, and
//! 3 × 3 edge cross products: 13 axes in total. Axes are never normalized since
//! scaling an axis by a positive factor scales both projections the same way.

pub use self::sat_aabb_triangle::*;

mod sat_aabb_triangle;
