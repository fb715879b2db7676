//! Definition of the triangle shape.

use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::Segment;

use na::Unit;

/// A triangle shape.
///
/// Results of the queries of this crate do not depend on the winding order
/// of the vertices. The order is however preserved when deriving edges:
/// the edges are always `AB`, `BC`, then `CA`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from(arr: [Point<Real>; 3]) -> Self {
        Triangle::new(arr[0], arr[1], arr[2])
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The three edges of this triangle: [AB, BC, CA].
    #[inline]
    pub fn edges(&self) -> [Segment; 3] {
        [
            Segment::new(self.a, self.b),
            Segment::new(self.b, self.c),
            Segment::new(self.c, self.a),
        ]
    }

    /// The three edges of this triangle as vectors: [B - A, C - B, A - C].
    #[inline]
    pub fn edge_vectors(&self) -> [Vector<Real>; 3] {
        [self.b - self.a, self.c - self.b, self.a - self.c]
    }

    /// A vector normal of this triangle, scaled by twice its area.
    ///
    /// The vector points such that it is collinear to `AB × BC`.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let [ab, bc, _] = self.edge_vectors();
        ab.cross(&bc)
    }

    /// The unit normal of this triangle, collinear to `AB × BC`.
    ///
    /// Returns `None` if the triangle is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<UnitVector<Real>> {
        if self.is_degenerate() {
            None
        } else {
            Some(Unit::new_normalize(self.scaled_normal()))
        }
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() * 0.5
    }

    /// Returns `true` if this triangle has a (near) zero area.
    ///
    /// This happens if two of its vertices coincide or if all three are collinear.
    /// The test is relative to the edge lengths, so it does not depend on the scale
    /// of the triangle: `‖AB × BC‖ <= ε ‖AB‖ ‖BC‖`, i.e., the sine of the angle at `B`
    /// is at most `DEFAULT_EPSILON`.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        let [ab, bc, _] = self.edge_vectors();
        ab.cross(&bc).norm() <= crate::math::DEFAULT_EPSILON * ab.norm() * bc.norm()
    }
}
