//! Definition of the segment shape.

use crate::math::{Point, Real, Vector};

/// A bounded line segment going from `a` to `b`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    #[inline]
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The length of this segment.
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// Returns `true` if both endpoints of this segment are equal.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.scaled_direction().norm_squared() == 0.0
    }

    /// The point `a + t * (b - a)`.
    ///
    /// `t` is not clamped, so values outside of `[0, 1]` lie on the segment's
    /// supporting line but outside of the segment itself.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.a + self.scaled_direction() * t
    }
}

impl From<[Point<Real>; 2]> for Segment {
    fn from(arr: [Point<Real>; 2]) -> Self {
        Segment::new(arr[0], arr[1])
    }
}
