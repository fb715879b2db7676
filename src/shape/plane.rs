//! Definition of the plane shape.

use crate::math::{Point, Real, UnitVector};
use crate::query::DegenerateShape;
use crate::shape::Triangle;

/// An infinite plane: the set of points `x` such that `normal · x = bias`.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Plane {
    /// The plane's unit normal.
    pub normal: UnitVector<Real>,
    /// The signed distance from the origin to the plane, along `normal`.
    pub bias: Real,
}

impl Plane {
    /// Builds a new plane from its normal and its signed distance to the origin.
    #[inline]
    pub fn new(normal: UnitVector<Real>, bias: Real) -> Plane {
        Plane { normal, bias }
    }

    /// Builds the plane passing through three points.
    ///
    /// The normal is collinear to `(b - a) × (c - b)`. Fails if the points are
    /// collinear, with the same criterion as [`Triangle::is_degenerate`].
    pub fn from_points(
        a: &Point<Real>,
        b: &Point<Real>,
        c: &Point<Real>,
    ) -> Result<Plane, DegenerateShape> {
        let normal = Triangle::new(*a, *b, *c)
            .normal()
            .ok_or(DegenerateShape::Triangle)?;
        let bias = normal.dot(&a.coords);
        Ok(Plane { normal, bias })
    }

    /// Builds the plane containing a triangle.
    #[inline]
    pub fn from_triangle(triangle: &Triangle) -> Result<Plane, DegenerateShape> {
        Self::from_points(&triangle.a, &triangle.b, &triangle.c)
    }

    /// The signed distance between `pt` and this plane.
    ///
    /// It is positive on the side the normal points toward.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) - self.bias
    }

    /// Whether `pt` lies on this plane, up to a relative tolerance.
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        relative_eq!(self.normal.dot(&pt.coords), self.bias)
    }
}
