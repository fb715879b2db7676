use crate::math::{Point, Real};

/// A sphere, given by its center and its radius.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Sphere {
    /// The center of the sphere.
    pub center: Point<Real>,
    /// The radius of the sphere. Must be positive or zero.
    pub radius: Real,
}

impl Sphere {
    /// Creates a new sphere with the given center and radius.
    #[inline]
    pub fn new(center: Point<Real>, radius: Real) -> Sphere {
        Sphere { center, radius }
    }

    /// Whether `pt` lies strictly inside of this sphere.
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        na::distance_squared(&self.center, pt) < self.radius * self.radius
    }
}
