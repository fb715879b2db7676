//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector};

/// An Axis-Aligned Bounding Box (AABB).
///
/// The box is stored as a center and half-extents and covers the region
/// `[center - half_extents, center + half_extents]`. Its edges are always
/// parallel to the coordinate axes.
///
/// # Invariant
///
/// Each component of `half_extents` must be positive or zero.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use collide3d::bounding_volume::Aabb;
/// use collide3d::math::{Point, Vector};
///
/// // Create a 10x6x8 box centered at (5, 0, 0)
/// let aabb = Aabb::new(Point::new(5.0, 0.0, 0.0), Vector::new(5.0, 3.0, 4.0));
///
/// assert_eq!(aabb.mins(), Point::new(0.0, -3.0, -4.0));
/// assert_eq!(aabb.maxs(), Point::new(10.0, 3.0, 4.0));
/// assert!(aabb.contains_local_point(&Point::new(1.0, 2.0, 3.0)));
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The center of the box.
    pub center: Point<Real>,
    /// Half the dimensions of the box along each axis.
    pub half_extents: Vector<Real>,
}

impl Aabb {
    /// Creates a new AABB from its center and half-extents.
    #[inline]
    pub fn new(center: Point<Real>, half_extents: Vector<Real>) -> Aabb {
        Aabb {
            center,
            half_extents,
        }
    }

    /// Creates a new AABB from its minimum and maximum corners.
    ///
    /// Each component of `mins` should be ≤ the corresponding component of `maxs`.
    #[inline]
    pub fn from_mins_maxs(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb {
            center: na::center(&mins, &maxs),
            half_extents: (maxs - mins) * 0.5,
        }
    }

    /// Creates the smallest AABB enclosing all the given points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<'a, I>(pts: I) -> Option<Aabb>
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        let mut it = pts.into_iter();
        let first = it.next()?;
        let (mins, maxs) = it.fold((*first, *first), |(mins, maxs), pt| {
            (mins.inf(pt), maxs.sup(pt))
        });

        Some(Self::from_mins_maxs(mins, maxs))
    }

    /// The point with the smallest coordinates of this box.
    #[inline]
    pub fn mins(&self) -> Point<Real> {
        self.center - self.half_extents
    }

    /// The point with the largest coordinates of this box.
    #[inline]
    pub fn maxs(&self) -> Point<Real> {
        self.center + self.half_extents
    }

    /// The full dimensions of this box along each axis.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.half_extents * 2.0
    }

    /// Whether `pt` lies inside of this box, boundary included.
    #[inline]
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        let d = pt - self.center;
        (0..3).all(|i| d[i].abs() <= self.half_extents[i])
    }

    /// Whether the two boxes overlap, touching boxes included.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        let d = other.center - self.center;
        let limit = self.half_extents + other.half_extents;
        (0..3).all(|i| d[i].abs() <= limit[i])
    }
}
