/// Error indicating that a query was given a primitive too degenerate to be meaningful.
///
/// Queries with a well-defined fallback never return this error. This includes every
/// query on a zero-length segment: its closest point is its only point. It is only returned
/// where no sensible answer exists, for example when classifying a point against
/// a triangle with zero area, or when building a plane from collinear points.
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use collide3d::math::Point;
/// use collide3d::query::{self, DegenerateShape};
/// use collide3d::shape::Triangle;
///
/// let flat = Triangle::new(
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(2.0, 0.0, 0.0),
/// );
///
/// assert_eq!(
///     query::point_in_triangle(&Point::origin(), &flat),
///     Err(DegenerateShape::Triangle)
/// );
/// # }
/// ```
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum DegenerateShape {
    /// The three vertices of a triangle are collinear, or two of them coincide.
    #[error("the triangle has a zero area.")]
    Triangle,
}
