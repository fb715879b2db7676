//! Shapes supported by collide3d.
//!
//! All shapes are plain `Copy` values expressed in world-space coordinates.

pub use self::plane::Plane;
pub use self::segment::Segment;
pub use self::sphere::Sphere;
pub use self::triangle::Triangle;

mod plane;
mod segment;
mod sphere;
mod triangle;
