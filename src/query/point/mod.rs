//! Point inclusion and projection.

pub use self::point_plane::{closest_point_plane_point, closest_point_point_plane};
pub use self::point_segment::{
    closest_point_point_segment, closest_point_segment_point,
    closest_point_segment_point_with_param, line_contains_point, point_on_line,
};
pub use self::point_triangle::{
    closest_point_point_triangle, closest_point_triangle_point, point_in_triangle,
    triangle_contains_point,
};

mod point_plane;
mod point_segment;
mod point_triangle;
