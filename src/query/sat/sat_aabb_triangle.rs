use crate::bounding_volume::Aabb;
use crate::math::{Real, Vector};
use crate::shape::Triangle;

/// One of the 13 candidate separating axes between an AABB and a triangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AabbTriangleAxis {
    /// The normal of the AABB faces orthogonal to the coordinate axis `i` (0 = X, 1 = Y, 2 = Z).
    BoxFace(usize),
    /// The normal of the triangle, `AB × BC`.
    TriangleFace,
    /// The cross product between the coordinate axis `box_axis` and the triangle edge `edge`.
    ///
    /// Edges are numbered `0 = AB`, `1 = BC`, `2 = CA`.
    EdgeCross {
        /// The coordinate axis (0 = X, 1 = Y, 2 = Z).
        box_axis: usize,
        /// The triangle edge (0 = AB, 1 = BC, 2 = CA).
        edge: usize,
    },
}

impl AabbTriangleAxis {
    /// All the candidate axes, in the order they are tested.
    pub const ALL: [AabbTriangleAxis; 13] = [
        AabbTriangleAxis::BoxFace(0),
        AabbTriangleAxis::BoxFace(1),
        AabbTriangleAxis::BoxFace(2),
        AabbTriangleAxis::TriangleFace,
        AabbTriangleAxis::EdgeCross { box_axis: 0, edge: 0 },
        AabbTriangleAxis::EdgeCross { box_axis: 0, edge: 1 },
        AabbTriangleAxis::EdgeCross { box_axis: 0, edge: 2 },
        AabbTriangleAxis::EdgeCross { box_axis: 1, edge: 0 },
        AabbTriangleAxis::EdgeCross { box_axis: 1, edge: 1 },
        AabbTriangleAxis::EdgeCross { box_axis: 1, edge: 2 },
        AabbTriangleAxis::EdgeCross { box_axis: 2, edge: 0 },
        AabbTriangleAxis::EdgeCross { box_axis: 2, edge: 1 },
        AabbTriangleAxis::EdgeCross { box_axis: 2, edge: 2 },
    ];

    /// The (non-normalized) direction of this axis for the given triangle.
    ///
    /// Only the direction of the triangle matters, so the triangle does not need to be
    /// expressed relative to the AABB. The result is the zero vector if the axis is
    /// degenerate, e.g., if an edge is parallel to the coordinate axis it is crossed with.
    pub fn vector(&self, triangle: &Triangle) -> Vector<Real> {
        match *self {
            AabbTriangleAxis::BoxFace(i) => Vector::ith(i, 1.0),
            AabbTriangleAxis::TriangleFace => triangle.scaled_normal(),
            AabbTriangleAxis::EdgeCross { box_axis, edge } => {
                Vector::<Real>::ith(box_axis, 1.0).cross(&triangle.edge_vectors()[edge])
            }
        }
    }
}

/// Tests if `axis` separates `triangle` from an AABB centered at the origin.
///
/// The triangle must already be expressed relative to the AABB center. The axis does
/// not have to be normalized. A zero axis never separates.
#[inline]
pub fn aabb_triangle_axis_separates(
    half_extents: &Vector<Real>,
    triangle: &Triangle,
    axis: &Vector<Real>,
) -> bool {
    if axis.norm_squared() == 0.0 {
        return false;
    }

    let p0 = triangle.a.coords.dot(axis);
    let p1 = triangle.b.coords.dot(axis);
    let p2 = triangle.c.coords.dot(axis);

    // We only need the projected half-length of the box since it is centered at the origin.
    let r = half_extents.x * axis.x.abs()
        + half_extents.y * axis.y.abs()
        + half_extents.z * axis.z.abs();

    let max = p0.max(p1).max(p2);
    let min = p0.min(p1).min(p2);

    // Either the whole triangle is below `-r`, or it is above `r`.
    (-max).max(min) > r
}

/// Finds the first axis separating `aabb` from `triangle`, if any.
///
/// The 13 axes of [`AabbTriangleAxis::ALL`] are tested in order and the search stops
/// at the first separating one. Returns `None` if the shapes overlap. Shapes
/// that are only touching are considered overlapping.
pub fn aabb_triangle_find_separating_axis(
    aabb: &Aabb,
    triangle: &Triangle,
) -> Option<AabbTriangleAxis> {
    let shift = aabb.center.coords;
    let local = Triangle::new(triangle.a - shift, triangle.b - shift, triangle.c - shift);

    AabbTriangleAxis::ALL.into_iter().find(|axis| {
        aabb_triangle_axis_separates(&aabb.half_extents, &local, &axis.vector(&local))
    })
}
