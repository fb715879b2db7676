use collide3d::math::{Point, Real};
use collide3d::shape::Triangle;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

pub fn random_point(rng: &mut StdRng, range: Real) -> Point<Real> {
    Point::new(
        rng.gen_range(-range..range),
        rng.gen_range(-range..range),
        rng.gen_range(-range..range),
    )
}

/// A random triangle that is far from degenerate.
pub fn random_triangle(rng: &mut StdRng, range: Real) -> Triangle {
    loop {
        let tri = Triangle::new(
            random_point(rng, range),
            random_point(rng, range),
            random_point(rng, range),
        );

        if tri.area() > 0.1 {
            return tri;
        }
    }
}

/// A random point of the triangle, picked with barycentric coordinates.
pub fn random_point_on_triangle(rng: &mut StdRng, tri: &Triangle) -> Point<Real> {
    let mut u: Real = rng.gen_range(0.0..1.0);
    let mut v: Real = rng.gen_range(0.0..1.0);

    if u + v > 1.0 {
        u = 1.0 - u;
        v = 1.0 - v;
    }

    tri.a + (tri.b - tri.a) * u + (tri.c - tri.a) * v
}
