// Copyright 2025 Lars Brubaker
// License: MIT
//
// Pure geometric primitives on 2D boundary points.
// All predicates use strict comparisons: collinear or touching configurations
// are never treated as convex or inside.

pub type Real = f32;

/// A boundary vertex in input space.
pub type Point = [Real; 2];

/// Returns `b - a`.
#[inline]
pub fn sub(b: Point, a: Point) -> Point {
    [b[0] - a[0], b[1] - a[1]]
}

/// 2D cross product (z component of the 3D cross product).
#[inline]
pub fn cross(u: Point, v: Point) -> Real {
    u[0] * v[1] - u[1] * v[0]
}

/// Returns true if `p` lies strictly to the right of all three directed edges
/// `a->b`, `b->c` and `c->a`. Points on an edge or vertex are outside.
#[inline]
pub fn point_in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    cross(sub(b, a), sub(p, a)) < 0.0
        && cross(sub(c, b), sub(p, b)) < 0.0
        && cross(sub(a, c), sub(p, c)) < 0.0
}

/// Signed area of triangle (a, b, c); positive when counter-clockwise.
#[inline]
pub fn triangle_signed_area(a: Point, b: Point, c: Point) -> Real {
    0.5 * cross(sub(b, a), sub(c, a))
}

/// Coordinates must be finite for the predicates above to be meaningful.
#[inline]
pub fn is_valid_point(p: Point) -> bool {
    p[0].is_finite() && p[1].is_finite()
}
