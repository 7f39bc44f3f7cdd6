// Copyright 2025 Lars Brubaker
// License: MIT
// Shared test utilities for boundary-mesh tests.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::f64::consts::PI;

use boundary_mesh::Point;

/// Counter-clockwise regular polygon.
pub fn regular_polygon(n: usize, radius: f64, center: [f64; 2], phase: f64) -> Vec<Point> {
    (0..n)
        .map(|k| {
            let t = phase + 2.0 * PI * k as f64 / n as f64;
            [
                (center[0] + radius * t.cos()) as f32,
                (center[1] + radius * t.sin()) as f32,
            ]
        })
        .collect()
}

/// Counter-clockwise star alternating between the outer and inner radius.
pub fn star_polygon(points: usize, outer: f64, inner: f64) -> Vec<Point> {
    (0..2 * points)
        .map(|k| {
            let r = if k % 2 == 0 { outer } else { inner };
            let t = PI * k as f64 / points as f64;
            [(r * t.cos()) as f32, (r * t.sin()) as f32]
        })
        .collect()
}

/// Signed area of a triangle, computed in f64; positive when counter-clockwise.
pub fn triangle_area(a: Point, b: Point, c: Point) -> f64 {
    let (ax, ay) = (a[0] as f64, a[1] as f64);
    let (bx, by) = (b[0] as f64, b[1] as f64);
    let (cx, cy) = (c[0] as f64, c[1] as f64);
    0.5 * ((bx - ax) * (cy - ay) - (cx - ax) * (by - ay))
}

/// Signed areas of every emitted triangle.
pub fn triangle_areas(boundary: &[Point], indices: &[u32]) -> Vec<f64> {
    indices
        .chunks(3)
        .map(|t| {
            triangle_area(
                boundary[t[0] as usize],
                boundary[t[1] as usize],
                boundary[t[2] as usize],
            )
        })
        .collect()
}

/// Sum of absolute triangle areas.
pub fn total_area(boundary: &[Point], indices: &[u32]) -> f64 {
    triangle_areas(boundary, indices).iter().map(|a| a.abs()).sum()
}

/// Shoelace area of a closed polygon; positive when counter-clockwise.
pub fn polygon_signed_area(boundary: &[Point]) -> f64 {
    let n = boundary.len();
    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += boundary[i][0] as f64 * boundary[j][1] as f64;
        area -= boundary[j][0] as f64 * boundary[i][1] as f64;
    }
    area * 0.5
}

/// Index buffer length is 3 * (N - 2) and every index is in range.
pub fn verify_valid_indices(boundary: &[Point], indices: &[u32]) {
    let n = boundary.len();
    assert_eq!(
        indices.len(),
        3 * (n - 2),
        "expected {} indices for {} vertices",
        3 * (n - 2),
        n
    );
    for (i, &idx) in indices.iter().enumerate() {
        assert!(
            (idx as usize) < n,
            "index[{}] = {} out of range (vertex_count={})",
            i,
            idx,
            n
        );
    }
}

/// Every boundary vertex appears in at least one triangle.
pub fn verify_covers_all(boundary: &[Point], indices: &[u32]) {
    let used: BTreeSet<u32> = indices.iter().copied().collect();
    let all: BTreeSet<u32> = (0..boundary.len() as u32).collect();
    assert_eq!(used, all, "not every vertex is referenced");
}

/// No triangle repeats a vertex.
pub fn verify_no_repeated_corners(indices: &[u32]) {
    for (i, t) in indices.chunks(3).enumerate() {
        assert!(
            t[0] != t[1] && t[1] != t[2] && t[0] != t[2],
            "triangle {} repeats a corner: {:?}",
            i,
            t
        );
    }
}
