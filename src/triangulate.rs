// Copyright 2025 Lars Brubaker
// License: MIT
//
// Ear-clipping triangulation of a simple polygon boundary.
//
// A working list of boundary indices is scanned in order. The first vertex
// whose turn is strictly convex and whose triangle contains no other boundary
// vertex is clipped, and the scan restarts. When three vertices remain they
// form the final triangle. Triangles are emitted as (next, tip, prev) so that
// all of them share one winding in render space.

use tracing::{debug, trace, warn};

use crate::error::{Result, TriangulationError};
use crate::geom::{cross, is_valid_point, point_in_triangle, sub, Point};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What to do when a full scan of the working list finds no ear.
///
/// A stall means the boundary is degenerate, self-intersecting, or wound
/// against the convexity convention.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StallPolicy {
    /// Close with one triangle from the first three remaining entries; the
    /// unfilled tail of the index buffer stays zero.
    #[default]
    ClosingTriangle,
    /// Fan the remaining entries from the first one.
    Fan,
    /// Return [`TriangulationError::Stalled`].
    Fail,
}

/// Triangulation settings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TriangulateOptions {
    pub stall_policy: StallPolicy,
    /// Walk the boundary back to front. Lets a clockwise boundary pass the
    /// convexity test; emitted indices still refer to the caller's order.
    pub reverse_boundary: bool,
}

impl TriangulateOptions {
    #[must_use]
    pub fn with_stall_policy(mut self, stall_policy: StallPolicy) -> Self {
        self.stall_policy = stall_policy;
        self
    }

    #[must_use]
    pub fn with_reverse_boundary(mut self, reverse_boundary: bool) -> Self {
        self.reverse_boundary = reverse_boundary;
        self
    }
}

/// Item at a logical position of a circular list. Negative indices count back
/// from the tail, indices past the end wrap to the head.
///
/// # Panics
///
/// Panics if `list` is empty.
#[inline]
pub fn circular_get<T: Copy>(list: &[T], index: isize) -> T {
    list[index.rem_euclid(list.len() as isize) as usize]
}

/// Checks the preconditions of [`triangulate`] without doing any work.
pub fn validate_boundary(boundary: &[Point]) -> Result<()> {
    if boundary.len() < 3 {
        return Err(TriangulationError::TooFewVertices {
            actual: boundary.len(),
        });
    }
    match boundary.iter().position(|&p| !is_valid_point(p)) {
        Some(index) => Err(TriangulationError::InvalidCoordinate { index }),
        None => Ok(()),
    }
}

/// Triangulates `boundary` with default options.
///
/// Returns `3 * (N - 2)` indices into `boundary`, one triple per triangle.
pub fn triangulate(boundary: &[Point]) -> Result<Vec<u32>> {
    triangulate_with(boundary, &TriangulateOptions::default())
}

/// Triangulates `boundary` with the given options.
pub fn triangulate_with(boundary: &[Point], options: &TriangulateOptions) -> Result<Vec<u32>> {
    let mut indices = Vec::new();
    triangulate_into(boundary, options, &mut indices)?;
    Ok(indices)
}

/// Triangulates into a caller-owned buffer, replacing its contents.
/// On error the buffer is left empty.
pub fn triangulate_into(
    boundary: &[Point],
    options: &TriangulateOptions,
    indices: &mut Vec<u32>,
) -> Result<()> {
    indices.clear();
    validate_boundary(boundary)?;

    let n = boundary.len();
    let expected = 3 * (n - 2);
    indices.reserve(expected);

    let mut working: Vec<usize> = if options.reverse_boundary {
        (0..n).rev().collect()
    } else {
        (0..n).collect()
    };

    let mut stalled = false;
    while working.len() > 3 {
        let Some(i) = find_ear(boundary, &working) else {
            stalled = true;
            break;
        };
        let tip = working[i];
        let prev = circular_get(&working, i as isize - 1);
        let next = circular_get(&working, i as isize + 1);
        trace!(tip, prev, next, "clipped ear");
        push_triangle(indices, next, tip, prev);
        working.remove(i);
    }

    if stalled {
        warn!(
            remaining = working.len(),
            vertices = n,
            policy = ?options.stall_policy,
            "ear clipping stalled; boundary is degenerate, self-intersecting or wound clockwise"
        );
        match options.stall_policy {
            StallPolicy::Fail => {
                indices.clear();
                return Err(TriangulationError::Stalled {
                    remaining: working.len(),
                });
            }
            StallPolicy::Fan => close_with_fan(indices, &working),
            StallPolicy::ClosingTriangle => {
                push_triangle(indices, working[2], working[1], working[0])
            }
        }
    } else {
        push_triangle(indices, working[2], working[1], working[0]);
    }

    // Only the closing-triangle fallback leaves slots unfilled.
    indices.resize(expected, 0);

    debug!(
        vertices = n,
        triangles = n - 2,
        stalled,
        "triangulated boundary"
    );
    Ok(())
}

/// Position in `working` of the first valid ear tip.
fn find_ear(boundary: &[Point], working: &[usize]) -> Option<usize> {
    (0..working.len()).find(|&i| is_ear(boundary, working, i))
}

fn is_ear(boundary: &[Point], working: &[usize], i: usize) -> bool {
    let a = working[i];
    let b = circular_get(working, i as isize - 1);
    let c = circular_get(working, i as isize + 1);
    let (va, vb, vc) = (boundary[a], boundary[b], boundary[c]);

    // Collinear and reflex turns both disqualify the tip.
    if cross(sub(vb, va), sub(vc, va)) >= 0.0 {
        return false;
    }

    // Every original vertex is tested, including ones already clipped.
    !boundary
        .iter()
        .enumerate()
        .any(|(j, &p)| j != a && j != b && j != c && point_in_triangle(p, va, vb, vc))
}

/// Fans `working` from its first entry, matching the closing triangle order.
fn close_with_fan(indices: &mut Vec<u32>, working: &[usize]) {
    let first = working[0];
    for pair in working[1..].windows(2) {
        push_triangle(indices, pair[1], pair[0], first);
    }
}

#[inline]
fn push_triangle(indices: &mut Vec<u32>, a: usize, b: usize, c: usize) {
    indices.extend_from_slice(&[a as u32, b as u32, c as u32]);
}
