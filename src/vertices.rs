// Copyright 2025 Lars Brubaker
// License: MIT
//
// Per-vertex attribute generation and flat buffer conversion.

use crate::error::{Result, TriangulationError};
use crate::geom::{Point, Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Normal shared by every generated vertex; the surface is planar.
pub const SURFACE_NORMAL: [Real; 3] = [0.0, 0.0, 1.0];

/// Attribute arrays for a planar surface, one entry per boundary vertex.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshVertices {
    pub positions: Vec<[Real; 3]>,
    pub uvs: Vec<[Real; 2]>,
    pub normals: Vec<[Real; 3]>,
}

impl MeshVertices {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn clear(&mut self) {
        self.positions.clear();
        self.uvs.clear();
        self.normals.clear();
    }

    /// Appends the converted attributes of `boundary`.
    pub(crate) fn extend_from_boundary(&mut self, boundary: &[Point]) {
        self.positions.reserve(boundary.len());
        self.uvs.reserve(boundary.len());
        self.normals.reserve(boundary.len());
        for &p in boundary {
            let position = to_render_space(p);
            self.positions.push(position);
            self.uvs.push([position[0], position[1]]);
            self.normals.push(SURFACE_NORMAL);
        }
    }
}

/// Mirrors the x axis to switch coordinate handedness and lifts to z = 0.
#[inline]
pub fn to_render_space(p: Point) -> [Real; 3] {
    [-p[0], p[1], 0.0]
}

/// Builds positions, UVs and normals for every boundary vertex.
///
/// Accepts any length, including zero; it never fails.
pub fn transform_vertices(boundary: &[Point]) -> MeshVertices {
    let mut out = MeshVertices::default();
    out.extend_from_boundary(boundary);
    out
}

/// Parses a flat `[x0, y0, x1, y1, ...]` buffer into points.
pub fn points_from_flat(flat: &[Real]) -> Result<Vec<Point>> {
    if flat.len() % 2 != 0 {
        return Err(TriangulationError::MalformedBuffer { len: flat.len() });
    }
    Ok(flat.chunks_exact(2).map(|c| [c[0], c[1]]).collect())
}

/// Flattens fixed-size coordinate arrays into one contiguous buffer.
pub fn flatten<const N: usize>(items: &[[Real; N]]) -> Vec<Real> {
    items.iter().flat_map(|item| item.iter().copied()).collect()
}
