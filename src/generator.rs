// Copyright 2025 Lars Brubaker
// License: MIT
//
// Stateful mesh generation front end and the hand-off to an external
// mesh builder.

use crate::error::Result;
use crate::geom::{Point, Real};
use crate::triangulate::{triangulate_into, TriangulateOptions};
use crate::vertices::{points_from_flat, MeshVertices};

/// Receives generated arrays and assembles a renderable surface from them.
///
/// Bounds, GPU upload and any other engine work belong to the implementor.
pub trait MeshSink {
    type Handle;

    fn build(
        &mut self,
        positions: &[[Real; 3]],
        uvs: &[[Real; 2]],
        normals: &[[Real; 3]],
        indices: &[u32],
    ) -> Self::Handle;
}

/// Owned copy of a generated surface.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurfaceMesh {
    pub vertices: MeshVertices,
    pub indices: Vec<u32>,
}

impl SurfaceMesh {
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

/// Sink that just copies the arrays into a [`SurfaceMesh`].
#[derive(Copy, Clone, Debug, Default)]
pub struct SurfaceMeshSink;

impl MeshSink for SurfaceMeshSink {
    type Handle = SurfaceMesh;

    fn build(
        &mut self,
        positions: &[[Real; 3]],
        uvs: &[[Real; 2]],
        normals: &[[Real; 3]],
        indices: &[u32],
    ) -> SurfaceMesh {
        SurfaceMesh {
            vertices: MeshVertices {
                positions: positions.to_vec(),
                uvs: uvs.to_vec(),
                normals: normals.to_vec(),
            },
            indices: indices.to_vec(),
        }
    }
}

/// Generates surface meshes from boundaries, reusing its buffers between calls.
#[derive(Clone, Debug, Default)]
pub struct MeshGenerator {
    options: TriangulateOptions,
    vertices: MeshVertices,
    indices: Vec<u32>,
}

impl MeshGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TriangulateOptions) -> Self {
        MeshGenerator {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &TriangulateOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: TriangulateOptions) {
        self.options = options;
    }

    /// Replaces the current output with the mesh for `boundary`.
    /// On error the output is left empty.
    pub fn generate(&mut self, boundary: &[Point]) -> Result<()> {
        self.vertices.clear();
        self.indices.clear();
        triangulate_into(boundary, &self.options, &mut self.indices)?;
        self.vertices.extend_from_boundary(boundary);
        Ok(())
    }

    /// Same as [`generate`](Self::generate) for a flat `[x0, y0, ...]` buffer.
    pub fn generate_flat(&mut self, flat: &[Real]) -> Result<()> {
        match points_from_flat(flat) {
            Ok(points) => self.generate(&points),
            Err(err) => {
                self.vertices.clear();
                self.indices.clear();
                Err(err)
            }
        }
    }

    pub fn positions(&self) -> &[[Real; 3]] {
        &self.vertices.positions
    }

    pub fn uvs(&self) -> &[[Real; 2]] {
        &self.vertices.uvs
    }

    pub fn normals(&self) -> &[[Real; 3]] {
        &self.vertices.normals
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Hands the current output to `sink`.
    pub fn build<S: MeshSink>(&self, sink: &mut S) -> S::Handle {
        sink.build(
            &self.vertices.positions,
            &self.vertices.uvs,
            &self.vertices.normals,
            &self.indices,
        )
    }
}

/// One-shot generation: triangulate `boundary` and hand the result to `sink`.
pub fn generate_mesh<S: MeshSink>(
    boundary: &[Point],
    options: &TriangulateOptions,
    sink: &mut S,
) -> Result<S::Handle> {
    let mut generator = MeshGenerator::with_options(*options);
    generator.generate(boundary)?;
    Ok(generator.build(sink))
}
