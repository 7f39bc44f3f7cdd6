// Copyright 2025 Lars Brubaker
// License: MIT

//! Ear-clipping triangulation of simple polygon boundaries.
//!
//! A boundary is an ordered list of 2D points; the last point joins the
//! first. [`triangulate`] turns it into `N - 2` triangles indexing the
//! boundary, [`transform_vertices`] builds the matching positions, UVs and
//! normals, and [`MeshGenerator`] does both while reusing its buffers.
//!
//! ```
//! use boundary_mesh::{triangulate, winding_order, WindingOrder};
//!
//! let square = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
//! assert_eq!(winding_order(&square), WindingOrder::CounterClockwise);
//! assert_eq!(triangulate(&square).unwrap(), vec![1, 0, 3, 3, 2, 1]);
//! ```

pub mod error;
pub mod generator;
pub mod geom;
pub mod triangulate;
pub mod vertices;
pub mod winding;

pub use error::{Result, TriangulationError};
pub use generator::{generate_mesh, MeshGenerator, MeshSink, SurfaceMesh, SurfaceMeshSink};
pub use geom::{Point, Real};
pub use triangulate::{
    circular_get, triangulate, triangulate_into, triangulate_with, validate_boundary,
    StallPolicy, TriangulateOptions,
};
pub use vertices::{flatten, points_from_flat, transform_vertices, MeshVertices, SURFACE_NORMAL};
pub use winding::{winding_order, winding_sum, WindingOrder};
