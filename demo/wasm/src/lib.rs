// Copyright 2025 Lars Brubaker
// WASM bindings for boundary-mesh

use boundary_mesh::{
    flatten, points_from_flat, triangulate, winding_order, MeshGenerator, StallPolicy,
    WindingOrder,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main_js() {
    console_error_panic_hook::set_once();
}

/// A mesh generator that keeps the last generated surface for readback.
#[wasm_bindgen]
pub struct BoundaryMeshJs {
    inner: MeshGenerator,
}

#[wasm_bindgen]
impl BoundaryMeshJs {
    #[wasm_bindgen(constructor)]
    pub fn new() -> BoundaryMeshJs {
        BoundaryMeshJs {
            inner: MeshGenerator::new(),
        }
    }

    /// 0 = closing triangle, 1 = fan, 2 = fail.
    pub fn set_stall_policy(&mut self, policy: u32) {
        let policy = match policy {
            0 => StallPolicy::ClosingTriangle,
            1 => StallPolicy::Fan,
            2 => StallPolicy::Fail,
            _ => return,
        };
        let options = self.inner.options().with_stall_policy(policy);
        self.inner.set_options(options);
    }

    pub fn set_reverse_boundary(&mut self, value: bool) {
        let options = self.inner.options().with_reverse_boundary(value);
        self.inner.set_options(options);
    }

    /// Generate from a flat [x0,y0, x1,y1, ...] Float32Array.
    pub fn generate(&mut self, boundary: &[f32]) -> Result<(), JsError> {
        self.inner
            .generate_flat(boundary)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    pub fn vertex_count(&self) -> u32 {
        self.inner.vertex_count() as u32
    }

    pub fn triangle_count(&self) -> u32 {
        self.inner.triangle_count() as u32
    }

    /// Flat [x0,y0,z0, ...] positions in render space.
    pub fn get_positions(&self) -> Vec<f32> {
        flatten(self.inner.positions())
    }

    pub fn get_uvs(&self) -> Vec<f32> {
        flatten(self.inner.uvs())
    }

    pub fn get_normals(&self) -> Vec<f32> {
        flatten(self.inner.normals())
    }

    /// Flat triangle vertex-index triples [i0,i1,i2, ...].
    pub fn get_indices(&self) -> Vec<u32> {
        self.inner.indices().to_vec()
    }
}

impl Default for BoundaryMeshJs {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience: triangle indices for a flat boundary, empty on invalid input.
#[wasm_bindgen]
pub fn triangulate_boundary(boundary: &[f32]) -> Vec<u32> {
    points_from_flat(boundary)
        .and_then(|points| triangulate(&points))
        .unwrap_or_default()
}

/// 0 = clockwise, 1 = counter-clockwise. An odd trailing value is ignored.
#[wasm_bindgen]
pub fn boundary_winding(boundary: &[f32]) -> u32 {
    let points: Vec<[f32; 2]> = boundary.chunks_exact(2).map(|c| [c[0], c[1]]).collect();
    match winding_order(&points) {
        WindingOrder::Clockwise => 0,
        WindingOrder::CounterClockwise => 1,
    }
}

