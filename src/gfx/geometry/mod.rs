//! # Procedural Geometry Generation
//!
//! This module generates icosphere meshes procedurally, ready for GPU upload
//! without any external model files.
//!
//! ## Building Blocks
//!
//! - **Icosahedron** ([`icosahedron`]) - the 12 seed vertices
//! - **Flat shading** ([`flat`]) - unshared vertices, one normal per face
//! - **Smooth shading** ([`smooth`]) - welded vertices with per-vertex normals
//! - **Seams** ([`seams`]) - which texture coordinates may be welded
//! - **Icosphere** ([`icosphere`]) - parameters and the stateful generator
//!
//! ## Usage
//!
//! ```rust
//! use meshgen::gfx::geometry::Icosphere;
//!
//! // 80 triangles, smooth shaded
//! let sphere = Icosphere::new(1.0, 2, true);
//!
//! let geometry = sphere.geometry();
//! assert_eq!(geometry.triangle_count(), 80);
//!
//! // One 32 byte record per vertex for the vertex buffer
//! let bytes: &[u8] = geometry.interleaved_bytes();
//! assert_eq!(bytes.len(), geometry.vertex_count() * 32);
//! ```

pub mod atlas;
pub mod flat;
pub mod icosahedron;
pub mod icosphere;
pub mod math;
pub mod seams;
pub mod smooth;
pub mod vertex;

pub use atlas::TextureAtlas;
pub use icosphere::{build_icosphere, Icosphere, IcosphereParams, MAX_SUBDIVISION};
pub use vertex::Vertex3D;

use std::mem::size_of;

/// Generated mesh data ready for GPU upload.
///
/// Positions, normals and texture coordinates are index-aligned: entry `i` of
/// each belongs to vertex `i`. The interleaved records are derived from those
/// three arrays and are rebuilt by every operation that changes them.
///
/// A `GeometryData` is never modified after it is built; operations such as
/// [`reversed_normals`](Self::reversed_normals) return a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryData {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    tex_coords: Vec<[f32; 2]>,
    /// Triangle indices (counter-clockwise winding)
    indices: Vec<u32>,
    /// Wireframe edges, two indices per line
    line_indices: Vec<u32>,
    interleaved: Vec<Vertex3D>,
}

impl GeometryData {
    /// Create a new empty geometry data structure
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            tex_coords: Vec::new(),
            indices: Vec::new(),
            line_indices: Vec::new(),
            interleaved: Vec::new(),
        }
    }

    // -- builder interface used by the shape builders --

    /// Appends one vertex and returns its index.
    pub(crate) fn push_vertex(&mut self, position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        self.tex_coords.push(tex_coord);
        index
    }

    pub(crate) fn push_triangle(&mut self, i1: u32, i2: u32, i3: u32) {
        self.indices.extend_from_slice(&[i1, i2, i3]);
    }

    pub(crate) fn push_line(&mut self, i1: u32, i2: u32) {
        self.line_indices.extend_from_slice(&[i1, i2]);
    }

    /// Drops all triangles and lines but keeps the vertices.
    pub(crate) fn clear_topology(&mut self) {
        self.indices.clear();
        self.line_indices.clear();
    }

    /// Packs positions, normals and texture coordinates into interleaved
    /// records. Must be called once the vertex arrays are final.
    pub(crate) fn finish(mut self) -> Self {
        self.build_interleaved();
        self
    }

    fn build_interleaved(&mut self) {
        self.interleaved = self
            .positions
            .iter()
            .zip(&self.normals)
            .zip(&self.tex_coords)
            .map(|((&position, &normal), &tex_coord)| Vertex3D::new(position, normal, tex_coord))
            .collect();
    }

    // -- derived geometry --

    /// Returns a copy with every normal flipped and every triangle wound the
    /// other way, for viewing the surface from the inside.
    ///
    /// Applying it twice restores the original geometry.
    pub fn reversed_normals(&self) -> Self {
        let mut reversed = self.clone();

        for n in &mut reversed.normals {
            *n = [-n[0], -n[1], -n[2]];
        }
        for v in &mut reversed.interleaved {
            v.normal = [-v.normal[0], -v.normal[1], -v.normal[2]];
        }
        for tri in reversed.indices.chunks_exact_mut(3) {
            tri.swap(0, 2);
        }

        reversed
    }

    /// Returns a copy with every position multiplied by `factor`.
    ///
    /// Normals, texture coordinates and topology are unchanged.
    pub fn rescaled(&self, factor: f32) -> Self {
        let mut scaled = self.clone();

        for p in &mut scaled.positions {
            *p = [p[0] * factor, p[1] * factor, p[2] * factor];
        }
        for v in &mut scaled.interleaved {
            let p = v.position;
            v.position = [p[0] * factor, p[1] * factor, p[2] * factor];
        }

        scaled
    }

    // -- array access --

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    pub fn tex_coords(&self) -> &[[f32; 2]] {
        &self.tex_coords
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn line_indices(&self) -> &[u32] {
        &self.line_indices
    }

    pub fn interleaved(&self) -> &[Vertex3D] {
        &self.interleaved
    }

    /// Positions as a flat `x, y, z, x, y, z, ...` slice.
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Normals as a flat `x, y, z, x, y, z, ...` slice.
    pub fn normals_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Texture coordinates as a flat `s, t, s, t, ...` slice.
    pub fn tex_coords_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.tex_coords)
    }

    /// Interleaved records as a flat slice, 8 floats per vertex.
    pub fn interleaved_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.interleaved)
    }

    /// Interleaved records as raw bytes for a vertex buffer upload.
    pub fn interleaved_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.interleaved)
    }

    /// Triangle indices as raw bytes for an index buffer upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Line indices as raw bytes for an index buffer upload.
    pub fn line_index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.line_indices)
    }

    // -- counts and sizes --

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn normal_count(&self) -> usize {
        self.normals.len()
    }

    pub fn tex_coord_count(&self) -> usize {
        self.tex_coords.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn line_index_count(&self) -> usize {
        self.line_indices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Size of the position array in bytes.
    pub fn vertex_size(&self) -> usize {
        self.positions.len() * size_of::<[f32; 3]>()
    }

    pub fn normal_size(&self) -> usize {
        self.normals.len() * size_of::<[f32; 3]>()
    }

    pub fn tex_coord_size(&self) -> usize {
        self.tex_coords.len() * size_of::<[f32; 2]>()
    }

    pub fn index_size(&self) -> usize {
        self.indices.len() * size_of::<u32>()
    }

    pub fn line_index_size(&self) -> usize {
        self.line_indices.len() * size_of::<u32>()
    }

    pub fn interleaved_vertex_count(&self) -> usize {
        self.interleaved.len()
    }

    /// Size of the interleaved array in bytes.
    pub fn interleaved_size(&self) -> usize {
        self.interleaved.len() * Vertex3D::STRIDE
    }

    /// Bytes from one interleaved record to the next (always 32).
    pub fn interleaved_stride(&self) -> usize {
        Vertex3D::STRIDE
    }
}

impl Default for GeometryData {
    fn default() -> Self {
        Self::new()
    }
}
