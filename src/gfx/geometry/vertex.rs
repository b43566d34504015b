//! # Interleaved Vertex Records
//!
//! This module defines the packed vertex record used for GPU upload of
//! generated geometry.

/// A 3D vertex with position, normal and texture coordinate data.
///
/// This is one record of the interleaved vertex buffer. Positions, normals and
/// texture coordinates of a [`GeometryData`](super::GeometryData) are packed
/// into a single array of these so a renderer can upload them with one call.
///
/// # Memory Layout
///
/// The `#[repr(C)]` attribute ensures the struct has a C-compatible memory
/// layout of 8 consecutive `f32` values:
///
/// | Offset | Attribute  | Format    |
/// |--------|------------|-----------|
/// | 0      | position   | f32 x 3   |
/// | 12     | normal     | f32 x 3   |
/// | 24     | tex_coord  | f32 x 2   |
///
/// The stride is [`Vertex3D::STRIDE`] (32 bytes).
///
/// # Examples
///
/// ```
/// use meshgen::gfx::geometry::vertex::Vertex3D;
///
/// let vertex = Vertex3D::new([0.0, 0.0, 1.0], [0.0, 0.0, 1.0], [0.5, 0.0]);
/// assert_eq!(Vertex3D::STRIDE, 32);
/// assert_eq!(bytemuck::bytes_of(&vertex).len(), 32);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// 3D normal vector [nx, ny, nz] for lighting calculations
    pub normal: [f32; 3],
    /// Texture coordinates [s, t]
    pub tex_coord: [f32; 2],
}

impl Vertex3D {
    /// Number of bytes from the start of one record to the next.
    pub const STRIDE: usize = std::mem::size_of::<Vertex3D>();

    /// Byte offset of the normal attribute within a record.
    pub const NORMAL_OFFSET: usize = std::mem::size_of::<[f32; 3]>();

    /// Byte offset of the texture coordinate attribute within a record.
    pub const TEX_COORD_OFFSET: usize = 2 * std::mem::size_of::<[f32; 3]>();

    pub fn new(position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            tex_coord,
        }
    }
}
