//! # Icosahedron Base
//!
//! The 12 vertices of a regular icosahedron, the seed geometry every icosphere
//! is subdivided from.

use std::f32::consts::PI;

/// Number of vertices of an icosahedron.
pub const ICOSAHEDRON_VERTEX_COUNT: usize = 12;

/// Number of triangles of an icosahedron.
pub const ICOSAHEDRON_TRIANGLE_COUNT: usize = 20;

/// Computes the 12 vertices of an icosahedron of the given radius.
///
/// The north pole is at `(0, 0, r)` and the south pole at `(0, 0, -r)`.
/// The other 10 vertices form two rings of 5 at elevation `+atan(1/2)` and
/// `-atan(1/2)` (about 26.57 degrees), spaced 72 degrees apart. The upper
/// ring starts at -126 degrees and the lower ring at -90 degrees, so the two
/// rings are offset by 36 degrees.
///
/// Vertex order: north pole, upper ring (1-5), lower ring (6-10), south pole.
///
/// A non-positive radius is not rejected; it yields degenerate geometry.
pub fn icosahedron_vertices(radius: f32) -> [[f32; 3]; ICOSAHEDRON_VERTEX_COUNT] {
    let h_angle = PI / 180.0 * 72.0; // 360 / 5
    let v_angle = (1.0f32 / 2.0).atan(); // elevation

    let mut vertices = [[0.0; 3]; ICOSAHEDRON_VERTEX_COUNT];
    let mut h_angle1 = -PI / 2.0 - h_angle / 2.0; // upper ring starts at -126 deg
    let mut h_angle2 = -PI / 2.0; // lower ring starts at -90 deg

    vertices[0] = [0.0, 0.0, radius];

    let z = radius * v_angle.sin();
    let xy = radius * v_angle.cos();
    for i in 1..=5 {
        vertices[i] = [xy * h_angle1.cos(), xy * h_angle1.sin(), z];
        vertices[i + 5] = [xy * h_angle2.cos(), xy * h_angle2.sin(), -z];

        h_angle1 += h_angle;
        h_angle2 += h_angle;
    }

    vertices[11] = [0.0, 0.0, -radius];

    vertices
}
