//! # Flat-Shaded Icosphere
//!
//! Every triangle owns its three vertices, so each one can carry the face
//! normal of its triangle and the surface renders faceted.

use super::atlas::TextureAtlas;
use super::icosahedron::icosahedron_vertices;
use super::math::{face_normal, interpolate_tex_coord, interpolate_vertex};
use super::GeometryData;

/// Builds a flat-shaded icosphere.
///
/// The 20 icosahedron triangles are emitted first, then each is split into
/// `subdivision^2` triangles. Subdivision levels 0 and 1 both yield the plain
/// icosahedron.
pub fn build_flat(radius: f32, subdivision: u32, atlas: &TextureAtlas) -> GeometryData {
    let base = build_icosahedron_flat(radius, atlas);
    if subdivision <= 1 {
        return base.finish();
    }
    subdivide_flat(&base, radius, subdivision).finish()
}

/// Emits the 20 icosahedron triangles with unshared vertices.
///
/// Each of the 5 columns contributes one triangle around the north pole, two
/// in the middle band and one around the south pole, plus 6 wireframe edges:
///
/// ```text
///  i
///  /   /   /   /   /       : (i, i+1)
/// /__ /__ /__ /__ /__
/// \  /\  /\  /\  /\  /     : (i+3, i+4), (i+3, i+5), (i+4, i+5)
///  \/__\/__\/__\/__\/__
///   \   \   \   \   \      : (i+9, i+10), (i+9, i+11)
///    \   \   \   \   \
/// ```
fn build_icosahedron_flat(radius: f32, atlas: &TextureAtlas) -> GeometryData {
    let ico = icosahedron_vertices(radius);
    let mut data = GeometryData::new();

    let v0 = ico[0]; // north pole
    let v11 = ico[11]; // south pole
    for i in 1..=5usize {
        let v1 = ico[i];
        let v2 = if i < 5 { ico[i + 1] } else { ico[1] };
        let v3 = ico[i + 5];
        let v4 = if i + 5 < 10 { ico[i + 6] } else { ico[6] };

        let col = i as f32;
        let t0 = atlas.coord(2.0 * col - 1.0, 0.0);
        let t1 = atlas.coord(2.0 * col - 2.0, 1.0);
        let t2 = atlas.coord(2.0 * col, 1.0);
        let t3 = atlas.coord(2.0 * col - 1.0, 2.0);
        let t4 = atlas.coord(2.0 * col + 1.0, 2.0);
        let t11 = atlas.coord(2.0 * col, 3.0);

        // 1st row
        let index = add_face(&mut data, [v0, v1, v2], [t0, t1, t2]);
        // 2nd row
        add_face(&mut data, [v1, v3, v2], [t1, t3, t2]);
        add_face(&mut data, [v2, v3, v4], [t2, t3, t4]);
        // 3rd row
        add_face(&mut data, [v3, v11, v4], [t3, t11, t4]);

        data.push_line(index, index + 1);
        data.push_line(index + 3, index + 4);
        data.push_line(index + 3, index + 5);
        data.push_line(index + 4, index + 5);
        data.push_line(index + 9, index + 10);
        data.push_line(index + 9, index + 11);
    }

    data
}

/// Splits every triangle of `base` into `n^2` triangles.
///
/// New vertices are interpolated row by row from the top corner and pushed
/// back onto the sphere:
///
/// ```text
///       O        O: corner of the source triangle
///      / \       S: new vertex for n = 3
///     S - S      vertices per triangle = (n + 1)(n + 2) / 2
///    / \ / \
///   S   S - S
///  / \ / \ / \
/// O - S - S - O
/// ```
fn subdivide_flat(base: &GeometryData, radius: f32, n: u32) -> GeometryData {
    let n = n as usize;
    let sub_vertex_count = (n + 1) * (n + 2) / 2;
    let mut data = GeometryData::new();
    let mut new_vs: Vec<[f32; 3]> = Vec::with_capacity(sub_vertex_count);
    let mut new_ts: Vec<[f32; 2]> = Vec::with_capacity(sub_vertex_count);

    let positions = base.positions();
    let tex_coords = base.tex_coords();
    for tri in base.indices().chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let (v1, v2, v3) = (positions[a], positions[b], positions[c]);
        let (t1, t2, t3) = (tex_coords[a], tex_coords[b], tex_coords[c]);

        new_vs.clear();
        new_ts.clear();
        new_vs.push(v1);
        new_ts.push(t1);

        for j in 1..=n {
            let alpha = j as f32 / n as f32;

            // End points of the current row on the left and right edges
            let row_v1 = interpolate_vertex(v1, v2, alpha, radius);
            let row_v2 = interpolate_vertex(v1, v3, alpha, radius);
            let row_t1 = interpolate_tex_coord(t1, t2, alpha);
            let row_t2 = interpolate_tex_coord(t1, t3, alpha);

            for k in 0..=j {
                if k == 0 {
                    new_vs.push(row_v1);
                    new_ts.push(row_t1);
                } else if k == j {
                    new_vs.push(row_v2);
                    new_ts.push(row_t2);
                } else {
                    let alpha = k as f32 / j as f32;
                    new_vs.push(interpolate_vertex(row_v1, row_v2, alpha, radius));
                    new_ts.push(interpolate_tex_coord(row_t1, row_t2, alpha));
                }
            }
        }

        //      /
        //   V1*---*-     prev row
        //    / \ /
        // V2*---*V3-     curr row
        //  /
        for j in 1..=n {
            for k in 0..j {
                let i1 = (j - 1) * j / 2 + k; // prev row
                let i2 = j * (j + 1) / 2 + k; // curr row

                let index = add_face(
                    &mut data,
                    [new_vs[i1], new_vs[i2], new_vs[i2 + 1]],
                    [new_ts[i1], new_ts[i2], new_ts[i2 + 1]],
                );
                data.push_line(index, index + 1);
                data.push_line(index + 1, index + 2);

                // Upside-down neighbour, except after the last one in the row
                if k < j - 1 {
                    let i4 = i1 + 1;
                    let index = add_face(
                        &mut data,
                        [new_vs[i1], new_vs[i2 + 1], new_vs[i4]],
                        [new_ts[i1], new_ts[i2 + 1], new_ts[i4]],
                    );
                    data.push_line(index, index + 1);
                    data.push_line(index, index + 2);
                }
            }
        }
    }

    data
}

/// Adds a triangle with 3 fresh vertices sharing its face normal and returns
/// the index of the first one.
fn add_face(data: &mut GeometryData, v: [[f32; 3]; 3], t: [[f32; 2]; 3]) -> u32 {
    let n = face_normal(v[0], v[1], v[2]);
    let i1 = data.push_vertex(v[0], n, t[0]);
    let i2 = data.push_vertex(v[1], n, t[1]);
    let i3 = data.push_vertex(v[2], n, t[2]);
    data.push_triangle(i1, i2, i3);
    i1
}
