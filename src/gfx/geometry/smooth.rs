//! # Smooth-Shaded Icosphere
//!
//! Vertices are welded between adjacent triangles so each carries a single
//! averaged normal and the surface shades continuously.
//!
//! Welding is limited by the texture unwrap: the pole vertices and the
//! vertices on the seam edges share a position with their neighbours but not
//! a texture coordinate, so they are always emitted as separate vertices.
//! Every other vertex is looked up by its exact `(s, t)` texture coordinate
//! and reused if it already exists.

use std::collections::HashMap;

use super::atlas::TextureAtlas;
use super::icosahedron::icosahedron_vertices;
use super::math::{interpolate_tex_coord, interpolate_vertex, vertex_normal};
use super::seams::SeamTable;
use super::GeometryData;

/// Number of vertices of the smooth icosahedron before subdivision.
pub const SMOOTH_BASE_VERTEX_COUNT: usize = 22;

/// Of [`SMOOTH_BASE_VERTEX_COUNT`], how many are never welded.
pub const SMOOTH_NON_SHARED_COUNT: usize = 14;

/// Triangles of the smooth icosahedron as indices into its 22 vertices.
const BASE_TRIANGLES: [[u32; 3]; 20] = [
    // 1st row
    [0, 10, 14],
    [1, 14, 15],
    [2, 15, 16],
    [3, 16, 17],
    [4, 17, 11],
    // 2nd row
    [10, 12, 14],
    [12, 18, 14],
    [14, 18, 15],
    [18, 19, 15],
    [15, 19, 16],
    [19, 20, 16],
    [16, 20, 17],
    [20, 21, 17],
    [17, 21, 11],
    [21, 13, 11],
    // 3rd row
    [5, 18, 12],
    [6, 19, 18],
    [7, 20, 19],
    [8, 21, 20],
    [9, 13, 21],
];

/// The 30 icosahedron edges for wireframe rendering.
const BASE_LINES: [[u32; 2]; 30] = [
    [0, 10],
    [1, 14],
    [2, 15],
    [3, 16],
    [4, 17],
    [10, 14],
    [14, 15],
    [15, 16],
    [16, 17],
    [17, 11],
    [10, 12],
    [12, 14],
    [14, 18],
    [18, 15],
    [15, 19],
    [19, 16],
    [16, 20],
    [20, 17],
    [17, 21],
    [21, 11],
    [12, 18],
    [18, 19],
    [19, 20],
    [20, 21],
    [21, 13],
    [5, 12],
    [6, 18],
    [7, 19],
    [8, 20],
    [9, 21],
];

/// Builds a smooth-shaded icosphere.
///
/// Subdivision levels 0 and 1 both yield the 22-vertex icosahedron.
pub fn build_smooth(radius: f32, subdivision: u32, atlas: &TextureAtlas) -> GeometryData {
    let mut builder = SmoothBuilder::new(radius, atlas);
    builder.build_icosahedron();
    if subdivision >= 2 {
        builder.subdivide(subdivision);
    }
    builder.data.finish()
}

/// Welding key of a texture coordinate: its exact bit pattern, with `-0.0`
/// folded into `+0.0`.
fn weld_key(t: [f32; 2]) -> (u32, u32) {
    ((t[0] + 0.0).to_bits(), (t[1] + 0.0).to_bits())
}

struct SmoothBuilder {
    radius: f32,
    atlas: TextureAtlas,
    seams: SeamTable,
    data: GeometryData,
    /// Index of every welded vertex by texture coordinate
    shared_indices: HashMap<(u32, u32), u32>,
}

impl SmoothBuilder {
    fn new(radius: f32, atlas: &TextureAtlas) -> Self {
        Self {
            radius,
            atlas: *atlas,
            seams: SeamTable::new(atlas),
            data: GeometryData::new(),
            shared_indices: HashMap::new(),
        }
    }

    /// Emits the 22 icosahedron vertices and 20 triangles.
    ///
    /// ```text
    ///  00  01  02  03  04
    ///  /\  /\  /\  /\  /\
    /// /  \/  \/  \/  \/  \
    /// 10--14--15--16--17--11
    ///  \  /\  /\  /\  /\  /\
    ///   \/  \/  \/  \/  \/  \
    ///   12--18--19--20--21--13
    ///    \  /\  /\  /\  /\  /
    ///     \/  \/  \/  \/  \/
    ///     05  06  07  08  09
    /// ```
    ///
    /// 0-13 are never shared: 5 copies of each pole and the first vertex of
    /// each ring, duplicated on both sides of the seam. 14-21 are shared.
    fn build_icosahedron(&mut self) {
        let ico = icosahedron_vertices(self.radius);
        let atlas = self.atlas;

        // North pole copies (0-4)
        for s in [1.0, 3.0, 5.0, 7.0, 9.0] {
            self.data.push_vertex(ico[0], [0.0, 0.0, 1.0], atlas.coord(s, 0.0));
        }
        // South pole copies (5-9)
        for s in [2.0, 4.0, 6.0, 8.0, 10.0] {
            self.data.push_vertex(ico[11], [0.0, 0.0, -1.0], atlas.coord(s, 3.0));
        }

        // First vertex of each ring, left and right of the seam (10-13)
        let n = vertex_normal(ico[1]);
        self.data.push_vertex(ico[1], n, atlas.coord(0.0, 1.0));
        self.data.push_vertex(ico[1], n, atlas.coord(10.0, 1.0));
        let n = vertex_normal(ico[6]);
        self.data.push_vertex(ico[6], n, atlas.coord(1.0, 2.0));
        self.data.push_vertex(ico[6], n, atlas.coord(11.0, 2.0));

        // Shared vertices of the upper ring (14-17) and lower ring (18-21)
        for (i, s) in [(2, 2.0), (3, 4.0), (4, 6.0), (5, 8.0)] {
            self.add_shared_base_vertex(ico[i], atlas.coord(s, 1.0));
        }
        for (i, s) in [(7, 3.0), (8, 5.0), (9, 7.0), (10, 9.0)] {
            self.add_shared_base_vertex(ico[i], atlas.coord(s, 2.0));
        }

        for [i1, i2, i3] in BASE_TRIANGLES {
            self.data.push_triangle(i1, i2, i3);
        }
        for [i1, i2] in BASE_LINES {
            self.data.push_line(i1, i2);
        }
    }

    fn add_shared_base_vertex(&mut self, v: [f32; 3], t: [f32; 2]) {
        let index = self.data.push_vertex(v, vertex_normal(v), t);
        self.shared_indices.insert(weld_key(t), index);
    }

    /// Splits every triangle into `n^2` triangles, welding new vertices.
    ///
    /// Each source triangle is walked row by row from its top corner. Row `j`
    /// is built from its two edge vertices, then stitched to row `j - 1` with
    /// alternating up and down triangles:
    ///
    /// ```text
    ///       O        O: corner of the source triangle
    ///      / \       S: new vertex for n = 3
    ///     S - S
    ///    / \ / \
    ///   S   S - S
    ///  / \ / \ / \
    /// O - S - S - O
    /// ```
    ///
    /// The last row reuses the corners of the source triangle.
    fn subdivide(&mut self, n: u32) {
        let base = self.data.clone();
        self.data.clear_topology();

        let positions = base.positions();
        let tex_coords = base.tex_coords();
        let mut prev_row: Vec<u32> = Vec::with_capacity(n as usize + 1);
        let mut curr_row: Vec<u32> = Vec::with_capacity(n as usize + 1);

        for tri in base.indices().chunks_exact(3) {
            let (ico_i1, ico_i2, ico_i3) = (tri[0], tri[1], tri[2]);
            let ico_v1 = positions[ico_i1 as usize];
            let ico_v2 = positions[ico_i2 as usize];
            let ico_v3 = positions[ico_i3 as usize];
            let ico_t1 = tex_coords[ico_i1 as usize];
            let ico_t2 = tex_coords[ico_i2 as usize];
            let ico_t3 = tex_coords[ico_i3 as usize];

            prev_row.clear();
            prev_row.push(ico_i1);

            for j in 1..=n {
                // End points of the current row on the left and right edges
                let (edge_v1, edge_v2, edge_t1, edge_t2, edge_i1, edge_i2) = if j == n {
                    (ico_v2, ico_v3, ico_t2, ico_t3, ico_i2, ico_i3)
                } else {
                    let alpha = j as f32 / n as f32;
                    let v1 = interpolate_vertex(ico_v1, ico_v2, alpha, self.radius);
                    let v2 = interpolate_vertex(ico_v1, ico_v3, alpha, self.radius);
                    let t1 = interpolate_tex_coord(ico_t1, ico_t2, alpha);
                    let t2 = interpolate_tex_coord(ico_t1, ico_t3, alpha);
                    let i1 = self.add_sub_vertex(v1, t1);
                    let i2 = self.add_sub_vertex(v2, t2);
                    (v1, v2, t1, t2, i1, i2)
                };

                curr_row.clear();
                for k in 0..=j {
                    if k == 0 {
                        curr_row.push(edge_i1);
                    } else if k == j {
                        curr_row.push(edge_i2);
                    } else {
                        let alpha = k as f32 / j as f32;
                        let v = interpolate_vertex(edge_v1, edge_v2, alpha, self.radius);
                        let t = interpolate_tex_coord(edge_t1, edge_t2, alpha);
                        curr_row.push(self.add_sub_vertex(v, t));
                    }
                }

                let j = j as usize;
                for k in 0..j {
                    let i1 = prev_row[k];
                    let i2 = curr_row[k];
                    let i3 = curr_row[k + 1];

                    self.data.push_triangle(i1, i2, i3);
                    self.data.push_line(i1, i2);
                    self.data.push_line(i2, i3);

                    if k < j - 1 {
                        let i4 = prev_row[k + 1];
                        self.data.push_triangle(i3, i4, i1);
                        self.data.push_line(i1, i3);
                        self.data.push_line(i1, i4);
                    }
                }

                std::mem::swap(&mut prev_row, &mut curr_row);
            }
        }
    }

    /// Adds a subdivision vertex and returns its index.
    ///
    /// Vertices off the seams are welded by texture coordinate: the first one
    /// is recorded, later ones with the same coordinate reuse its index.
    fn add_sub_vertex(&mut self, v: [f32; 3], t: [f32; 2]) -> u32 {
        let n = vertex_normal(v);
        if !self.seams.is_shared(t) {
            return self.data.push_vertex(v, n, t);
        }

        let key = weld_key(t);
        if let Some(&index) = self.shared_indices.get(&key) {
            return index;
        }
        let index = self.data.push_vertex(v, n, t);
        self.shared_indices.insert(key, index);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    #[test]
    fn test_icosahedron_counts() {
        let data = build_smooth(2.0, 0, &TextureAtlas::default());
        assert_eq!(data.vertex_count(), SMOOTH_BASE_VERTEX_COUNT);
        assert_eq!(data.index_count(), 60);
        assert_eq!(data.triangle_count(), 20);
        assert_eq!(data.line_index_count(), 60);

        assert_eq!(build_smooth(2.0, 1, &TextureAtlas::default()), data);
    }

    #[test]
    fn test_pole_copies() {
        let atlas = TextureAtlas::default();
        let data = build_smooth(1.0, 0, &atlas);

        for i in 0..5 {
            assert_eq!(data.positions()[i], [0.0, 0.0, 1.0]);
            assert_eq!(data.normals()[i], [0.0, 0.0, 1.0]);
            assert_eq!(data.tex_coords()[i], atlas.coord((2 * i + 1) as f32, 0.0));
        }
        for i in 5..10 {
            assert_eq!(data.positions()[i], [0.0, 0.0, -1.0]);
            assert_eq!(data.normals()[i], [0.0, 0.0, -1.0]);
            assert_eq!(data.tex_coords()[i], atlas.coord((2 * (i - 5) + 2) as f32, 3.0));
        }
    }

    #[test]
    fn test_seam_duplicates() {
        let data = build_smooth(1.0, 0, &TextureAtlas::default());
        // Same position on both sides of the seam, different texture coordinate
        assert_eq!(data.positions()[10], data.positions()[11]);
        assert_ne!(data.tex_coords()[10], data.tex_coords()[11]);
        assert_eq!(data.positions()[12], data.positions()[13]);
        assert_ne!(data.tex_coords()[12], data.tex_coords()[13]);
    }

    #[test]
    fn test_base_lines_cover_each_edge_once() {
        let data = build_smooth(1.0, 0, &TextureAtlas::default());
        let mut edges: Vec<(u32, u32)> = data
            .line_indices()
            .chunks_exact(2)
            .map(|l| (l[0].min(l[1]), l[0].max(l[1])))
            .collect();
        edges.sort();
        edges.dedup();
        assert_eq!(edges.len(), 30);
    }

    #[test]
    fn test_subdivided_counts() {
        for n in 2..=6u32 {
            let data = build_smooth(1.0, n, &TextureAtlas::default());
            let tris = 20 * (n * n) as usize;
            assert_eq!(data.index_count(), tris * 3);
            assert_eq!(data.line_index_count(), tris * 4);
            assert!(data.vertex_count() < data.index_count());
            assert_eq!(data.normal_count(), data.vertex_count());
            assert_eq!(data.tex_coord_count(), data.vertex_count());
        }
    }

    #[test]
    fn test_indices_in_range() {
        let data = build_smooth(1.0, 4, &TextureAtlas::default());
        let count = data.vertex_count() as u32;
        assert!(data.indices().iter().all(|&i| i < count));
        assert!(data.line_indices().iter().all(|&i| i < count));
    }

    #[test]
    fn test_vertices_are_shared() {
        let data = build_smooth(1.0, 3, &TextureAtlas::default());
        let mut uses = vec![0usize; data.vertex_count()];
        for &i in data.indices() {
            uses[i as usize] += 1;
        }
        // Interior vertices of the middle band are used by 6 triangles
        assert!(uses.iter().any(|&u| u == 6));
        assert!(uses.iter().all(|&u| u >= 1));
    }

    #[test]
    fn test_normals_are_radial() {
        let data = build_smooth(3.0, 3, &TextureAtlas::default());
        for (p, n) in data.positions().iter().zip(data.normals()) {
            assert!((dot(*n, *n) - 1.0).abs() < 1e-5);
            assert!((dot(*p, *n) - 3.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_welding_is_idempotent() {
        let atlas = TextureAtlas::default();
        let seams = SeamTable::new(&atlas);
        let data = build_smooth(1.0, 4, &atlas);

        // No two shareable vertices carry the same texture coordinate
        let mut seen: HashMap<(u32, u32), usize> = HashMap::new();
        for (i, &t) in data.tex_coords().iter().enumerate().skip(SMOOTH_NON_SHARED_COUNT) {
            if seams.is_shared(t) {
                assert!(seen.insert(weld_key(t), i).is_none(), "vertex {} duplicated", i);
            }
        }
    }

    #[test]
    fn test_weld_key_folds_negative_zero() {
        assert_eq!(weld_key([-0.0, 0.5]), weld_key([0.0, 0.5]));
        assert_ne!(weld_key([0.25, 0.5]), weld_key([0.5, 0.25]));
    }
}
