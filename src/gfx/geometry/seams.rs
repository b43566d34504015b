//! # Texture Seam Classification
//!
//! When the icosphere is unwrapped onto the texture atlas, every edge that
//! touches a pole and the left/right borders of the strip appear twice in
//! texture space. Vertices on those edges share a position with a neighbour
//! but not a texture coordinate, so they can never be welded.
//!
//! The seams are stored as a table of 20 line segments in texture space. A
//! candidate vertex is non-shared if its texture coordinate lies on any of
//! them. Labels below name the segment endpoints:
//!
//! ```text
//!   00  01  02  03  04
//!   /\  /\  /\  /\  /\
//!  /  \/  \/  \/  \/  \
//! 05  06  07  08  09   \
//!   \   10  11  12  13  14
//!    \  /\  /\  /\  /\  /
//!     \/  \/  \/  \/  \/
//!      15  16  17  18  19
//! ```
//!
//! Endpoints on the right border use the literal `s = 1.0` rather than `11 * S`,
//! and endpoints on the bottom row use `t = 1.0` rather than `3 * T`. Only the
//! uniform atlas makes these coincide; with the pixel-aligned atlas points
//! near those segments classify differently, and the table keeps the literals.

use super::atlas::TextureAtlas;

/// Tolerance of the collinearity test in [`is_on_line_segment`].
pub const SEGMENT_EPSILON: f32 = 0.0001;

/// Number of seam segments in the table.
pub const SEAM_SEGMENT_COUNT: usize = 20;

/// A line segment in texture space.
pub type Segment = [[f32; 2]; 2];

/// The non-shared seam segments of an icosphere unwrap.
#[derive(Debug, Clone, PartialEq)]
pub struct SeamTable {
    segments: [Segment; SEAM_SEGMENT_COUNT],
}

impl SeamTable {
    /// Builds the seam table for the given atlas.
    pub fn new(atlas: &TextureAtlas) -> Self {
        let s = atlas.s_step;
        let t = atlas.t_step;

        let segments = [
            [[s, 0.0], [0.0, t]],                 // 00 - 05
            [[s, 0.0], [s * 2.0, t]],             // 00 - 06
            [[s * 3.0, 0.0], [s * 2.0, t]],       // 01 - 06
            [[s * 3.0, 0.0], [s * 4.0, t]],       // 01 - 07
            [[s * 5.0, 0.0], [s * 4.0, t]],       // 02 - 07
            [[s * 5.0, 0.0], [s * 6.0, t]],       // 02 - 08
            [[s * 7.0, 0.0], [s * 6.0, t]],       // 03 - 08
            [[s * 7.0, 0.0], [s * 8.0, t]],       // 03 - 09
            [[s * 9.0, 0.0], [s * 8.0, t]],       // 04 - 09
            [[s * 9.0, 0.0], [1.0, t * 2.0]],     // 04 - 14
            [[0.0, t], [s * 2.0, 1.0]],           // 05 - 15
            [[s * 3.0, t * 2.0], [s * 2.0, 1.0]], // 10 - 15
            [[s * 3.0, t * 2.0], [s * 4.0, 1.0]], // 10 - 16
            [[s * 5.0, t * 2.0], [s * 4.0, 1.0]], // 11 - 16
            [[s * 5.0, t * 2.0], [s * 6.0, 1.0]], // 11 - 17
            [[s * 7.0, t * 2.0], [s * 6.0, 1.0]], // 12 - 17
            [[s * 7.0, t * 2.0], [s * 8.0, 1.0]], // 12 - 18
            [[s * 9.0, t * 2.0], [s * 8.0, 1.0]], // 13 - 18
            [[s * 9.0, t * 2.0], [s * 10.0, 1.0]], // 13 - 19
            [[1.0, t * 2.0], [s * 10.0, 1.0]],    // 14 - 19
        ];

        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns `true` if a vertex with this texture coordinate may be shared
    /// between adjacent triangles, i.e. it is not on any seam segment.
    pub fn is_shared(&self, t: [f32; 2]) -> bool {
        !self
            .segments
            .iter()
            .any(|[a, b]| is_on_line_segment(*a, *b, t))
    }
}

impl Default for SeamTable {
    fn default() -> Self {
        Self::new(&TextureAtlas::default())
    }
}

/// Determines whether point `c` is on the line segment `a`-`b`.
///
/// `c` must be collinear with `a`-`b` (within [`SEGMENT_EPSILON`]) and inside
/// the bounding box of the segment, endpoints included.
pub fn is_on_line_segment(a: [f32; 2], b: [f32; 2], c: [f32; 2]) -> bool {
    let cross = (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
    if cross > SEGMENT_EPSILON || cross < -SEGMENT_EPSILON {
        return false;
    }

    if (c[0] > a[0] && c[0] > b[0]) || (c[0] < a[0] && c[0] < b[0]) {
        return false;
    }
    if (c[1] > a[1] && c[1] > b[1]) || (c[1] < a[1] && c[1] < b[1]) {
        return false;
    }

    true
}
