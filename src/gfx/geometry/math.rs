//! # Geometry Helpers
//!
//! Small vector helpers shared by the shape builders: face and vertex normals,
//! rescaling and interpolation. Everything works on plain `[f32; N]` arrays
//! at the boundary and uses `cgmath` internally.

use cgmath::{InnerSpace, Vector3};

/// Face normals shorter than this are treated as degenerate.
pub const NORMAL_EPSILON: f32 = 0.000001;

/// Returns the unit face normal of the triangle `v1`-`v2`-`v3`.
///
/// The normal is the cross product of the edges `v1->v2` and `v1->v3`, so a
/// counter-clockwise triangle faces the viewer. A triangle with no surface
/// returns the zero vector instead of dividing by a near-zero length.
pub fn face_normal(v1: [f32; 3], v2: [f32; 3], v3: [f32; 3]) -> [f32; 3] {
    let p1 = Vector3::from(v1);
    let e1 = Vector3::from(v2) - p1;
    let e2 = Vector3::from(v3) - p1;

    let n = e1.cross(e2);
    let length = n.magnitude();
    if length > NORMAL_EPSILON {
        (n * (1.0 / length)).into()
    } else {
        [0.0, 0.0, 0.0]
    }
}

/// Returns the vertex normal of a point on a sphere centered at the origin.
pub fn vertex_normal(v: [f32; 3]) -> [f32; 3] {
    let scale = scale_for_length(v, 1.0);
    [v[0] * scale, v[1] * scale, v[2] * scale]
}

/// Returns the factor that resizes `v` to the given length.
pub fn scale_for_length(v: [f32; 3], length: f32) -> f32 {
    length / Vector3::from(v).magnitude()
}

/// Linear interpolation, `from + alpha * (to - from)`.
#[inline]
pub fn lerp(from: f32, to: f32, alpha: f32) -> f32 {
    from + alpha * (to - from)
}

/// Interpolates between two vertices and pushes the result back onto the
/// sphere of radius `length`.
pub fn interpolate_vertex(v1: [f32; 3], v2: [f32; 3], alpha: f32, length: f32) -> [f32; 3] {
    let v = [
        lerp(v1[0], v2[0], alpha),
        lerp(v1[1], v2[1], alpha),
        lerp(v1[2], v2[2], alpha),
    ];
    let scale = scale_for_length(v, length);
    [v[0] * scale, v[1] * scale, v[2] * scale]
}

/// Interpolates between two texture coordinates.
pub fn interpolate_tex_coord(t1: [f32; 2], t2: [f32; 2], alpha: f32) -> [f32; 2] {
    [lerp(t1[0], t2[0], alpha), lerp(t1[1], t2[1], alpha)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length(v: [f32; 3]) -> f32 {
        Vector3::from(v).magnitude()
    }

    #[test]
    fn test_face_normal_ccw() {
        let n = face_normal([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert_eq!(n, [0.0, 0.0, 1.0]);

        // Swapping two corners flips the facing
        let n = face_normal([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]);
        assert_eq!(n, [0.0, 0.0, -1.0]);
    }

    #[test]
    fn test_face_normal_degenerate() {
        let n = face_normal([1.0, 1.0, 1.0], [2.0, 2.0, 2.0], [3.0, 3.0, 3.0]);
        assert_eq!(n, [0.0, 0.0, 0.0]);

        let n = face_normal([0.5, 0.5, 0.5], [0.5, 0.5, 0.5], [0.5, 0.5, 0.5]);
        assert!(n.iter().all(|c| !c.is_nan()));
    }

    #[test]
    fn test_vertex_normal_is_unit() {
        let n = vertex_normal([3.0, 4.0, 0.0]);
        assert!((n[0] - 0.6).abs() < 1e-6);
        assert!((n[1] - 0.8).abs() < 1e-6);
        assert!((length(n) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_interpolate_vertex_stays_on_sphere() {
        let v = interpolate_vertex([2.0, 0.0, 0.0], [0.0, 2.0, 0.0], 0.5, 2.0);
        assert!((length(v) - 2.0).abs() < 1e-5);
        assert!((v[0] - v[1]).abs() < 1e-6);
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(1.0, 3.0, 0.0), 1.0);
        assert_eq!(lerp(1.0, 3.0, 1.0), 3.0);
        assert_eq!(interpolate_tex_coord([0.0, 0.0], [1.0, 0.5], 0.5), [0.5, 0.25]);
    }
}
