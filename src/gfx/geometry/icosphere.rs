//! # Icosphere
//!
//! A sphere approximated by subdividing the 20 faces of an icosahedron. Each
//! edge of the icosahedron is split into `subdivision` segments, giving
//! `20 * subdivision^2` triangles. Subdivision 0 and 1 are both the plain
//! icosahedron.
//!
//! [`build_icosphere`] is a pure function from [`IcosphereParams`] to
//! [`GeometryData`]. [`Icosphere`] wraps it with setters that rebuild (or,
//! for the radius, rescale) the geometry in one step.
//!
//! ## Usage
//!
//! ```rust
//! use meshgen::gfx::geometry::{Icosphere, IcosphereParams};
//!
//! let mut sphere = Icosphere::try_new(IcosphereParams::new(2.0, 3, false)).unwrap();
//! assert_eq!(sphere.geometry().index_count(), 540);
//!
//! sphere.set_smooth(true);
//! assert!(sphere.geometry().vertex_count() < 540);
//!
//! println!("{sphere}");
//! ```

use std::fmt;

use log::{debug, trace, warn};

use super::atlas::TextureAtlas;
use super::flat::build_flat;
use super::smooth::build_smooth;
use super::GeometryData;
use crate::error::GeometryError;

/// Largest subdivision whose flat-shaded vertex count still fits in `u32`
/// indices with room to spare.
pub const MAX_SUBDIVISION: u32 = 4096;

/// Shape parameters of an icosphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IcosphereParams {
    /// Distance of every vertex from the origin
    pub radius: f32,
    /// Number of segments each icosahedron edge is split into
    pub subdivision: u32,
    /// Smooth (shared vertices, vertex normals) or flat (face normals) shading
    pub smooth: bool,
    /// Texture layout of the unwrapped faces
    pub atlas: TextureAtlas,
}

impl IcosphereParams {
    pub fn new(radius: f32, subdivision: u32, smooth: bool) -> Self {
        Self {
            radius,
            subdivision,
            smooth,
            atlas: TextureAtlas::default(),
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_subdivision(mut self, subdivision: u32) -> Self {
        self.subdivision = subdivision;
        self
    }

    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    pub fn with_atlas(mut self, atlas: TextureAtlas) -> Self {
        self.atlas = atlas;
        self
    }

    /// Number of triangles these parameters produce.
    pub fn triangle_count(&self) -> usize {
        let n = self.subdivision.max(1) as usize;
        20 * n * n
    }

    /// Checks the parameters describe a well-formed sphere.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !is_valid_radius(self.radius) {
            return Err(GeometryError::InvalidRadius(self.radius));
        }
        if self.subdivision > MAX_SUBDIVISION {
            return Err(GeometryError::SubdivisionTooLarge {
                requested: self.subdivision,
                max: MAX_SUBDIVISION,
            });
        }
        self.atlas.validate()
    }
}

impl Default for IcosphereParams {
    fn default() -> Self {
        Self::new(1.0, 1, true)
    }
}

fn is_valid_radius(radius: f32) -> bool {
    radius.is_finite() && radius > 0.0
}

/// Builds the icosphere described by `params`.
///
/// Parameters are not validated; a degenerate radius yields degenerate
/// geometry. Use [`IcosphereParams::validate`] first to reject it.
pub fn build_icosphere(params: &IcosphereParams) -> GeometryData {
    let geometry = if params.smooth {
        build_smooth(params.radius, params.subdivision, &params.atlas)
    } else {
        build_flat(params.radius, params.subdivision, &params.atlas)
    };

    debug!(
        "Built {} icosphere (radius {}, subdivision {}): {} vertices, {} triangles",
        if params.smooth { "smooth" } else { "flat" },
        params.radius,
        params.subdivision,
        geometry.vertex_count(),
        geometry.triangle_count()
    );

    geometry
}

/// An icosphere generator that owns its current geometry.
///
/// Every setter leaves the generator fully rebuilt before it returns; slices
/// borrowed from [`geometry`](Self::geometry) cannot outlive the next change.
#[derive(Debug, Clone)]
pub struct Icosphere {
    params: IcosphereParams,
    geometry: GeometryData,
}

impl Icosphere {
    /// Creates an icosphere with the default texture atlas.
    ///
    /// Degenerate parameters are not rejected: they are logged and produce
    /// degenerate geometry. Use [`try_new`](Self::try_new) to reject them.
    pub fn new(radius: f32, subdivision: u32, smooth: bool) -> Self {
        Self::with_params(IcosphereParams::new(radius, subdivision, smooth))
    }

    /// Creates an icosphere from parameters without validating them.
    pub fn with_params(params: IcosphereParams) -> Self {
        if let Err(e) = params.validate() {
            warn!("Icosphere: {}", e);
        }
        Self {
            geometry: build_icosphere(&params),
            params,
        }
    }

    /// Creates an icosphere, rejecting degenerate parameters.
    pub fn try_new(params: IcosphereParams) -> Result<Self, GeometryError> {
        params.validate()?;
        Ok(Self {
            geometry: build_icosphere(&params),
            params,
        })
    }

    // -- getters --

    pub fn radius(&self) -> f32 {
        self.params.radius
    }

    pub fn subdivision(&self) -> u32 {
        self.params.subdivision
    }

    pub fn is_smooth(&self) -> bool {
        self.params.smooth
    }

    pub fn atlas(&self) -> &TextureAtlas {
        &self.params.atlas
    }

    pub fn params(&self) -> &IcosphereParams {
        &self.params
    }

    /// The current mesh.
    pub fn geometry(&self) -> &GeometryData {
        &self.geometry
    }

    /// Takes the current mesh, consuming the generator.
    pub fn into_geometry(self) -> GeometryData {
        self.geometry
    }

    // -- setters --

    /// Changes the radius by rescaling the current vertex positions.
    ///
    /// The scale factor is `radius / previous radius`, so topology, normals,
    /// texture coordinates and any normal reversal are kept. If either radius
    /// is degenerate the geometry is rebuilt instead.
    pub fn set_radius(&mut self, radius: f32) {
        let previous = self.params.radius;
        self.params.radius = radius;

        if is_valid_radius(previous) && is_valid_radius(radius) {
            let scale = radius / previous;
            trace!("Icosphere: rescaling radius {} -> {} (x{})", previous, radius, scale);
            self.geometry = self.geometry.rescaled(scale);
        } else {
            warn!("Icosphere: degenerate radius {} -> {}, rebuilding", previous, radius);
            self.rebuild();
        }
    }

    /// Changes the subdivision level and rebuilds.
    pub fn set_subdivision(&mut self, subdivision: u32) {
        if subdivision > MAX_SUBDIVISION {
            warn!(
                "Icosphere: subdivision {} exceeds the maximum of {}",
                subdivision, MAX_SUBDIVISION
            );
        }
        self.params.subdivision = subdivision;
        self.rebuild();
    }

    /// Switches between smooth and flat shading. Does nothing if unchanged.
    pub fn set_smooth(&mut self, smooth: bool) {
        if self.params.smooth == smooth {
            return;
        }
        self.params.smooth = smooth;
        self.rebuild();
    }

    /// Changes the texture layout and rebuilds.
    pub fn set_atlas(&mut self, atlas: TextureAtlas) {
        if let Err(e) = atlas.validate() {
            warn!("Icosphere: {}", e);
        }
        self.params.atlas = atlas;
        self.rebuild();
    }

    /// Flips all normals and triangle windings so the sphere faces inward.
    ///
    /// A later rebuild (new subdivision, shading or atlas) faces outward again.
    pub fn reverse_normals(&mut self) {
        self.geometry = self.geometry.reversed_normals();
    }

    fn rebuild(&mut self) {
        self.geometry = build_icosphere(&self.params);
    }
}

impl Default for Icosphere {
    fn default() -> Self {
        Self::with_params(IcosphereParams::default())
    }
}

impl fmt::Display for Icosphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = &self.geometry;
        writeln!(f, "===== Icosphere =====")?;
        writeln!(f, "        Radius: {}", self.params.radius)?;
        writeln!(f, "   Subdivision: {}", self.params.subdivision)?;
        writeln!(f, "    Smoothness: {}", self.params.smooth)?;
        writeln!(f, "Triangle Count: {}", g.triangle_count())?;
        writeln!(f, "   Index Count: {}", g.index_count())?;
        writeln!(f, "  Vertex Count: {}", g.vertex_count())?;
        writeln!(f, "  Normal Count: {}", g.normal_count())?;
        write!(f, "TexCoord Count: {}", g.tex_coord_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_validation() {
        assert!(IcosphereParams::new(1.0, 3, true).validate().is_ok());
        assert_eq!(
            IcosphereParams::new(0.0, 3, true).validate(),
            Err(GeometryError::InvalidRadius(0.0))
        );
        assert!(IcosphereParams::new(f32::INFINITY, 3, true).validate().is_err());
        assert_eq!(
            IcosphereParams::new(1.0, MAX_SUBDIVISION + 1, true).validate(),
            Err(GeometryError::SubdivisionTooLarge {
                requested: MAX_SUBDIVISION + 1,
                max: MAX_SUBDIVISION
            })
        );
        let bad_atlas = IcosphereParams::default().with_atlas(TextureAtlas::new(-1.0, 0.5));
        assert!(matches!(bad_atlas.validate(), Err(GeometryError::InvalidAtlas { .. })));
    }

    #[test]
    fn test_try_new_rejects_degenerate_radius() {
        assert!(Icosphere::try_new(IcosphereParams::new(-1.0, 2, false)).is_err());
        assert!(Icosphere::try_new(IcosphereParams::new(1.0, 2, false)).is_ok());
    }

    #[test]
    fn test_new_is_permissive() {
        let sphere = Icosphere::new(0.0, 2, true);
        assert_eq!(sphere.geometry().index_count(), 240);
    }

    #[test]
    fn test_params_triangle_count() {
        assert_eq!(IcosphereParams::new(1.0, 0, true).triangle_count(), 20);
        assert_eq!(IcosphereParams::new(1.0, 1, true).triangle_count(), 20);
        assert_eq!(IcosphereParams::new(1.0, 4, true).triangle_count(), 320);
    }

    #[test]
    fn test_set_subdivision_rebuilds() {
        let mut sphere = Icosphere::new(1.0, 1, false);
        assert_eq!(sphere.geometry().triangle_count(), 20);

        sphere.set_subdivision(3);
        assert_eq!(sphere.subdivision(), 3);
        assert_eq!(sphere.geometry().triangle_count(), 180);
        assert_eq!(sphere.geometry(), &build_icosphere(sphere.params()));
    }

    #[test]
    fn test_set_smooth_switches_builder() {
        let mut sphere = Icosphere::new(1.0, 2, false);
        assert_eq!(sphere.geometry().vertex_count(), 240);

        sphere.set_smooth(true);
        assert!(sphere.is_smooth());
        assert!(sphere.geometry().vertex_count() < 240);

        let before = sphere.geometry().clone();
        sphere.set_smooth(true);
        assert_eq!(sphere.geometry(), &before);
    }

    #[test]
    fn test_set_radius_rescales() {
        let mut sphere = Icosphere::new(1.0, 3, true);
        let indices = sphere.geometry().indices().to_vec();
        let normals = sphere.geometry().normals().to_vec();

        sphere.set_radius(2.5);
        assert_eq!(sphere.radius(), 2.5);
        assert_eq!(sphere.geometry().indices(), &indices[..]);
        assert_eq!(sphere.geometry().normals(), &normals[..]);
        for p in sphere.geometry().positions() {
            let length = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert!((length - 2.5).abs() < 1e-4);
        }
    }

    #[test]
    fn test_set_same_radius_is_identity() {
        let mut sphere = Icosphere::new(1.5, 2, false);
        let before = sphere.geometry().clone();
        sphere.set_radius(1.5);
        assert_eq!(sphere.geometry(), &before);
        sphere.set_radius(1.5);
        assert_eq!(sphere.geometry(), &before);
    }

    #[test]
    fn test_set_radius_from_degenerate_rebuilds() {
        let mut sphere = Icosphere::new(0.0, 2, true);
        sphere.set_radius(1.0);
        assert_eq!(sphere.geometry(), &build_icosphere(&IcosphereParams::new(1.0, 2, true)));
    }

    #[test]
    fn test_set_atlas_rebuilds() {
        let mut sphere = Icosphere::new(1.0, 0, true);
        sphere.set_atlas(TextureAtlas::UNIFORM);
        assert_eq!(sphere.atlas(), &TextureAtlas::UNIFORM);
        assert_eq!(sphere.geometry().tex_coords()[5], TextureAtlas::UNIFORM.coord(2.0, 3.0));
    }

    #[test]
    fn test_reverse_normals_twice() {
        let mut sphere = Icosphere::new(1.0, 2, true);
        let original = sphere.geometry().clone();

        sphere.reverse_normals();
        assert_ne!(sphere.geometry(), &original);
        assert_eq!(sphere.geometry().normals()[0], [-0.0, -0.0, -1.0]);

        sphere.reverse_normals();
        assert_eq!(sphere.geometry(), &original);
    }

    #[test]
    fn test_reverse_survives_rescale() {
        let mut sphere = Icosphere::new(1.0, 2, true);
        sphere.reverse_normals();
        sphere.set_radius(2.0);
        assert_eq!(sphere.geometry().normals()[0], [-0.0, -0.0, -1.0]);
    }

    #[test]
    fn test_display_summary() {
        let sphere = Icosphere::new(2.0, 0, true);
        let text = sphere.to_string();
        assert!(text.starts_with("===== Icosphere ====="));
        assert!(text.contains("Radius: 2"));
        assert!(text.contains("Smoothness: true"));
        assert!(text.contains("Triangle Count: 20"));
        assert!(text.contains("Vertex Count: 22"));
    }
}
