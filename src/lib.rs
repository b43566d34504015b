// src/lib.rs
//! Meshgen
//!
//! Procedural mesh generation for real-time 3D rendering. Builds icospheres
//! with flat or smooth shading, seam-aware texture coordinates, wireframe
//! edges and interleaved vertex buffers ready for GPU upload.

pub mod error;
pub mod gfx;
pub mod prelude;

// Re-export main types for convenience
pub use error::GeometryError;
pub use gfx::geometry::{GeometryData, Icosphere, IcosphereParams};

/// Creates the default icosphere: unit radius, plain icosahedron, smooth shaded
pub fn default() -> Icosphere {
    Icosphere::default()
}
