//! # Meshgen Prelude
//!
//! This module provides a convenient way to import commonly used types from
//! the crate.
//!
//! ## Usage
//!
//! ```rust
//! use meshgen::prelude::*;
//!
//! let sphere = Icosphere::new(1.0, 2, true);
//! let vertices: &[Vertex3D] = sphere.geometry().interleaved();
//! assert_eq!(vertices.len(), sphere.geometry().vertex_count());
//! ```

// Re-export geometry types
pub use crate::gfx::geometry::{
    build_icosphere, GeometryData, Icosphere, IcosphereParams, TextureAtlas, Vertex3D,
    MAX_SUBDIVISION,
};

// Re-export error types
pub use crate::error::GeometryError;
