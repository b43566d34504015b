//! # Graphics Module
//!
//! Graphics-side functionality of the crate. Currently this is procedural
//! geometry generation ([`geometry`]): the CPU side of a mesh, producing the
//! vertex and index arrays a renderer uploads and draws.
//!
//! ## Usage
//!
//! ```rust
//! use meshgen::gfx::geometry::Icosphere;
//!
//! let sphere = Icosphere::new(1.0, 4, true);
//! let indices: &[u32] = sphere.geometry().indices();
//! assert_eq!(indices.len(), 60 * 16);
//! ```

pub mod geometry;

// Re-export commonly used types
pub use geometry::{GeometryData, Icosphere};
