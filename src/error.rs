//! Error types for mesh generation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("radius must be finite and > 0.0, got {0}")]
    InvalidRadius(f32),
    #[error("subdivision {requested} exceeds the maximum of {max}")]
    SubdivisionTooLarge { requested: u32, max: u32 },
    #[error("texture atlas steps must be finite and > 0.0, got ({s_step}, {t_step})")]
    InvalidAtlas { s_step: f32, t_step: f32 },
}
