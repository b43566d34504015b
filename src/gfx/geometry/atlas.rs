//! # Icosphere Texture Atlas
//!
//! The icosphere unwraps its 20 faces into a strip of triangles laid out on a
//! texture: 11 half-triangle columns horizontally and 3 rows vertically. The
//! atlas stores the size of one horizontal and one vertical step in texture
//! space; every texture coordinate the builders emit is a multiple (or an
//! interpolation) of these two steps.
//!
//! ```text
//!  S  3S  5S  7S  9S            t = 0
//!  /\  /\  /\  /\  /\
//! /__\/__\/__\/__\/__\          t = T
//! \  /\  /\  /\  /\  /\
//!  \/__\/__\/__\/__\/__\        t = 2T
//!   \  /\  /\  /\  /\  /
//!    \/  \/  \/  \/  \/         t = 3T
//!   2S  4S  6S  8S  10S
//! ```

use crate::error::GeometryError;

/// Horizontal and vertical texture steps of the icosphere unwrap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureAtlas {
    /// Width of half a triangle in texture space
    pub s_step: f32,
    /// Height of one triangle row in texture space
    pub t_step: f32,
}

impl TextureAtlas {
    /// Layout of the 2048x1024 icosphere texture (186 px columns, 322 px rows).
    pub const PIXEL_ALIGNED: TextureAtlas = TextureAtlas {
        s_step: 186.0 / 2048.0,
        t_step: 322.0 / 1024.0,
    };

    /// Layout spanning the whole texture: 11 columns by 3 rows.
    pub const UNIFORM: TextureAtlas = TextureAtlas {
        s_step: 1.0 / 11.0,
        t_step: 1.0 / 3.0,
    };

    pub fn new(s_step: f32, t_step: f32) -> Self {
        Self { s_step, t_step }
    }

    /// Texture coordinate `(s_mul * S, t_mul * T)`.
    #[inline]
    pub fn coord(&self, s_mul: f32, t_mul: f32) -> [f32; 2] {
        [self.s_step * s_mul, self.t_step * t_mul]
    }

    /// Checks that both steps are finite and positive.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let valid = |step: f32| step.is_finite() && step > 0.0;
        if valid(self.s_step) && valid(self.t_step) {
            Ok(())
        } else {
            Err(GeometryError::InvalidAtlas {
                s_step: self.s_step,
                t_step: self.t_step,
            })
        }
    }
}

impl Default for TextureAtlas {
    fn default() -> Self {
        Self::PIXEL_ALIGNED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_atlas() {
        let atlas = TextureAtlas::default();
        assert_eq!(atlas, TextureAtlas::PIXEL_ALIGNED);
        assert_eq!(atlas.s_step, 186.0 / 2048.0);
        assert_eq!(atlas.t_step, 322.0 / 1024.0);
    }

    #[test]
    fn test_coord() {
        let atlas = TextureAtlas::new(0.25, 0.5);
        assert_eq!(atlas.coord(3.0, 1.0), [0.75, 0.5]);
    }

    #[test]
    fn test_validate() {
        assert!(TextureAtlas::UNIFORM.validate().is_ok());
        assert!(TextureAtlas::new(0.0, 0.5).validate().is_err());
        assert!(TextureAtlas::new(0.1, f32::NAN).validate().is_err());
    }
}
