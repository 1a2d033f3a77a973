//! Surface material used by the local lighting model.

use crate::error::GeometryError;
use glint_math::{Vec3, Vec4};

/// Color type alias (RGBA values typically 0-1)
pub type Color = Vec4;

/// Ambient, diffuse, specular and mirror coefficients of a surface.
///
/// Only the RGB parts of the color terms take part in shading; the alpha
/// channel is carried for callers that store extra data there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    ambient: Color,
    specular: Color,
    diffuse: Color,
    reflective: f32,
}

impl Material {
    /// Create a new material.
    ///
    /// - `reflective`: Mirror blend, 0.0 = no reflection, 1.0 = perfect mirror
    pub fn new(
        ambient: Color,
        specular: Color,
        diffuse: Color,
        reflective: f32,
    ) -> Result<Self, GeometryError> {
        if !(ambient.is_finite() && specular.is_finite() && diffuse.is_finite()) {
            return Err(GeometryError::InvalidMaterial("color terms must be finite"));
        }
        if !(0.0..=1.0).contains(&reflective) {
            return Err(GeometryError::InvalidMaterial(
                "reflective coefficient must be in [0, 1]",
            ));
        }

        Ok(Self {
            ambient,
            specular,
            diffuse,
            reflective,
        })
    }

    /// A dull surface of the given color with a faint highlight.
    pub fn matte(color: Vec3) -> Self {
        Self {
            ambient: (color * 0.1).extend(1.0),
            specular: Vec4::new(0.2, 0.2, 0.2, 1.0),
            diffuse: color.extend(1.0),
            reflective: 0.0,
        }
    }

    /// A polished mirror.
    pub fn mirror() -> Self {
        Self {
            ambient: Vec4::ZERO,
            specular: Vec4::ONE,
            diffuse: Vec4::new(0.05, 0.05, 0.05, 1.0),
            reflective: 0.9,
        }
    }

    pub fn ambient(&self) -> Color {
        self.ambient
    }

    pub fn specular(&self) -> Color {
        self.specular
    }

    pub fn diffuse(&self) -> Color {
        self.diffuse
    }

    pub fn reflective(&self) -> f32 {
        self.reflective
    }
}
