//! Error types for scene construction and rendering.
//!
//! Geometry and configuration problems are caught when values are built, so
//! nothing starts rendering with an invalid scene. Render errors abort the
//! frame in flight and name the pixel and object involved.

use glint_math::Vec3;
use thiserror::Error;

/// Degenerate primitive or material definitions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Sphere radius must be finite and positive, got {0}")]
    InvalidRadius(f32),

    #[error("{0} has a non-finite coordinate")]
    NonFinite(&'static str),

    #[error("Quad vertices are collinear or coincident")]
    DegenerateQuad,

    #[error("Quad vertex {index} lies {distance} off the face plane")]
    NonPlanarQuad { index: usize, distance: f32 },

    #[error("Quad is not convex at vertex {0}")]
    NonConvexQuad(usize),

    #[error("Box extent must be positive on every axis (min {min}, max {max})")]
    InvalidExtent { min: Vec3, max: Vec3 },

    #[error("Invalid material: {0}")]
    InvalidMaterial(&'static str),

    #[error("Invalid emission: {0}")]
    InvalidEmission(&'static str),
}

/// Invalid camera or render settings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Resolution must be non-zero, got {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Aspect ratio must be finite and positive, got {0}")]
    InvalidAspectRatio(f32),

    #[error("Camera eye and look-at target coincide")]
    DegenerateView,

    #[error("Vertical field of view must be in (0, 180) degrees, got {0}")]
    InvalidFieldOfView(f32),

    #[error("Maximum reflection depth must be at least 1")]
    InvalidDepth,

    #[error("Shininess must be finite and positive, got {0}")]
    InvalidShininess(f32),

    #[error("Shadow bias must be finite and positive, got {0}")]
    InvalidShadowBias(f32),
}

/// Failure while shading a single ray, before the pixel is known.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ShadeError {
    #[error("Shading object {object} produced a non-finite color")]
    NonFinite { object: usize },

    #[error("Reflection depth limit reached on object {object}")]
    DepthLimit { object: usize },
}

impl ShadeError {
    /// Attach the pixel coordinate the failing ray was cast through.
    pub fn at(self, x: u32, y: u32) -> RenderError {
        match self {
            ShadeError::NonFinite { object } => RenderError::NonFinite { x, y, object },
            ShadeError::DepthLimit { object } => RenderError::DepthLimit { x, y, object },
        }
    }
}

/// A frame could not be produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Pixel ({x}, {y}): object {object} produced a non-finite color")]
    NonFinite { x: u32, y: u32, object: usize },

    #[error("Pixel ({x}, {y}): reflection depth limit reached on object {object}")]
    DepthLimit { x: u32, y: u32, object: usize },

    #[error("Render cancelled")]
    Cancelled,

    #[error("Time step must be finite and non-negative, got {0}")]
    InvalidTimeStep(f64),
}

/// Any error the renderer can return.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Result type for renderer operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_error_carries_pixel() {
        let err = ShadeError::NonFinite { object: 3 }.at(7, 9);
        assert_eq!(err, RenderError::NonFinite { x: 7, y: 9, object: 3 });
        assert_eq!(
            err.to_string(),
            "Pixel (7, 9): object 3 produced a non-finite color"
        );
    }

    #[test]
    fn test_umbrella_conversion() {
        let err: Error = ConfigError::InvalidDepth.into();
        assert!(matches!(err, Error::Config(ConfigError::InvalidDepth)));
    }
}
