//! Render settings.

use crate::error::ConfigError;
use glint_math::Vec4;
use serde::{Deserialize, Serialize};

/// Phong exponent used when none is configured.
pub const DEFAULT_SHININESS: f32 = 32.0;

/// Reflection bounces traced when none is configured.
pub const DEFAULT_MAX_DEPTH: u32 = 4;

/// Offset applied along the normal when spawning secondary rays.
pub const DEFAULT_SHADOW_BIAS: f32 = 1e-4;

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Maximum number of reflection bounces per primary ray
    pub max_depth: u32,
    /// Specular exponent shared by every material
    pub shininess: f32,
    /// Offset for shadow and reflection ray origins
    pub shadow_bias: f32,
    /// Color of pixels whose ray hits nothing
    pub background: Vec4,
    /// Treat hitting `max_depth` on a reflective surface as an error
    pub fail_on_depth_limit: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            shininess: DEFAULT_SHININESS,
            shadow_bias: DEFAULT_SHADOW_BIAS,
            background: Vec4::ZERO,
            fail_on_depth_limit: false,
        }
    }
}

impl RenderConfig {
    /// Check the settings before any rendering starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidDepth);
        }
        if !self.shininess.is_finite() || self.shininess <= 0.0 {
            return Err(ConfigError::InvalidShininess(self.shininess));
        }
        // A zero bias lets secondary rays re-hit the surface they leave
        if !self.shadow_bias.is_finite() || self.shadow_bias <= 0.0 {
            return Err(ConfigError::InvalidShadowBias(self.shadow_bias));
        }
        Ok(())
    }
}

/// How many frames an animation run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderProperties {
    pub frames: usize,
}

impl RenderProperties {
    pub fn new(frames: usize) -> Self {
        Self { frames }
    }
}
