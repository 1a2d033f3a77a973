//! Camera for primary ray generation.

use crate::error::ConfigError;
use crate::Ray;
use glint_math::{Vec3, EPSILON};

/// Vertical field of view used unless overridden with [`Camera::with_vfov`].
pub const DEFAULT_VFOV_DEGREES: f32 = 60.0;

/// Relative aspect-ratio mismatch tolerated without a warning.
const ASPECT_MISMATCH_WARN: f32 = 0.01;

/// Pinhole camera projecting pixels to world-space rays.
///
/// Pixel (0, 0) is the top-left corner of the image; rays pass through
/// pixel centers.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    eye: Vec3,
    look_at: Vec3,
    aspect_ratio: f32,
    width: u32,
    height: u32,
    vfov_degrees: f32,

    // Cached computed values (set by initialize())
    pixel00_loc: Vec3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
}

impl Camera {
    /// Create a camera with an explicit aspect ratio.
    ///
    /// The aspect ratio is kept as given even if it disagrees with
    /// `width / height`; a mismatch is logged.
    pub fn new(
        eye: Vec3,
        look_at: Vec3,
        aspect_ratio: f32,
        width: u32,
        height: u32,
    ) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidResolution { width, height });
        }
        if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
            return Err(ConfigError::InvalidAspectRatio(aspect_ratio));
        }
        if !(eye.is_finite() && look_at.is_finite())
            || (look_at - eye).length_squared() <= EPSILON
        {
            return Err(ConfigError::DegenerateView);
        }

        let pixel_aspect = width as f32 / height as f32;
        if ((aspect_ratio - pixel_aspect) / pixel_aspect).abs() > ASPECT_MISMATCH_WARN {
            log::warn!(
                "Camera aspect ratio {:.3} differs from resolution {}x{} ({:.3}); image will be stretched",
                aspect_ratio,
                width,
                height,
                pixel_aspect
            );
        }

        let mut camera = Self {
            eye,
            look_at,
            aspect_ratio,
            width,
            height,
            vfov_degrees: DEFAULT_VFOV_DEGREES,
            pixel00_loc: Vec3::ZERO,
            pixel_delta_u: Vec3::ZERO,
            pixel_delta_v: Vec3::ZERO,
        };
        camera.initialize();
        Ok(camera)
    }

    /// Create a camera whose aspect ratio follows the resolution.
    pub fn from_resolution(
        eye: Vec3,
        look_at: Vec3,
        width: u32,
        height: u32,
    ) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidResolution { width, height });
        }
        Self::new(eye, look_at, width as f32 / height as f32, width, height)
    }

    /// Set the vertical field of view in degrees.
    pub fn with_vfov(mut self, vfov_degrees: f32) -> Result<Self, ConfigError> {
        if !(vfov_degrees > 0.0 && vfov_degrees < 180.0) {
            return Err(ConfigError::InvalidFieldOfView(vfov_degrees));
        }
        self.vfov_degrees = vfov_degrees;
        self.initialize();
        Ok(self)
    }

    /// Move the eye and target together, keeping the view direction.
    pub(crate) fn translate(&mut self, offset: Vec3) {
        self.eye += offset;
        self.look_at += offset;
        self.initialize();
    }

    /// Recompute the pixel grid from the current settings.
    fn initialize(&mut self) {
        // Image plane sits one unit in front of the eye
        let theta = self.vfov_degrees.to_radians();
        let viewport_height = 2.0 * (theta / 2.0).tan();
        let viewport_width = viewport_height * self.aspect_ratio;

        // Calculate camera basis vectors
        let w = (self.eye - self.look_at).normalize();
        let vup = if w.cross(Vec3::Y).length_squared() <= EPSILON {
            // Looking straight up or down
            Vec3::Z
        } else {
            Vec3::Y
        };
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        // Calculate viewport vectors
        let viewport_u = viewport_width * u;
        let viewport_v = -viewport_height * v;

        // Calculate pixel delta vectors
        self.pixel_delta_u = viewport_u / self.width as f32;
        self.pixel_delta_v = viewport_v / self.height as f32;

        // Calculate upper left pixel location
        let viewport_upper_left = self.eye - w - viewport_u / 2.0 - viewport_v / 2.0;
        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);
    }

    /// Generate the ray through the center of pixel (x, y).
    ///
    /// `x` must be below `width` and `y` below `height`. The direction is
    /// unit length.
    pub fn view_ray(&self, x: u32, y: u32) -> Ray {
        debug_assert!(x < self.width && y < self.height);

        let pixel_center =
            self.pixel00_loc + (x as f32) * self.pixel_delta_u + (y as f32) * self.pixel_delta_v;

        Ray::new(self.eye, (pixel_center - self.eye).normalize())
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn vfov_degrees(&self) -> f32 {
        self.vfov_degrees
    }
}
