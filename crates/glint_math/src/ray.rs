use crate::{reflect, Vec3};

/// A ray in 3D space with an origin and a direction.
///
/// Rays are created per pixel by the camera and by shading (reflection and
/// shadow rays). They are read-only once created.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Mirror this ray about a surface.
    ///
    /// `normal` must be unit length. The new ray starts at `point` pushed
    /// `bias` along the normal so it does not immediately re-hit the surface
    /// it leaves.
    pub fn reflect(&self, point: Vec3, normal: Vec3, bias: f32) -> Ray {
        let direction = reflect(self.direction.normalize(), normal);
        Ray::new(point + normal * bias, direction)
    }
}
