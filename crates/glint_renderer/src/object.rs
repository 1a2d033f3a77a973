//! Scene objects: a shape plus optional light emission and motion.

use crate::{
    error::GeometryError,
    hittable::{Hit, Hittable},
    Plane, Ray, Rectangle, Sphere,
};
use glint_math::{Interval, Vec3, Vec4};

/// The geometric primitive kinds the renderer knows about.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Rectangle(Rectangle),
}

impl Shape {
    /// Representative point used when sampling this shape as a light.
    pub fn sample_point(&self) -> Vec3 {
        match self {
            Shape::Sphere(sphere) => sphere.center(),
            Shape::Plane(plane) => plane.centroid(),
            Shape::Rectangle(rect) => rect.center(),
        }
    }

    pub(crate) fn translate(&mut self, offset: Vec3) {
        match self {
            Shape::Sphere(sphere) => sphere.translate(offset),
            Shape::Plane(plane) => plane.translate(offset),
            Shape::Rectangle(rect) => rect.translate(offset),
        }
    }
}

impl Hittable for Shape {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<Hit<'a>> {
        match self {
            Shape::Sphere(sphere) => sphere.hit(ray, ray_t),
            Shape::Plane(plane) => plane.hit(ray, ray_t),
            Shape::Rectangle(rect) => rect.hit(ray, ray_t),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

/// Light emitted by an object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emission {
    color: Vec3,
    intensity: f32,
}

impl Emission {
    /// Color and intensity must be finite and non-negative.
    pub fn new(color: Vec3, intensity: f32) -> Result<Self, GeometryError> {
        if !color.is_finite() || color.min_element() < 0.0 {
            return Err(GeometryError::InvalidEmission(
                "color must be finite and non-negative",
            ));
        }
        if !intensity.is_finite() || intensity < 0.0 {
            return Err(GeometryError::InvalidEmission(
                "intensity must be finite and non-negative",
            ));
        }
        Ok(Self { color, intensity })
    }

    /// White light of the given intensity.
    pub fn white(intensity: f32) -> Result<Self, GeometryError> {
        Self::new(Vec3::ONE, intensity)
    }

    /// Packed as (R, G, B, intensity).
    pub fn light(&self) -> Vec4 {
        self.color.extend(self.intensity)
    }
}

/// A light as seen by shading: where to sample it and what it emits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSource {
    /// Index of the emitting object in the scene
    pub index: usize,
    /// (R, G, B, intensity)
    pub light: Vec4,
    /// Point shadow rays aim at
    pub sample: Vec3,
}

impl LightSource {
    /// Color scaled by intensity.
    pub fn radiance(&self) -> Vec3 {
        self.light.truncate() * self.light.w
    }
}

/// One entry in the scene's object list.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    shape: Shape,
    emission: Option<Emission>,
    /// World units per second, applied on each scene update
    velocity: Vec3,
}

impl SceneObject {
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
            emission: None,
            velocity: Vec3::ZERO,
        }
    }

    /// Turn this object into a light.
    ///
    /// Lights are not drawn and never cast shadows.
    pub fn with_emission(mut self, emission: Emission) -> Self {
        self.emission = Some(emission);
        self
    }

    /// Give this object a constant velocity.
    pub fn with_velocity(mut self, velocity: Vec3) -> Result<Self, GeometryError> {
        if !velocity.is_finite() {
            return Err(GeometryError::NonFinite("object velocity"));
        }
        self.velocity = velocity;
        Ok(self)
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn emission(&self) -> Option<&Emission> {
        self.emission.as_ref()
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn is_light(&self) -> bool {
        self.emission.is_some()
    }

    /// Advance this object by `dt` seconds of motion.
    pub(crate) fn advance(&mut self, dt: f32) {
        if self.velocity != Vec3::ZERO {
            self.shape.translate(self.velocity * dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Material;
    use glint_math::ApproxEq;

    fn sphere_at(center: Vec3) -> Sphere {
        Sphere::new(center, 0.5, Material::matte(Vec3::ONE)).unwrap()
    }

    #[test]
    fn test_emission_packing() {
        let emission = Emission::new(Vec3::new(1.0, 0.5, 0.25), 2.0).unwrap();
        assert!(emission.light().approx_eq(&Vec4::new(1.0, 0.5, 0.25, 2.0)));
    }

    #[test]
    fn test_emission_rejects_negative() {
        assert!(Emission::new(Vec3::new(-1.0, 0.0, 0.0), 1.0).is_err());
        assert!(Emission::white(-1.0).is_err());
        assert!(Emission::white(f32::NAN).is_err());
    }

    #[test]
    fn test_light_flag() {
        let plain = SceneObject::new(sphere_at(Vec3::ZERO));
        assert!(!plain.is_light());

        let light = plain.with_emission(Emission::white(1.0).unwrap());
        assert!(light.is_light());
        assert!(light.shape().sample_point().approx_eq(&Vec3::ZERO));
    }

    #[test]
    fn test_advance_moves_shape() {
        let mut object = SceneObject::new(sphere_at(Vec3::ZERO))
            .with_velocity(Vec3::new(2.0, 0.0, 0.0))
            .unwrap();

        object.advance(0.5);
        assert!(object.shape().sample_point().approx_eq(&Vec3::X));
    }

    #[test]
    fn test_shape_dispatch() {
        let shape: Shape = sphere_at(Vec3::new(0.0, 0.0, -3.0)).into();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let hit = shape.hit(&ray, Interval::FORWARD).unwrap();
        assert!(hit.t.approx_eq(&2.5));
    }
}
