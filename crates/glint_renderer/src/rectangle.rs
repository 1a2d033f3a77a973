//! Closed box built from six quads.

use crate::{
    error::GeometryError,
    hittable::{Hit, Hittable},
    Material, Plane, Ray,
};
use glint_math::{Interval, Vec3};

/// A box made of exactly six faces.
///
/// Intersection is delegated to the faces; the nearest face hit wins, with
/// ties going to the face listed first.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    planes: [Plane; 6],
}

impl Rectangle {
    /// Build from six already-validated faces.
    ///
    /// The faces are expected to enclose a volume; this is not checked.
    pub fn new(planes: [Plane; 6]) -> Self {
        Self { planes }
    }

    /// Axis-aligned box spanning `min` to `max`, every face sharing `material`.
    ///
    /// Faces are ordered -X, +X, -Y, +Y, -Z, +Z and wound so their normals
    /// point outward.
    pub fn from_bounds(min: Vec3, max: Vec3, material: Material) -> Result<Self, GeometryError> {
        if !(min.is_finite() && max.is_finite()) {
            return Err(GeometryError::NonFinite("box bounds"));
        }
        if max.cmple(min).any() {
            return Err(GeometryError::InvalidExtent { min, max });
        }

        let (x0, y0, z0) = (min.x, min.y, min.z);
        let (x1, y1, z1) = (max.x, max.y, max.z);
        let v = Vec3::new;

        let planes = [
            Plane::new([v(x0, y0, z0), v(x0, y0, z1), v(x0, y1, z1), v(x0, y1, z0)], material)?,
            Plane::new([v(x1, y0, z0), v(x1, y1, z0), v(x1, y1, z1), v(x1, y0, z1)], material)?,
            Plane::new([v(x0, y0, z0), v(x1, y0, z0), v(x1, y0, z1), v(x0, y0, z1)], material)?,
            Plane::new([v(x0, y1, z0), v(x0, y1, z1), v(x1, y1, z1), v(x1, y1, z0)], material)?,
            Plane::new([v(x0, y0, z0), v(x0, y1, z0), v(x1, y1, z0), v(x1, y0, z0)], material)?,
            Plane::new([v(x0, y0, z1), v(x1, y0, z1), v(x1, y1, z1), v(x0, y1, z1)], material)?,
        ];

        Ok(Self { planes })
    }

    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// Average of the face centroids.
    pub fn center(&self) -> Vec3 {
        self.planes.iter().map(Plane::centroid).sum::<Vec3>() / 6.0
    }

    pub(crate) fn translate(&mut self, offset: Vec3) {
        for plane in &mut self.planes {
            plane.translate(offset);
        }
    }
}

impl Hittable for Rectangle {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<Hit<'a>> {
        let mut nearest: Option<Hit<'a>> = None;

        for plane in &self.planes {
            if let Some(hit) = plane.hit(ray, ray_t) {
                // Strict comparison keeps the lowest face index on ties
                if nearest.map_or(true, |best| hit.t < best.t) {
                    nearest = Some(hit);
                }
            }
        }

        nearest
    }
}
