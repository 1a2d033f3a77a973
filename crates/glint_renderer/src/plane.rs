//! Planar quad primitive.
//!
//! A plane is bounded by four vertices forming a convex, planar quad. Rays
//! that cross the infinite plane outside the quad do not hit it.

use crate::{
    error::GeometryError,
    hittable::{Hit, Hittable},
    Material, Ray,
};
use glint_math::{Interval, Vec3, EPSILON};

/// How far a vertex may sit off the face plane, relative to the quad size.
pub const PLANARITY_TOLERANCE: f32 = 1e-4;

/// A bounded planar quad.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    verts: [Vec3; 4],
    /// Unit normal, following the vertex winding (counter-clockwise = front)
    normal: Vec3,
    /// Longest edge length
    extent: f32,
    material: Material,
}

impl Plane {
    /// Create a quad from four vertices in winding order.
    pub fn new(verts: [Vec3; 4], material: Material) -> Result<Self, GeometryError> {
        if verts.iter().any(|v| !v.is_finite()) {
            return Err(GeometryError::NonFinite("quad vertex"));
        }

        // The cross product of the diagonals is robust for any quad. Its
        // length is compared against the diagonal lengths so the test does
        // not depend on the quad's scale.
        let (d0, d1) = (verts[2] - verts[0], verts[3] - verts[1]);
        let normal = d0.cross(d1);
        if normal.length() <= EPSILON * d0.length() * d1.length() {
            return Err(GeometryError::DegenerateQuad);
        }
        let normal = normal.normalize();

        let extent = (0..4)
            .map(|i| (verts[(i + 1) % 4] - verts[i]).length())
            .fold(0.0f32, f32::max);

        let centroid = centroid(&verts);
        for (index, v) in verts.iter().enumerate() {
            let distance = normal.dot(*v - centroid).abs();
            if distance > PLANARITY_TOLERANCE * extent.max(1.0) {
                return Err(GeometryError::NonPlanarQuad { index, distance });
            }
        }

        for i in 0..4 {
            let incoming = verts[(i + 1) % 4] - verts[i];
            let outgoing = verts[(i + 2) % 4] - verts[(i + 1) % 4];
            if incoming.cross(outgoing).dot(normal) <= 0.0 {
                return Err(GeometryError::NonConvexQuad((i + 1) % 4));
            }
        }

        Ok(Self {
            verts,
            normal,
            extent,
            material,
        })
    }

    pub fn verts(&self) -> &[Vec3; 4] {
        &self.verts
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Average of the four vertices.
    pub fn centroid(&self) -> Vec3 {
        centroid(&self.verts)
    }

    pub(crate) fn translate(&mut self, offset: Vec3) {
        for v in &mut self.verts {
            *v += offset;
        }
    }

    /// Point-in-quad test for a point already on the plane.
    ///
    /// Points up to `EPSILON * extent` outside an edge still count as inside,
    /// so neighbouring faces leave no cracks at any scale.
    fn contains(&self, p: Vec3) -> bool {
        (0..4).all(|i| {
            let edge = self.verts[(i + 1) % 4] - self.verts[i];
            let side = edge.cross(p - self.verts[i]).dot(self.normal);
            side >= -EPSILON * self.extent * edge.length()
        })
    }
}

impl Hittable for Plane {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<Hit<'a>> {
        let denom = self.normal.dot(ray.direction());

        // Parallel to the plane
        if denom.abs() <= EPSILON {
            return None;
        }

        let t = self.normal.dot(self.verts[0] - ray.origin()) / denom;
        if !ray_t.contains(t) {
            return None;
        }

        if !self.contains(ray.at(t)) {
            return None;
        }

        Some(Hit::new(ray, t, self.normal, &self.material))
    }
}

fn centroid(verts: &[Vec3; 4]) -> Vec3 {
    verts.iter().copied().sum::<Vec3>() / 4.0
}
