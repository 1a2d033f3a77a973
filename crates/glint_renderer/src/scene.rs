//! Scene: camera, objects and the lights among them.

use crate::{
    error::{GeometryError, RenderError},
    hittable::{Hit, Hittable},
    Camera, LightSource, Ray, SceneObject,
};
use glint_math::{Interval, Vec3};

/// Everything a frame is rendered from.
///
/// The object list is fixed once the scene is built, so the light index
/// computed here stays valid for the scene's lifetime. Updates move objects
/// and the camera but never add or remove objects.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    camera: Camera,
    objects: Vec<SceneObject>,
    /// Indices into `objects` of every emitting object
    lights: Vec<usize>,
    /// World units per second the camera moves on each update
    camera_velocity: Vec3,
    /// Seconds of animation applied so far
    time: f64,
}

impl Scene {
    /// Create a new scene.
    pub fn new(camera: Camera, objects: Vec<SceneObject>) -> Self {
        let lights: Vec<usize> = objects
            .iter()
            .enumerate()
            .filter(|(_, object)| object.is_light())
            .map(|(index, _)| index)
            .collect();

        log::debug!(
            "Scene built: {} objects, {} lights, {}x{} camera",
            objects.len(),
            lights.len(),
            camera.width(),
            camera.height()
        );
        if lights.is_empty() {
            log::warn!("Scene has no light sources; only ambient terms will be visible");
        }

        Self {
            camera,
            objects,
            lights,
            camera_velocity: Vec3::ZERO,
            time: 0.0,
        }
    }

    /// Move the camera at a constant velocity during updates.
    pub fn with_camera_velocity(mut self, velocity: Vec3) -> Result<Self, GeometryError> {
        if !velocity.is_finite() {
            return Err(GeometryError::NonFinite("camera velocity"));
        }
        self.camera_velocity = velocity;
        Ok(self)
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Seconds of animation applied so far.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Every emitting object, in object-list order.
    pub fn light_sources(&self) -> impl Iterator<Item = LightSource> + '_ {
        self.lights.iter().filter_map(move |&index| {
            let object = &self.objects[index];
            object.emission().map(|emission| LightSource {
                index,
                light: emission.light(),
                sample: object.shape().sample_point(),
            })
        })
    }

    /// Find the closest non-emitting object along `ray`.
    ///
    /// Lights are skipped: they are not drawn. On equal distances the object
    /// listed first wins.
    pub fn nearest_hit(&self, ray: &Ray, ray_t: Interval) -> Option<(usize, Hit<'_>)> {
        let mut nearest: Option<(usize, Hit<'_>)> = None;

        for (index, object) in self.objects.iter().enumerate() {
            if object.is_light() {
                continue;
            }
            let closest_so_far = nearest
                .as_ref()
                .map_or(ray_t, |(_, best)| ray_t.with_max(best.t));
            if let Some(hit) = object.shape().hit(ray, closest_so_far) {
                if nearest.as_ref().map_or(true, |(_, best)| hit.t < best.t) {
                    nearest = Some((index, hit));
                }
            }
        }

        nearest
    }

    /// True when something blocks the segment from `point` to the light.
    ///
    /// The shadow ray starts `bias` along `normal` so the surface does not
    /// shadow itself. Lights never block other lights.
    pub fn is_shadowed(&self, point: Vec3, normal: Vec3, light: &LightSource, bias: f32) -> bool {
        let origin = point + normal * bias;
        // Unnormalized so t = 1 lands on the light sample
        let ray = Ray::new(origin, light.sample - origin);
        let segment = Interval::new(0.0, 1.0);

        self.objects
            .iter()
            .filter(|object| !object.is_light())
            .any(|object| object.shape().hit(&ray, segment).is_some())
    }

    /// Advance the scene by `dt` seconds.
    pub fn update(&mut self, dt: f64) -> Result<(), RenderError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(RenderError::InvalidTimeStep(dt));
        }

        for object in &mut self.objects {
            object.advance(dt as f32);
        }
        if self.camera_velocity != Vec3::ZERO {
            self.camera.translate(self.camera_velocity * dt as f32);
        }
        self.time += dt;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Emission, Material, Plane, Sphere};
    use glint_math::ApproxEq;

    fn camera() -> Camera {
        Camera::from_resolution(Vec3::ZERO, Vec3::NEG_Z, 4, 4).unwrap()
    }

    fn sphere(center: Vec3, radius: f32) -> SceneObject {
        SceneObject::new(Sphere::new(center, radius, Material::matte(Vec3::ONE)).unwrap())
    }

    fn light(center: Vec3) -> SceneObject {
        sphere(center, 0.25).with_emission(Emission::white(1.0).unwrap())
    }

    #[test]
    fn test_light_sources_are_indexed_once() {
        let scene = Scene::new(
            camera(),
            vec![
                sphere(Vec3::new(0.0, 0.0, -5.0), 1.0),
                light(Vec3::new(0.0, 5.0, 0.0)),
                light(Vec3::new(5.0, 0.0, 0.0)),
            ],
        );

        let lights: Vec<LightSource> = scene.light_sources().collect();
        assert_eq!(lights.len(), 2);
        assert_eq!(lights[0].index, 1);
        assert_eq!(lights[1].index, 2);
        assert!(lights[0].sample.approx_eq(&Vec3::new(0.0, 5.0, 0.0)));
    }

    #[test]
    fn test_nearest_hit_picks_closest() {
        let scene = Scene::new(
            camera(),
            vec![
                sphere(Vec3::new(0.0, 0.0, -10.0), 1.0),
                sphere(Vec3::new(0.0, 0.0, -5.0), 1.0),
            ],
        );
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let (index, hit) = scene.nearest_hit(&ray, Interval::FORWARD).unwrap();
        assert_eq!(index, 1);
        assert!(hit.t.approx_eq(&4.0));
    }

    #[test]
    fn test_nearest_hit_skips_lights() {
        let scene = Scene::new(
            camera(),
            vec![
                light(Vec3::new(0.0, 0.0, -2.0)),
                sphere(Vec3::new(0.0, 0.0, -5.0), 1.0),
            ],
        );
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let (index, _) = scene.nearest_hit(&ray, Interval::FORWARD).unwrap();
        assert_eq!(index, 1);
    }

    #[test]
    fn test_nearest_hit_ties_go_to_first() {
        let quad = |z: f32| {
            SceneObject::new(
                Plane::new(
                    [
                        Vec3::new(-1.0, -1.0, z),
                        Vec3::new(1.0, -1.0, z),
                        Vec3::new(1.0, 1.0, z),
                        Vec3::new(-1.0, 1.0, z),
                    ],
                    Material::matte(Vec3::ONE),
                )
                .unwrap(),
            )
        };
        let scene = Scene::new(camera(), vec![quad(-3.0), quad(-3.0)]);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let (index, _) = scene.nearest_hit(&ray, Interval::FORWARD).unwrap();
        assert_eq!(index, 0);
    }

    #[test]
    fn test_shadow_blocked_by_occluder() {
        let lamp = light(Vec3::new(0.0, 10.0, 0.0));
        let blocker = sphere(Vec3::new(0.0, 5.0, 0.0), 1.0);

        let open = Scene::new(camera(), vec![lamp.clone()]);
        let blocked = Scene::new(camera(), vec![lamp, blocker]);

        let open_light = open.light_sources().next().unwrap();
        let blocked_light = blocked.light_sources().next().unwrap();

        assert!(!open.is_shadowed(Vec3::ZERO, Vec3::Y, &open_light, 1e-4));
        assert!(blocked.is_shadowed(Vec3::ZERO, Vec3::Y, &blocked_light, 1e-4));
    }

    #[test]
    fn test_objects_beyond_light_do_not_shadow() {
        let scene = Scene::new(
            camera(),
            vec![
                light(Vec3::new(0.0, 5.0, 0.0)),
                sphere(Vec3::new(0.0, 10.0, 0.0), 1.0),
            ],
        );
        let lamp = scene.light_sources().next().unwrap();

        assert!(!scene.is_shadowed(Vec3::ZERO, Vec3::Y, &lamp, 1e-4));
    }

    #[test]
    fn test_lights_do_not_shadow() {
        let scene = Scene::new(
            camera(),
            vec![
                light(Vec3::new(0.0, 10.0, 0.0)),
                light(Vec3::new(0.0, 5.0, 0.0)),
            ],
        );
        let far = scene.light_sources().next().unwrap();

        assert!(!scene.is_shadowed(Vec3::ZERO, Vec3::Y, &far, 1e-4));
    }

    #[test]
    fn test_update_moves_objects_and_lights() {
        let mover = sphere(Vec3::ZERO, 1.0)
            .with_velocity(Vec3::new(0.0, 0.0, -1.0))
            .unwrap();
        let lamp = light(Vec3::ZERO).with_velocity(Vec3::X).unwrap();
        let mut scene = Scene::new(camera(), vec![mover, lamp]);

        scene.update(2.0).unwrap();

        assert!(scene.objects()[0]
            .shape()
            .sample_point()
            .approx_eq(&Vec3::new(0.0, 0.0, -2.0)));
        let lamp = scene.light_sources().next().unwrap();
        assert!(lamp.sample.approx_eq(&Vec3::new(2.0, 0.0, 0.0)));
        assert_eq!(scene.time(), 2.0);
    }

    #[test]
    fn test_update_moves_camera() {
        let mut scene = Scene::new(camera(), vec![])
            .with_camera_velocity(Vec3::new(0.0, 1.0, 0.0))
            .unwrap();

        scene.update(0.5).unwrap();

        assert!(scene.camera().eye().approx_eq(&Vec3::new(0.0, 0.5, 0.0)));
        assert!(scene
            .camera()
            .look_at()
            .approx_eq(&Vec3::new(0.0, 0.5, -1.0)));
    }

    #[test]
    fn test_camera_velocity_must_be_finite() {
        let result = Scene::new(camera(), vec![]).with_camera_velocity(Vec3::splat(f32::NAN));
        assert_eq!(result, Err(GeometryError::NonFinite("camera velocity")));
    }

    #[test]
    fn test_update_rejects_bad_dt() {
        let mut scene = Scene::new(camera(), vec![]);
        assert_eq!(scene.update(-1.0), Err(RenderError::InvalidTimeStep(-1.0)));
        assert!(scene.update(f64::NAN).is_err());
        assert_eq!(scene.time(), 0.0);
    }
}
