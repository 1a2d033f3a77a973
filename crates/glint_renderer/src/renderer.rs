//! Core ray tracing renderer.
//!
//! Implements a Whitted-style local lighting model with:
//! - Ambient, diffuse and Phong specular terms per light
//! - Hard shadows from point-sampled lights
//! - Mirror reflection with a bounded bounce depth
//! - Parallel per-pixel rendering with rayon

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::{
    error::{RenderError, Result, ShadeError},
    Color, Hit, Image, Ray, RenderConfig, Scene,
};
use glint_math::{reflect, Interval, VecExt};
use rayon::prelude::*;

/// Compute the color seen by a ray.
///
/// `depth` is the number of reflection bounces already taken; primary rays
/// start at 0.
pub fn trace(
    ray: &Ray,
    scene: &Scene,
    config: &RenderConfig,
    depth: u32,
) -> std::result::Result<Color, ShadeError> {
    match scene.nearest_hit(ray, Interval::FORWARD) {
        Some((object, hit)) => shade(object, &hit, scene, config, depth),
        None => Ok(config.background),
    }
}

/// Evaluate the material at a hit.
///
/// `object` is the scene index of the surface that was hit, used for error
/// reporting.
pub fn shade(
    object: usize,
    hit: &Hit<'_>,
    scene: &Scene,
    config: &RenderConfig,
    depth: u32,
) -> std::result::Result<Color, ShadeError> {
    let material = hit.material;
    let view = -hit.ray.direction().normalize();

    let mut rgb = material.ambient().truncate();

    for light in scene.light_sources() {
        let to_light = light.sample - hit.point;
        if to_light.length_squared() == 0.0 {
            continue;
        }
        if scene.is_shadowed(hit.point, hit.normal, &light, config.shadow_bias) {
            continue;
        }

        let to_light = to_light.normalize();
        let lambert = hit.normal.dot(to_light).max(0.0);
        if lambert == 0.0 {
            // Light is behind the surface
            continue;
        }

        let radiance = light.radiance();
        rgb += material.diffuse().truncate() * radiance * lambert;

        let highlight = reflect(-to_light, hit.normal)
            .dot(view)
            .max(0.0)
            .powf(config.shininess);
        rgb += material.specular().truncate() * radiance * highlight;
    }

    // Surfaces are opaque
    let mut color = rgb.to_vec4(1.0);

    let reflective = material.reflective();
    if reflective > 0.0 {
        if depth < config.max_depth {
            let bounced = trace(&hit.reflected_ray(config.shadow_bias), scene, config, depth + 1)?;
            color = color.lerp(bounced, reflective);
        } else if config.fail_on_depth_limit {
            return Err(ShadeError::DepthLimit { object });
        }
    }

    if !color.is_finite() {
        return Err(ShadeError::NonFinite { object });
    }

    Ok(color)
}

/// Render a single pixel.
pub fn render_pixel(
    scene: &Scene,
    config: &RenderConfig,
    x: u32,
    y: u32,
) -> std::result::Result<Color, RenderError> {
    let ray = scene.camera().view_ray(x, y);
    trace(&ray, scene, config, 0).map_err(|err| err.at(x, y))
}

/// Render the entire scene to an image.
///
/// Every pixel is computed independently on the rayon pool; the call returns
/// once all of them are done.
pub fn render_frame(scene: &Scene, config: &RenderConfig) -> Result<Image> {
    render_frame_cancellable(scene, config, &AtomicBool::new(false))
}

/// Like [`render_frame`], but checks `cancel` before each pixel.
///
/// Pixels already being shaded finish; no new ones start once the flag is
/// raised, and the frame is reported as [`RenderError::Cancelled`].
pub fn render_frame_cancellable(
    scene: &Scene,
    config: &RenderConfig,
    cancel: &AtomicBool,
) -> Result<Image> {
    config.validate()?;

    let camera = scene.camera();
    let mut image = Image::new(camera.width(), camera.height());

    log::debug!(
        "Rendering {}x{} on {} threads",
        image.width(),
        image.height(),
        rayon::current_num_threads()
    );
    let start = Instant::now();

    image.pixels_mut().par_iter_mut().try_for_each(|pixel| {
        if cancel.load(Ordering::Relaxed) {
            return Err(RenderError::Cancelled);
        }
        pixel.color = render_pixel(scene, config, pixel.x, pixel.y)?;
        Ok(())
    })?;

    log::info!(
        "Rendered {}x{} frame in {:.2?}",
        image.width(),
        image.height(),
        start.elapsed()
    );

    Ok(image)
}
