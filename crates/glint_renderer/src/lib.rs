//! Glint Renderer - CPU ray tracing
//!
//! A deterministic, parallel brute-force ray tracer: one ray per pixel,
//! nearest-hit search over every object, and a local ambient + diffuse +
//! specular + mirror lighting model with hard shadows.

mod animation;
mod camera;
mod config;
mod error;
mod hittable;
mod image;
mod material;
mod object;
mod plane;
mod rectangle;
mod renderer;
mod scene;
mod sphere;

pub use animation::{run_animation, Clock, FrameRenderer, ManualClock, Renderable, SystemClock};
pub use camera::{Camera, DEFAULT_VFOV_DEGREES};
pub use config::{
    RenderConfig, RenderProperties, DEFAULT_MAX_DEPTH, DEFAULT_SHADOW_BIAS, DEFAULT_SHININESS,
};
pub use error::{ConfigError, Error, GeometryError, RenderError, Result, ShadeError};
pub use hittable::{Hit, Hittable};
pub use image::{Image, Pixel};
pub use material::{Color, Material};
pub use object::{Emission, LightSource, SceneObject, Shape};
pub use plane::{Plane, PLANARITY_TOLERANCE};
pub use rectangle::Rectangle;
pub use renderer::{render_frame, render_frame_cancellable, render_pixel, shade, trace};
pub use scene::Scene;
pub use sphere::Sphere;

/// Re-export vector and ray types from glint_math
pub use glint_math::{Interval, Ray, Vec3, Vec4};
