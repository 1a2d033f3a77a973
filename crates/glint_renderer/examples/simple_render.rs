//! Simple ray tracer example.
//!
//! Renders a short animation of a sphere rolling past a mirror box while
//! the camera drifts forward, then prints the last frame to the terminal as
//! ASCII shading.

use glint_renderer::{
    run_animation, Camera, Emission, FrameRenderer, Image, Material, Plane, Rectangle,
    RenderConfig, RenderProperties, Scene, SceneObject, Sphere, SystemClock, Vec3,
};

const WIDTH: u32 = 72;
const HEIGHT: u32 = 36;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // Build the scene
    let start = std::time::Instant::now();
    let scene = build_scene()?;
    println!("Scene built in {:?}", start.elapsed());

    let mut renderer = FrameRenderer::new(scene, RenderConfig::default())?;
    let frames = run_animation(
        &mut renderer,
        &RenderProperties::new(4),
        &mut SystemClock::new(),
    )?;

    if let Some(last) = frames.last() {
        print_ascii(last);
    }

    Ok(())
}

fn build_scene() -> anyhow::Result<Scene> {
    // Terminal cells are about twice as tall as wide
    let camera = Camera::new(
        Vec3::new(0.0, 3.0, 8.0),
        Vec3::new(0.0, 0.5, 0.0),
        WIDTH as f32 / HEIGHT as f32 / 2.0,
        WIDTH,
        HEIGHT,
    )?
    .with_vfov(50.0)?;

    let floor = Plane::new(
        [
            Vec3::new(-6.0, 0.0, -6.0),
            Vec3::new(-6.0, 0.0, 6.0),
            Vec3::new(6.0, 0.0, 6.0),
            Vec3::new(6.0, 0.0, -6.0),
        ],
        Material::matte(Vec3::new(0.6, 0.6, 0.6)),
    )?;

    let ball = Sphere::new(
        Vec3::new(-2.5, 0.75, 1.0),
        0.75,
        Material::matte(Vec3::new(0.9, 0.2, 0.2)),
    )?;

    let mirror_box = Rectangle::from_bounds(
        Vec3::new(0.5, 0.0, -2.0),
        Vec3::new(2.5, 2.0, -1.0),
        Material::mirror(),
    )?;

    let lamp = Sphere::new(Vec3::new(-3.0, 6.0, 4.0), 0.5, Material::matte(Vec3::ONE))?;

    // Slow dolly toward the mirror while the ball rolls
    let scene = Scene::new(
        camera,
        vec![
            SceneObject::new(floor),
            SceneObject::new(ball).with_velocity(Vec3::new(20.0, 0.0, 0.0))?,
            SceneObject::new(mirror_box),
            SceneObject::new(lamp).with_emission(Emission::white(1.2)?),
        ],
    )
    .with_camera_velocity(Vec3::new(0.0, 0.0, -5.0))?;

    Ok(scene)
}

fn print_ascii(image: &Image) {
    const RAMP: &[u8] = b" .:-=+*#%@";

    for y in 0..image.height() {
        let row: String = (0..image.width())
            .map(|x| {
                let color = image.color(x, y).unwrap_or_default();
                let luma = 0.2126 * color.x + 0.7152 * color.y + 0.0722 * color.z;
                let level = (luma.clamp(0.0, 1.0) * (RAMP.len() - 1) as f32).round() as usize;
                RAMP[level] as char
            })
            .collect();
        println!("{row}");
    }
}
