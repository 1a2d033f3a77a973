//! Frame loop: advance the scene, render, repeat.

use std::time::{Duration, Instant};

use crate::{error::Result, render_frame, Image, RenderConfig, RenderProperties, Scene};

/// Source of monotonic time for the frame loop.
pub trait Clock {
    /// Time since some fixed starting point.
    fn now(&mut self) -> Duration;
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&mut self) -> Duration {
        self.start.elapsed()
    }
}

/// Clock that advances by a fixed step every time it is read.
#[derive(Debug, Clone, Copy)]
pub struct ManualClock {
    current: Duration,
    step: Duration,
}

impl ManualClock {
    pub fn new(step: Duration) -> Self {
        Self {
            current: Duration::ZERO,
            step,
        }
    }
}

impl Clock for ManualClock {
    fn now(&mut self) -> Duration {
        let now = self.current;
        self.current += self.step;
        now
    }
}

/// Something that can be advanced in time and rendered.
///
/// `update` takes `&mut self` and `render` takes `&self`, so a render can
/// never overlap an update.
pub trait Renderable {
    /// Advance by `dt` seconds.
    fn update(&mut self, dt: f64) -> Result<()>;

    /// Produce one frame of the current state.
    fn render(&self) -> Result<Image>;
}

/// A scene paired with the settings it is rendered with.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    scene: Scene,
    config: RenderConfig,
}

impl FrameRenderer {
    /// Validates `config` up front.
    pub fn new(scene: Scene, config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { scene, config })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}

impl Renderable for FrameRenderer {
    fn update(&mut self, dt: f64) -> Result<()> {
        self.scene.update(dt)?;
        Ok(())
    }

    fn render(&self) -> Result<Image> {
        render_frame(&self.scene, &self.config)
    }
}

/// Run `properties.frames` update/render iterations.
///
/// Each frame is preceded by exactly one `update` with the time elapsed
/// since the previous iteration (the first one measures from the start of
/// the loop). The first error stops the run.
pub fn run_animation<R, C>(
    renderable: &mut R,
    properties: &RenderProperties,
    clock: &mut C,
) -> Result<Vec<Image>>
where
    R: Renderable + ?Sized,
    C: Clock + ?Sized,
{
    let mut frames = Vec::with_capacity(properties.frames);
    let mut previous = clock.now();

    for frame in 0..properties.frames {
        let current = clock.now();
        let dt = current.saturating_sub(previous).as_secs_f64();

        renderable.update(dt)?;
        frames.push(renderable.render()?);
        log::info!("Frame {}/{} done (dt {:.4}s)", frame + 1, properties.frames, dt);

        previous = current;
    }

    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Camera, Error, RenderError};
    use glint_math::Vec3;

    /// Records every update and renders a blank 1x1 image.
    #[derive(Default)]
    struct Recorder {
        updates: Vec<f64>,
    }

    impl Renderable for Recorder {
        fn update(&mut self, dt: f64) -> Result<()> {
            self.updates.push(dt);
            Ok(())
        }

        fn render(&self) -> Result<Image> {
            Ok(Image::new(1, 1))
        }
    }

    struct FailingUpdate;

    impl Renderable for FailingUpdate {
        fn update(&mut self, dt: f64) -> Result<()> {
            Err(RenderError::InvalidTimeStep(dt).into())
        }

        fn render(&self) -> Result<Image> {
            panic!("render must not run after a failed update");
        }
    }

    #[test]
    fn test_manual_clock_steps() {
        let mut clock = ManualClock::new(Duration::from_millis(10));
        assert_eq!(clock.now(), Duration::ZERO);
        assert_eq!(clock.now(), Duration::from_millis(10));
    }

    #[test]
    fn test_three_frames_three_updates() {
        let mut recorder = Recorder::default();
        let mut clock = ManualClock::new(Duration::from_millis(40));

        let frames = run_animation(&mut recorder, &RenderProperties::new(3), &mut clock).unwrap();

        assert_eq!(frames.len(), 3);
        assert_eq!(recorder.updates.len(), 3);
        for dt in &recorder.updates {
            assert!(*dt >= 0.0);
            assert!((dt - 0.04).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_frames() {
        let mut recorder = Recorder::default();
        let frames =
            run_animation(&mut recorder, &RenderProperties::new(0), &mut SystemClock::new())
                .unwrap();

        assert!(frames.is_empty());
        assert!(recorder.updates.is_empty());
    }

    #[test]
    fn test_update_error_stops_run() {
        let mut failing = FailingUpdate;
        let mut clock = ManualClock::new(Duration::ZERO);

        let err = run_animation(&mut failing, &RenderProperties::new(2), &mut clock).unwrap_err();
        assert!(matches!(err, Error::Render(RenderError::InvalidTimeStep(_))));
    }

    #[test]
    fn test_frame_renderer_advances_scene() {
        let camera = Camera::from_resolution(Vec3::ZERO, Vec3::NEG_Z, 2, 2).unwrap();
        let scene = Scene::new(camera, vec![]);
        let mut renderer = FrameRenderer::new(scene, RenderConfig::default()).unwrap();
        let mut clock = ManualClock::new(Duration::from_millis(500));

        let frames = run_animation(&mut renderer, &RenderProperties::new(2), &mut clock).unwrap();

        assert_eq!(frames.len(), 2);
        assert!((renderer.scene().time() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_frame_renderer_validates_config() {
        let camera = Camera::from_resolution(Vec3::ZERO, Vec3::NEG_Z, 2, 2).unwrap();
        let config = RenderConfig {
            shininess: 0.0,
            ..Default::default()
        };

        assert!(FrameRenderer::new(Scene::new(camera, vec![]), config).is_err());
    }
}
