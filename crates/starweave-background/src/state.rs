//! Background state management.

use rand::{SeedableRng, rngs::StdRng};
use starweave_config::Config;
use starweave_core::Surface;

use crate::animator::{Animator, FrameScheduler};
use crate::scene::Scene;

/// Owns the scene, its random source and the animator.
///
/// The scene is replaced wholesale whenever the surface size changes, so a
/// frame only ever sees a complete scene.
#[derive(Debug)]
pub struct BackgroundState {
    config: Config,
    scene: Scene,
    animator: Animator,
    rng: StdRng,
    /// Whether a scene has been laid out yet.
    sized: bool,
}

impl BackgroundState {
    /// Create a new background state seeded from the OS.
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create a background state with a fixed seed.
    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: Config, rng: StdRng) -> Self {
        Self {
            animator: Animator::new(&config),
            config,
            scene: Scene::default(),
            rng,
            sized: false,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Lay the scene out for a new surface size.
    ///
    /// Returns `true` if the scene was rebuilt. Notifications with unchanged
    /// dimensions after the first sizing leave the scene alone.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        let dimensions_changed = width != self.scene.width || height != self.scene.height;
        if self.sized && !dimensions_changed {
            return false;
        }

        self.scene = Scene::build(width, height, &self.config, &mut self.rng);
        self.sized = true;
        true
    }

    pub fn start(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.animator.start(scheduler);
    }

    pub fn stop(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.animator.stop(scheduler);
    }

    /// Draw one frame. See [`Animator::frame`].
    ///
    /// The scene is first fitted to the surface, so a surface resized since
    /// the last frame is never drawn with a stale layout.
    pub fn frame(&mut self, surface: &mut dyn Surface, scheduler: &mut dyn FrameScheduler) -> bool {
        if self.animator.is_running() {
            self.resize(surface.width(), surface.height());
        }
        self.animator.frame(&mut self.scene, surface, scheduler)
    }
}
