//! Frame loop state machine.

use starweave_config::Config;
use starweave_core::Surface;

use crate::animations::{starfield, triangle, wave};
use crate::connect::draw_connections;
use crate::scene::Scene;

/// Handle of a requested frame, usable to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Something that invokes the animator again before the next repaint.
pub trait FrameScheduler {
    /// Ask for one more frame.
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a request. Unknown or stale handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Whether the frame chain is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimatorState {
    /// No frame has been requested, or the chain was cancelled.
    #[default]
    Idle,
    /// A frame is pending.
    Running(FrameHandle),
}

/// Per frame drawing parameters, fixed at construction.
#[derive(Debug, Clone, PartialEq)]
struct Params {
    speed: f64,
    motion: wave::Motion,
    wave_radius: f64,
    wave_max_dist: f64,
    triangle_radius: f64,
    triangle_max_dist: f64,
}

/// Advances the wave and draws every layer, one frame at a time.
#[derive(Debug, Clone)]
pub struct Animator {
    state: AnimatorState,
    /// Wave phase. Grows without bound.
    phase: f64,
    params: Params,
}

impl Animator {
    pub fn new(config: &Config) -> Self {
        Self {
            state: AnimatorState::Idle,
            phase: 0.0,
            params: Params {
                speed: config.wave.speed,
                motion: wave::Motion {
                    frequency: config.wave.frequency,
                    amplitude: config.wave.amplitude,
                },
                wave_radius: config.wave.point_radius,
                wave_max_dist: config.wave.max_dist,
                triangle_radius: config.triangle.point_radius,
                triangle_max_dist: config.triangle.max_dist,
            },
        }
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, AnimatorState::Running(_))
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Request the first frame. Does nothing if already running.
    pub fn start(&mut self, scheduler: &mut dyn FrameScheduler) {
        if self.is_running() {
            return;
        }
        let handle = scheduler.request_frame();
        tracing::info!(handle = handle.0, "animation started");
        self.state = AnimatorState::Running(handle);
    }

    /// Cancel the pending frame and go idle.
    pub fn stop(&mut self, scheduler: &mut dyn FrameScheduler) {
        if let AnimatorState::Running(handle) = self.state {
            scheduler.cancel_frame(handle);
            tracing::info!(handle = handle.0, phase = self.phase, "animation stopped");
        }
        self.state = AnimatorState::Idle;
    }

    /// Run one animation step. Returns `false` when idle, in which case
    /// nothing is drawn and no further frame is requested.
    pub fn frame(
        &mut self,
        scene: &mut Scene,
        surface: &mut dyn Surface,
        scheduler: &mut dyn FrameScheduler,
    ) -> bool {
        if !self.is_running() {
            return false;
        }

        self.state = AnimatorState::Running(scheduler.request_frame());
        surface.clear();

        starfield::draw(&scene.stars, surface);

        self.phase += self.params.speed;

        let p = &self.params;
        wave::update(&mut scene.wave, scene.wave_origin, self.phase, p.motion);
        wave::draw(&scene.wave, surface, p.wave_radius);
        draw_connections(surface, &scene.wave, p.wave_max_dist, wave::COLOR);

        triangle::draw(&scene.triangle, surface, p.triangle_radius);
        draw_connections(surface, &scene.triangle, p.triangle_max_dist, triangle::COLOR);

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{CanvasSurface, DrawOp};
    use rand::{SeedableRng, rngs::StdRng};
    use starweave_core::{NetworkPoint, Star, Vec2};

    #[derive(Default)]
    struct ManualScheduler {
        next: u64,
        pending: Vec<FrameHandle>,
        cancelled: Vec<FrameHandle>,
    }

    impl FrameScheduler for ManualScheduler {
        fn request_frame(&mut self) -> FrameHandle {
            self.next += 1;
            let handle = FrameHandle(self.next);
            self.pending.push(handle);
            handle
        }

        fn cancel_frame(&mut self, handle: FrameHandle) {
            self.pending.retain(|h| *h != handle);
            self.cancelled.push(handle);
        }
    }

    fn small_scene() -> Scene {
        Scene {
            width: 200.0,
            height: 200.0,
            stars: vec![Star::new(5.0, 5.0), Star::new(150.0, 20.0)],
            triangle: vec![
                NetworkPoint::new(10.0, 10.0),
                NetworkPoint::new(40.0, 10.0),
                NetworkPoint::new(10.0, 190.0),
            ],
            wave: vec![NetworkPoint::new(110.0, 100.0), NetworkPoint::new(120.0, 100.0)],
            wave_origin: Vec2::new(100.0, 100.0),
        }
    }

    #[test]
    fn starts_idle() {
        let animator = Animator::new(&Config::default());
        assert_eq!(animator.state(), AnimatorState::Idle);
        assert_eq!(animator.phase(), 0.0);
    }

    #[test]
    fn start_and_stop() {
        let mut scheduler = ManualScheduler::default();
        let mut animator = Animator::new(&Config::default());

        animator.start(&mut scheduler);
        assert_eq!(animator.state(), AnimatorState::Running(FrameHandle(1)));

        // Starting twice does not queue a second chain.
        animator.start(&mut scheduler);
        assert_eq!(scheduler.pending, vec![FrameHandle(1)]);

        animator.stop(&mut scheduler);
        assert_eq!(animator.state(), AnimatorState::Idle);
        assert_eq!(scheduler.cancelled, vec![FrameHandle(1)]);
        assert!(scheduler.pending.is_empty());

        animator.stop(&mut scheduler);
        assert_eq!(scheduler.cancelled.len(), 1);
    }

    #[test]
    fn idle_frame_does_nothing() {
        let mut scheduler = ManualScheduler::default();
        let mut animator = Animator::new(&Config::default());
        let mut scene = small_scene();
        let mut surface = CanvasSurface::new(200.0, 200.0);

        assert!(!animator.frame(&mut scene, &mut surface, &mut scheduler));
        assert!(surface.ops().is_empty());
        assert_eq!(scheduler.next, 0);
        assert_eq!(animator.phase(), 0.0);
    }

    #[test]
    fn each_frame_reschedules_and_advances_phase() {
        let mut scheduler = ManualScheduler::default();
        let mut animator = Animator::new(&Config::default());
        let mut scene = small_scene();
        let mut surface = CanvasSurface::new(200.0, 200.0);

        animator.start(&mut scheduler);
        for n in 1..=3 {
            assert!(animator.frame(&mut scene, &mut surface, &mut scheduler));
            assert_eq!(animator.state(), AnimatorState::Running(FrameHandle(n + 1)));
            assert!((animator.phase() - 0.05 * n as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn frame_clears_then_draws_layers_in_order() {
        let mut scheduler = ManualScheduler::default();
        let mut animator = Animator::new(&Config::default());
        let mut scene = small_scene();
        let mut surface = CanvasSurface::new(200.0, 200.0);
        surface.fill_circle(1.0, 1.0, 50.0);

        animator.start(&mut scheduler);
        animator.frame(&mut scene, &mut surface, &mut scheduler);
        let ops = surface.ops();

        // Stars, 2 wave points, 1 wave line, 3 triangle points, 1 triangle line.
        assert_eq!(ops.len(), 8);
        assert!(matches!(&ops[0], DrawOp::Dots { coords, color, .. }
            if coords.len() == 2 && *color == Star::COLOR));
        for op in &ops[1..3] {
            assert!(matches!(op, DrawOp::Circle { radius, color, .. }
                if *radius == 1.0 && *color == wave::COLOR));
        }
        assert!(matches!(&ops[3], DrawOp::Line { color, .. } if *color == wave::COLOR));
        for op in &ops[4..7] {
            assert!(matches!(op, DrawOp::Circle { radius, color, .. }
                if *radius == 1.2 && *color == triangle::COLOR));
        }
        assert_eq!(
            ops[7],
            DrawOp::Line {
                from: (10.0, 10.0),
                to: (40.0, 10.0),
                color: triangle::COLOR,
            }
        );
    }

    #[test]
    fn wave_points_oscillate_around_originals() {
        let mut scheduler = ManualScheduler::default();
        let mut animator = Animator::new(&Config::default());
        let mut scene = small_scene();
        let mut surface = CanvasSurface::new(200.0, 200.0);

        animator.start(&mut scheduler);
        for _ in 0..500 {
            animator.frame(&mut scene, &mut surface, &mut scheduler);
            for p in &scene.wave {
                let (ox, oy) = p.original();
                let offset = Vec2::new(p.x, p.y).distance(Vec2::new(ox, oy));
                assert!((offset - 10.0).abs() < 1e-9);
            }
        }

        let phase = animator.phase();
        let theta = 10.0 * 0.02 + phase;
        let p = scene.wave[0];
        assert!((p.x - (110.0 + theta.sin() * 10.0)).abs() < 1e-9);
        assert!((p.y - (100.0 + theta.cos() * 10.0)).abs() < 1e-9);
        // Triangle points never move.
        assert_eq!(scene.triangle, small_scene().triangle);
    }

    #[test]
    fn animates_a_generated_scene() {
        let config = Config::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut scene = Scene::build(1280.0, 640.0, &config, &mut rng);
        let mut scheduler = ManualScheduler::default();
        let mut animator = Animator::new(&config);
        let mut surface = CanvasSurface::new(1280.0, 640.0);

        animator.start(&mut scheduler);
        assert!(animator.frame(&mut scene, &mut surface, &mut scheduler));
        let circles = surface
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .count();
        assert_eq!(circles, scene.wave.len() + scene.triangle.len());
    }
}
