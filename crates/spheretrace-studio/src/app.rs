use std::time::Duration;

use spheretrace_engine::core::{App, AppControl, FrameCtx};
use spheretrace_engine::render::RenderError;
use spheretrace_engine::scene::{Dimensions, SceneState, SeedMode};
use spheretrace_engine::time::{FrameStats, StatsSnapshot};
use spheretrace_engine::window::RuntimeCtx;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::animation::frame_spheres;

/// How often the status line is logged.
const STATS_LOG_INTERVAL: Duration = Duration::from_secs(1);

/// Demo scene producer.
///
/// Rebuilds a `SceneState` every tick from the reference scene, optionally
/// replacing the spheres with the animated layout.
pub struct StudioApp {
    seed_mode: SeedMode,
    animate: bool,
    running: bool,
    stats: FrameStats,

    // Last scene handed to the renderer; redrawn as-is while stopped.
    scene: SceneState,
}

impl StudioApp {
    pub fn new(running: bool) -> Self {
        Self {
            seed_mode: SeedMode::Auto,
            animate: true,
            running,
            stats: FrameStats::new(STATS_LOG_INTERVAL),
            scene: SceneState::default(),
        }
    }

    fn build_scene(&self, elapsed_secs: f32) -> SceneState {
        let mut scene = SceneState::default();
        scene.settings = scene.settings.with_seed_mode(self.seed_mode, elapsed_secs);
        if self.animate {
            scene.spheres = frame_spheres(elapsed_secs * 1000.0);
        }
        scene
    }

    fn toggle_running(&mut self, runtime: &mut RuntimeCtx) {
        self.running = !self.running;
        self.stats.clear();
        runtime.set_animating(self.running);
        log::info!("{}", if self.running { "running" } else { "stopped" });
    }
}

impl App for StudioApp {
    fn on_renderer_init(&mut self, result: Result<(), &RenderError>) {
        match result {
            Ok(()) => log::info!("GPU ready; space toggles run/stop, A toggles animation, S pins the seed"),
            Err(e) => log::warn!("GPU not supported here ({e}); nothing will be drawn"),
        }
    }

    fn on_window_event(&mut self, event: &WindowEvent, runtime: &mut RuntimeCtx) -> AppControl {
        let WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key: PhysicalKey::Code(code),
                    state: ElementState::Pressed,
                    repeat: false,
                    ..
                },
            ..
        } = event
        else {
            return AppControl::Continue;
        };

        match code {
            KeyCode::Escape => return AppControl::Exit,
            KeyCode::Space => self.toggle_running(runtime),
            KeyCode::KeyA => {
                self.animate = !self.animate;
                runtime.request_redraw();
            }
            KeyCode::KeyS => {
                self.seed_mode = match self.seed_mode {
                    SeedMode::Auto => SeedMode::Fixed(self.scene.settings.seed),
                    SeedMode::Fixed(_) => SeedMode::Auto,
                };
                log::info!("seed mode: {:?}", self.seed_mode);
            }
            _ => {}
        }

        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if !ctx.renderer.is_initialized() {
            return AppControl::Continue;
        }

        if self.running {
            self.scene = self.build_scene(ctx.time.elapsed);
            if let Some(snapshot) = self.stats.record(&ctx.time) {
                log::info!("{}", status_line(&snapshot, ctx.window.dimensions()));
            }
        }

        ctx.render(&self.scene)
    }
}

/// `FPS: 61  Frame time: 16.4ms  Resolution: 960x640`
fn status_line(snapshot: &StatsSnapshot, dims: Dimensions) -> String {
    format!("{snapshot}  Resolution: {}x{}", dims.width, dims.height)
}
