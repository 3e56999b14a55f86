use winit::window::Window;

use crate::render::{FrameStatus, RenderError, Renderer};
use crate::scene::{Dimensions, SceneState};
use crate::time::FrameTime;
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// Window handle plus live size queries.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Returns the drawable size in physical pixels, queried now.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::from(self.window.inner_size())
    }
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Renderer<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub renderer: &'a mut Renderer<'w>,
    pub time: FrameTime,
    pub runtime: &'a mut RuntimeCtx,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Draws `scene` at the window's current size.
    ///
    /// An uninitialized renderer skips silently (the app was told at init);
    /// a fatal surface error requests exit.
    pub fn render(&mut self, scene: &SceneState) -> AppControl {
        let dims = self.window.dimensions();

        self.window.window.pre_present_notify();
        match self.renderer.draw(scene, dims) {
            Ok(FrameStatus::Presented | FrameStatus::Skipped | FrameStatus::Reconfigured) => {
                AppControl::Continue
            }
            Err(RenderError::NotInitialized) => AppControl::Continue,
            Err(e) => {
                log::error!("draw failed: {e}");
                AppControl::Exit
            }
        }
    }
}
