use winit::event::WindowEvent;

use crate::render::RenderError;
use crate::window::RuntimeCtx;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// The app plays the role of the scene producer: it builds a `SceneState`
/// each frame and hands it to [`FrameCtx::render`].
pub trait App {
    /// Called once after the renderer tried to acquire its device session.
    ///
    /// On `Err` every later `render` call is a no-op; degrade instead of retrying.
    fn on_renderer_init(&mut self, result: Result<(), &RenderError>) {
        let _ = result;
    }

    /// Called for window events before the runtime handles them.
    fn on_window_event(&mut self, event: &WindowEvent, runtime: &mut RuntimeCtx) -> AppControl {
        let _ = (event, runtime);
        AppControl::Continue
    }

    /// Called once per animation tick.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
