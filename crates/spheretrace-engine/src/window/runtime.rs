use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::render::{RenderError, Renderer, RendererConfig};
use crate::time::{FrameClock, FrameTime};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Start with continuous redraw enabled.
    pub animating: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "spheretrace".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            animating: true,
        }
    }
}

/// Runtime context passed to the application.
///
/// Commands are buffered and applied after the current callback returns.
#[derive(Default)]
pub struct RuntimeCtx {
    commands: Vec<Command>,
}

impl RuntimeCtx {
    /// Starts or stops the continuous redraw loop.
    ///
    /// While stopped, frames are only driven by the platform (resize, expose).
    /// Resuming resets the frame clock's delta baseline.
    pub fn set_animating(&mut self, animating: bool) {
        self.commands.push(Command::SetAnimating(animating));
    }

    pub fn request_redraw(&mut self) {
        self.commands.push(Command::RequestRedraw);
    }

    pub fn exit(&mut self) {
        self.commands.push(Command::Exit);
    }
}

enum Command {
    SetAnimating(bool),
    RequestRedraw,
    Exit,
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    pub fn run<A>(initial: RuntimeConfig, renderer: RendererConfig, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(initial, renderer, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

#[self_referencing]
struct WindowEntry {
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    renderer: Renderer<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    initial: RuntimeConfig,
    renderer_config: RendererConfig,
    app: A,

    window: Option<WindowEntry>,
    animating: bool,
    exit_requested: bool,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(initial: RuntimeConfig, renderer_config: RendererConfig, app: A) -> Self {
        let animating = initial.animating;
        Self {
            initial,
            renderer_config,
            app,
            window: None,
            animating,
            exit_requested: false,
        }
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<WindowId> {
        let attrs = Window::default_attributes()
            .with_title(self.initial.title.clone())
            .with_inner_size(self.initial.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let id = window.id();
        let renderer_config = self.renderer_config.clone();
        let mut init_result: Result<(), RenderError> = Ok(());

        let entry = WindowEntryBuilder {
            clock: FrameClock::default(),
            window,
            renderer_builder: |w| {
                let mut renderer = Renderer::new(renderer_config);
                init_result = pollster::block_on(renderer.init(w));
                renderer
            },
        }
        .build();

        if let Err(e) = &init_result {
            log::error!("renderer initialization failed: {e}");
        }
        self.app.on_renderer_init(init_result.as_ref().map(|_| ()));

        self.window = Some(entry);
        Ok(id)
    }

    fn destroy_window_entry(&mut self) {
        if let Some(mut entry) = self.window.take() {
            entry.with_renderer_mut(|r| r.dispose());
        }
    }

    fn apply_commands(&mut self, event_loop: &ActiveEventLoop, mut ctx: RuntimeCtx) {
        for cmd in ctx.commands.drain(..) {
            match cmd {
                Command::SetAnimating(on) => {
                    let resuming = on && !self.animating;
                    if on != self.animating {
                        log::debug!("continuous redraw {}", if on { "started" } else { "stopped" });
                    }
                    self.animating = on;
                    if let Some(entry) = self.window.as_mut() {
                        if resuming {
                            entry.with_clock_mut(|c| c.reset());
                        }
                        entry.with_window(|w| w.request_redraw());
                    }
                }
                Command::RequestRedraw => {
                    if let Some(entry) = &self.window {
                        entry.with_window(|w| w.request_redraw());
                    }
                }
                Command::Exit => self.request_exit(),
            }
        }

        if self.exit_requested {
            self.destroy_window_entry();
            event_loop.exit();
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            log::error!("failed to create initial window: {e:#}");
            self.request_exit();
            event_loop.exit();
            return;
        }

        if let Some(entry) = &self.window {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        if self.animating {
            if let Some(entry) = &self.window {
                entry.with_window(|w| w.request_redraw());
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(entry) = self.window.as_ref() else {
            return;
        };
        if entry.with_window(|w| w.id()) != window_id {
            return;
        }

        let mut runtime_ctx = RuntimeCtx::default();
        if self.app.on_window_event(&event, &mut runtime_ctx) == AppControl::Exit {
            runtime_ctx.exit();
        }
        self.apply_commands(event_loop, runtime_ctx);
        if self.exit_requested {
            return;
        }

        // Runtime-managed window lifecycle / resize / redraw handling.
        match &event {
            WindowEvent::CloseRequested => {
                self.destroy_window_entry();
                self.request_exit();
                event_loop.exit();
            }

            // The renderer reconfigures lazily from the size passed to `draw`.
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = &self.window {
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::RedrawRequested => {
                let mut runtime_ctx = RuntimeCtx::default();
                let mut app_control = AppControl::Continue;

                // Split borrows to avoid `self` capture inside `ouroboros` closures.
                let (app, window) = (&mut self.app, &mut self.window);

                if let Some(entry) = window.as_mut() {
                    entry.with_mut(|fields| {
                        let ft: FrameTime = fields.clock.tick();

                        let mut ctx = FrameCtx {
                            window: WindowCtx {
                                window: fields.window,
                            },
                            renderer: fields.renderer,
                            time: ft,
                            runtime: &mut runtime_ctx,
                        };

                        app_control = app.on_frame(&mut ctx);
                    });
                }

                if app_control == AppControl::Exit {
                    runtime_ctx.exit();
                }

                self.apply_commands(event_loop, runtime_ctx);
            }

            _ => {}
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }
}
