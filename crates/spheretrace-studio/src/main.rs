mod animation;
mod app;

use anyhow::Result;
use spheretrace_engine::logging::{LoggingConfig, init_logging};
use spheretrace_engine::render::RendererConfig;
use spheretrace_engine::window::{Runtime, RuntimeConfig};
use winit::dpi::LogicalSize;

use crate::app::StudioApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let runtime = RuntimeConfig {
        title: "spheretrace".to_string(),
        initial_size: LogicalSize::new(960.0, 640.0),
        animating: true,
    };

    let mut renderer = RendererConfig::default();
    renderer.gpu.present_mode = wgpu::PresentMode::AutoVsync;

    Runtime::run(runtime, renderer, StudioApp::new(true))
}
