use winit::window::Window;

use crate::scene::Dimensions;

use super::surface;
use super::{GpuInit, RenderError, SurfaceErrorAction};

/// One acquired swapchain image plus the encoder recording into it.
///
/// Hand it back to [`DeviceSession::submit`] within the same tick; an
/// outstanding frame blocks the next acquire.
pub struct SurfaceFrame {
    texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

/// Connection to the graphics backend for one window.
///
/// Owns Instance/Device/Queue, the surface and its configuration.
/// Exactly one renderer owns a session; dropping it releases every handle.
pub struct DeviceSession<'w> {
    /// Kept alive for the lifetime of the surface.
    _instance: wgpu::Instance,

    /// Surface lifetime is tied to the window via `'w`.
    surface: wgpu::Surface<'w>,

    device: wgpu::Device,
    queue: wgpu::Queue,

    /// Active surface configuration.
    config: wgpu::SurfaceConfiguration,
}

impl<'w> DeviceSession<'w> {
    /// Negotiates adapter, device and surface format for `window`.
    ///
    /// This is the only asynchronous step of the renderer lifecycle.
    pub async fn acquire(window: &'w Window, init: GpuInit) -> Result<Self, RenderError> {
        let size = Dimensions::from(window.inner_size());
        if !size.is_valid() {
            return Err(RenderError::ZeroSizedSurface);
        }

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .map_err(|e| RenderError::SurfaceUnavailable(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: init.power_preference,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| RenderError::DeviceUnavailable(e.to_string()))?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("spheretrace device"),
                required_features: init.required_features,
                required_limits: init.required_limits.clone(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .map_err(|e| RenderError::DeviceUnavailable(e.to_string()))?;

        let caps = surface.get_capabilities(&adapter);
        let format = surface::choose_surface_format(&caps.formats, init.prefer_srgb)
            .ok_or(RenderError::UnsupportedSurface)?;
        let alpha_mode = surface::choose_alpha_mode(&caps.alpha_modes, init.alpha_mode);

        let info = adapter.get_info();
        log::info!(
            "device session acquired: adapter={:?} backend={:?} format={:?} alpha={:?}",
            info.name,
            info.backend,
            format,
            alpha_mode
        );

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: init.present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: init.desired_maximum_frame_latency,
        };

        surface.configure(&device, &config);

        Ok(Self {
            _instance: instance,
            surface,
            device,
            queue,
            config,
        })
    }

    /// Returns the active surface format.
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Returns the configured drawable size.
    pub fn size(&self) -> Dimensions {
        Dimensions::new(self.config.width, self.config.height)
    }

    /// Returns a reference to the logical device.
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    /// Returns a reference to the command queue.
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Configures the surface for `dims` if it differs from the current size.
    ///
    /// Returns `false` for a zero-sized request; wgpu cannot configure one, so
    /// the caller should skip the frame.
    pub fn ensure_configured(&mut self, dims: Dimensions) -> bool {
        if !dims.is_valid() {
            return false;
        }
        if dims != self.size() {
            log::debug!("reconfiguring surface to {}x{}", dims.width, dims.height);
            self.config.width = dims.width;
            self.config.height = dims.height;
            self.surface.configure(&self.device, &self.config);
        }
        true
    }

    /// Acquires the next surface texture and creates an encoder.
    pub fn begin_frame(&self) -> Result<SurfaceFrame, wgpu::SurfaceError> {
        let texture = self.surface.get_current_texture()?;
        let view = texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("spheretrace frame encoder"),
            });

        Ok(SurfaceFrame {
            texture,
            view,
            encoder,
        })
    }

    /// Submits the recorded commands and presents the frame.
    ///
    /// Buffer writes queued before this call are visible to the submission.
    pub fn submit(&self, frame: SurfaceFrame) {
        let SurfaceFrame { texture, view, encoder } = frame;
        self.queue.submit(std::iter::once(encoder.finish()));
        drop(view);
        texture.present();
    }

    /// Converts a `SurfaceError` into a higher-level action, reconfiguring the
    /// surface when it was lost or outdated.
    pub fn handle_surface_error(&mut self, err: wgpu::SurfaceError) -> SurfaceErrorAction {
        let action = surface::classify_surface_error(&err);
        if action == SurfaceErrorAction::Reconfigured {
            self.surface.configure(&self.device, &self.config);
        }
        action
    }
}
