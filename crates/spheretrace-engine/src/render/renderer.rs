use winit::window::Window;

use crate::device::{DeviceSession, GpuInit, RenderError, SurfaceErrorAction};
use crate::layout::encode;
use crate::resources::{FrameResources, ResourceCache, ResourcePolicy};
use crate::scene::{Dimensions, SceneState};

/// Renderer configuration.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    pub gpu: GpuInit,

    /// Color the pass clears to before the quad is drawn.
    pub clear_color: wgpu::Color,

    pub resource_policy: ResourcePolicy,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            gpu: GpuInit::default(),
            clear_color: wgpu::Color::BLACK,
            resource_policy: ResourcePolicy::Cached,
        }
    }
}

/// Observable lifecycle of a [`Renderer`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Lifecycle {
    Uninitialized,
    Initialized,
    Disposed,
}

/// Outcome of a successful `draw` call.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameStatus {
    /// A frame was recorded, submitted and presented.
    Presented,
    /// Nothing was drawn this tick (zero-sized surface, transient surface error).
    Skipped,
    /// The surface was lost or outdated and has been reconfigured.
    Reconfigured,
}

struct Session<'w> {
    device: DeviceSession<'w>,
    cache: ResourceCache,
}

enum State<'w> {
    Uninitialized,
    Initialized(Box<Session<'w>>),
    Disposed,
}

/// Frame driver.
///
/// Lifecycle: `Uninitialized -> Initialized -> (draw)* -> Disposed`. A disposed
/// renderer may be initialized again with a fresh session.
///
/// `draw` is synchronous: it only enqueues buffer writes and one submission.
/// Callers must not overlap calls; one call per animation tick.
pub struct Renderer<'w> {
    config: RendererConfig,
    state: State<'w>,
    warned_material_index: bool,
}

impl<'w> Renderer<'w> {
    pub fn new(config: RendererConfig) -> Self {
        Self {
            config,
            state: State::Uninitialized,
            warned_material_index: false,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        match self.state {
            State::Uninitialized => Lifecycle::Uninitialized,
            State::Initialized(_) => Lifecycle::Initialized,
            State::Disposed => Lifecycle::Disposed,
        }
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.lifecycle() == Lifecycle::Initialized
    }

    /// Returns the active device session, if any.
    pub fn session(&self) -> Option<&DeviceSession<'w>> {
        match &self.state {
            State::Initialized(s) => Some(&s.device),
            _ => None,
        }
    }

    /// Acquires a device session for `window`.
    ///
    /// On failure the renderer is left `Uninitialized`; no retry is attempted.
    pub async fn init(&mut self, window: &'w Window) -> Result<(), RenderError> {
        if self.is_initialized() {
            return Err(RenderError::AlreadyInitialized);
        }

        match DeviceSession::acquire(window, self.config.gpu.clone()).await {
            Ok(device) => {
                self.state = State::Initialized(Box::new(Session {
                    device,
                    cache: ResourceCache::new(),
                }));
                self.warned_material_index = false;
                Ok(())
            }
            Err(e) => {
                self.state = State::Uninitialized;
                Err(e)
            }
        }
    }

    /// Releases the session and every cached resource.
    ///
    /// Subsequent `draw` calls fail with [`RenderError::NotInitialized`].
    /// GPU work already submitted is not waited on.
    pub fn dispose(&mut self) {
        if self.is_initialized() {
            log::info!("disposing device session");
        }
        self.state = State::Disposed;
    }

    /// Encodes `scene`, refreshes device resources and submits one render pass.
    ///
    /// `dims` must be the live drawable size, queried by the caller this tick.
    pub fn draw(&mut self, scene: &SceneState, dims: Dimensions) -> Result<FrameStatus, RenderError> {
        let State::Initialized(session) = &mut self.state else {
            return Err(RenderError::NotInitialized);
        };
        let Session { device, cache } = &mut **session;

        if !device.ensure_configured(dims) {
            log::debug!("skipping frame: zero-sized surface");
            return Ok(FrameStatus::Skipped);
        }

        if !self.warned_material_index {
            let bad: Vec<usize> = scene.out_of_range_spheres().collect();
            if !bad.is_empty() {
                log::warn!(
                    "spheres {bad:?} reference materials beyond {}; the last material is used",
                    scene.materials.len()
                );
                self.warned_material_index = true;
            }
        }

        let encoded = encode(scene, dims);

        let Some(resources) = cache.prepare(
            device.device(),
            device.queue(),
            device.surface_format(),
            &encoded,
            self.config.resource_policy,
        ) else {
            log::warn!("skipping frame: scene resources unavailable");
            return Ok(FrameStatus::Skipped);
        };

        let mut frame = match device.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                return match device.handle_surface_error(err) {
                    SurfaceErrorAction::Reconfigured => {
                        log::debug!("surface reconfigured");
                        Ok(FrameStatus::Reconfigured)
                    }
                    SurfaceErrorAction::SkipFrame => {
                        log::debug!("skipping frame: surface timeout");
                        Ok(FrameStatus::Skipped)
                    }
                    SurfaceErrorAction::Fatal => {
                        log::error!("surface out of memory");
                        Err(RenderError::OutOfMemory)
                    }
                };
            }
        };

        record_pass(&mut frame.encoder, &frame.view, &resources, self.config.clear_color);

        device.submit(frame);
        Ok(FrameStatus::Presented)
    }
}

/// Records the single pass: clear, bind, draw the quad.
fn record_pass(
    encoder: &mut wgpu::CommandEncoder,
    view: &wgpu::TextureView,
    resources: &FrameResources<'_>,
    clear: wgpu::Color,
) {
    let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("spheretrace raytrace pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear),
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
        multiview_mask: None,
    });

    rpass.set_pipeline(resources.pipeline);
    rpass.set_vertex_buffer(0, resources.vertex_buffer.slice(..));
    rpass.set_bind_group(0, resources.bind_group, &[]);
    rpass.draw(0..resources.vertex_count, 0..1);
}
