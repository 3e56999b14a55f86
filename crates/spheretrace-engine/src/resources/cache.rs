use wgpu::util::DeviceExt;

use crate::layout::gpu::{QuadVertex, QUAD_VERTICES};
use crate::layout::{BindingSlot, EncodedScene};

use super::plan::{plan_frame, SlotUpload};
use super::{ResourcePolicy, SHADER_SOURCE};

/// Device-side handles needed to record one frame.
pub struct FrameResources<'a> {
    pub pipeline: &'a wgpu::RenderPipeline,
    pub bind_group: &'a wgpu::BindGroup,
    pub vertex_buffer: &'a wgpu::Buffer,
    pub vertex_count: u32,
}

struct SlotBuffer {
    buffer: wgpu::Buffer,
    len: u64,
}

/// Owns the pipeline, the quad vertex buffer, one buffer per binding slot and
/// the bind group that ties them to the shader.
///
/// Slot buffers are keyed by (slot, byte length): an unchanged length is
/// refreshed with `queue.write_buffer`, a changed length gets a new buffer and
/// the bind group is rebuilt.
#[derive(Default)]
pub struct ResourceCache {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,

    quad_vbo: Option<wgpu::Buffer>,
    slots: [Option<SlotBuffer>; 6],
}

impl ResourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every cached handle.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Stages `encoded` into slot buffers and returns the handles for the pass.
    ///
    /// All writes are queued on `queue`, so they land before the next submit.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        encoded: &EncodedScene,
        policy: ResourcePolicy,
    ) -> Option<FrameResources<'_>> {
        if policy == ResourcePolicy::RebuildEveryFrame {
            self.clear();
        }

        self.ensure_pipeline(device, surface_format);
        self.ensure_static_buffers(device);
        self.upload_slots(device, queue, encoded);
        self.ensure_bind_group(device);

        Some(FrameResources {
            pipeline: self.pipeline.as_ref()?,
            bind_group: self.bind_group.as_ref()?,
            vertex_buffer: self.quad_vbo.as_ref()?,
            vertex_count: QUAD_VERTICES.len() as u32,
        })
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, device: &wgpu::Device, surface_format: wgpu::TextureFormat) {
        if self.pipeline_format == Some(surface_format) && self.pipeline.is_some() {
            return;
        }

        log::debug!("building raytrace pipeline for {surface_format:?}");

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("spheretrace raytrace shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let entries: Vec<wgpu::BindGroupLayoutEntry> = BindingSlot::ALL
            .into_iter()
            .map(|slot| wgpu::BindGroupLayoutEntry {
                binding: slot.index(),
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: slot.binding_type(),
                count: None,
            })
            .collect();

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("spheretrace scene bgl"),
            entries: &entries,
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("spheretrace pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("spheretrace raytrace pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vertex_main"),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fragment_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        // A new layout invalidates the old bind group.
        self.bind_group = None;
    }

    fn ensure_static_buffers(&mut self, device: &wgpu::Device) {
        if self.quad_vbo.is_some() {
            return;
        }

        self.quad_vbo = Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("spheretrace quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));
    }

    fn upload_slots(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, encoded: &EncodedScene) {
        let cached = self.slots.each_ref().map(|s| s.as_ref().map(|b| b.len));
        let plan = plan_frame(&cached, encoded);

        for (slot, bytes) in encoded.iter() {
            let entry = &mut self.slots[slot.index() as usize];
            if plan.upload(slot) == SlotUpload::Write {
                if let Some(existing) = entry.as_ref() {
                    queue.write_buffer(&existing.buffer, 0, bytes);
                    continue;
                }
            }

            log::debug!("allocating {} ({} bytes)", slot.label(), bytes.len());
            let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(slot.label()),
                contents: bytes,
                usage: slot.buffer_usage(),
            });
            *entry = Some(SlotBuffer { buffer, len: bytes.len() as u64 });
        }

        if plan.rebuild_bind_group {
            self.bind_group = None;
        }
    }

    fn ensure_bind_group(&mut self, device: &wgpu::Device) {
        if self.bind_group.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let mut entries = Vec::with_capacity(BindingSlot::ALL.len());
        for slot in BindingSlot::ALL {
            let Some(sb) = self.slots[slot.index() as usize].as_ref() else { return };
            entries.push(wgpu::BindGroupEntry {
                binding: slot.index(),
                resource: sb.buffer.as_entire_binding(),
            });
        }

        log::debug!("rebuilding scene bind group");
        self.bind_group = Some(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("spheretrace scene bind group"),
            layout: bgl,
            entries: &entries,
        }));
    }
}
