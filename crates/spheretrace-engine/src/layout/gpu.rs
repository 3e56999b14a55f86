//! `#[repr(C)]` mirrors of the WGSL structs in `raytrace.wgsl`.
//!
//! Every struct is a multiple of 16 bytes. Padding fields are explicit and
//! always written as zero so encoding stays byte-deterministic.

use bytemuck::{Pod, Zeroable};

use crate::scene::{ColorRgb, Dimensions, Light, Material, Settings, Sphere};

// ── uniforms ──────────────────────────────────────────────────────────────

/// Slot 0 (16 bytes):
///
///  offset  0  size   [f32; 2]   width, height in device pixels
///  offset  8  _pad   [f32; 2]
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuDimensions {
    pub size: [f32; 2],
    pub _pad: [f32; 2],
}

impl From<Dimensions> for GpuDimensions {
    #[inline]
    fn from(d: Dimensions) -> Self {
        Self {
            size: [d.width as f32, d.height as f32],
            _pad: [0.0; 2],
        }
    }
}

/// Slot 1 (16 bytes):
///
///  offset  0  bounces            u32
///  offset  4  samples_per_frame  u32
///  offset  8  seed               f32
///  offset 12  _pad               u32
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuSettings {
    pub bounces: u32,
    pub samples_per_frame: u32,
    pub seed: f32,
    pub _pad: u32,
}

impl From<Settings> for GpuSettings {
    #[inline]
    fn from(s: Settings) -> Self {
        Self {
            bounces: s.bounces,
            samples_per_frame: s.samples_per_frame.max(1),
            seed: s.seed,
            _pad: 0,
        }
    }
}

/// Slot 2 (16 bytes): `vec3` position plus one padding float.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuLight {
    pub position: [f32; 3],
    pub _pad: f32,
}

impl From<Option<Light>> for GpuLight {
    #[inline]
    fn from(light: Option<Light>) -> Self {
        match light {
            Some(l) => Self { position: l.position.to_array(), _pad: 0.0 },
            None => Self::zeroed(),
        }
    }
}

/// Slot 3 (16 bytes): `vec3` color plus one padding float.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuSky {
    pub color: [f32; 3],
    pub _pad: f32,
}

impl From<ColorRgb> for GpuSky {
    #[inline]
    fn from(c: ColorRgb) -> Self {
        Self { color: c.to_array(), _pad: 0.0 }
    }
}

// ── storage arrays ────────────────────────────────────────────────────────

/// Slot 4 element (stride 16):
///
///  offset  0  albedo     [f32; 3]
///  offset 12  roughness  f32       (occupies the vec3's padding lane)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuMaterial {
    pub albedo: [f32; 3],
    pub roughness: f32,
}

impl From<&Material> for GpuMaterial {
    #[inline]
    fn from(m: &Material) -> Self {
        Self {
            albedo: m.albedo.to_array(),
            roughness: m.roughness,
        }
    }
}

/// Slot 5 element (stride 32):
///
///  offset  0  position        [f32; 3]
///  offset 12  radius          f32
///  offset 16  material_index  u32
///  offset 20  _pad            [u32; 3]
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuSphere {
    pub position: [f32; 3],
    pub radius: f32,
    pub material_index: u32,
    pub _pad: [u32; 3],
}

impl From<&Sphere> for GpuSphere {
    #[inline]
    fn from(s: &Sphere) -> Self {
        Self {
            position: s.position.to_array(),
            radius: s.radius,
            material_index: s.material_index,
            _pad: [0; 3],
        }
    }
}

// ── full-screen quad ──────────────────────────────────────────────────────

/// Clip-space vertex (stride 16, one `vec4<f32>` attribute at location 0).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 4],
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x4];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Two triangles covering clip space; drawn without an index buffer.
pub const QUAD_VERTICES: [QuadVertex; 6] = [
    QuadVertex { position: [-1.0, 1.0, 0.0, 1.0] },
    QuadVertex { position: [-1.0, -1.0, 0.0, 1.0] },
    QuadVertex { position: [1.0, 1.0, 0.0, 1.0] },
    QuadVertex { position: [1.0, 1.0, 0.0, 1.0] },
    QuadVertex { position: [-1.0, -1.0, 0.0, 1.0] },
    QuadVertex { position: [1.0, -1.0, 0.0, 1.0] },
];
