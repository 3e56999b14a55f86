/// Parameters for negotiating a [`super::DeviceSession`].
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB surface format if the surface offers one.
    ///
    /// Off by default: the shader writes display-ready values and an sRGB
    /// target would encode them twice.
    pub prefer_srgb: bool,

    pub present_mode: wgpu::PresentMode,

    /// Requested compositing mode. Replaced by the first supported mode when
    /// the surface does not list it.
    pub alpha_mode: wgpu::CompositeAlphaMode,

    /// The tracer is fragment-bound; ask for the discrete GPU.
    pub power_preference: wgpu::PowerPreference,

    pub required_features: wgpu::Features,
    pub required_limits: wgpu::Limits,

    /// Hint only.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: false,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::PreMultiplied,
            power_preference: wgpu::PowerPreference::HighPerformance,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}
