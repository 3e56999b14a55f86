use super::ColorRgb;

/// Surface material, referenced from spheres by index.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Material {
    pub albedo: ColorRgb,

    /// `0.0` is a perfect mirror, `1.0` fully diffuse.
    pub roughness: f32,
}

impl Material {
    #[inline]
    pub const fn new(albedo: ColorRgb, roughness: f32) -> Self {
        Self { albedo, roughness }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(ColorRgb::new(1.0, 1.0, 1.0), 1.0)
    }
}
