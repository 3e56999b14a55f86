use super::{ColorRgb, Light, Material, Settings, Sphere, Vec3};

/// Immutable per-frame snapshot of everything the shading program reads.
///
/// Built fresh by the producer (studio, control panel) once per tick and passed
/// by reference into `Renderer::draw`. It carries no identity beyond its value.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    pub settings: Settings,

    /// `None` uploads a zeroed light block.
    pub light: Option<Light>,

    /// Background returned by rays that miss every sphere.
    pub sky_color: ColorRgb,

    pub materials: Vec<Material>,
    pub spheres: Vec<Sphere>,
}

impl SceneState {
    /// Returns the indices of spheres whose `material_index` does not address
    /// an entry in `materials`.
    ///
    /// The shader clamps such indices to the last material, so this is purely
    /// diagnostic.
    pub fn out_of_range_spheres(&self) -> impl Iterator<Item = usize> + '_ {
        let count = self.materials.len();
        self.spheres
            .iter()
            .enumerate()
            .filter(move |(_, s)| s.material_index as usize >= count)
            .map(|(i, _)| i)
    }
}

impl Default for SceneState {
    fn default() -> Self {
        let hex = |s: &str| ColorRgb::from_hex(s).unwrap_or_default();

        Self {
            settings: Settings::default(),
            light: Some(Light::new(Vec3::new(-4.8, 5.5, 0.0))),
            sky_color: hex("#000000"),
            materials: vec![
                Material::new(hex("#212d79"), 1.0),
                Material::new(hex("#1a8033"), 0.7),
                Material::new(hex("#901b90"), 0.19),
            ],
            spheres: vec![
                // Ground.
                Sphere::new(Vec3::new(-1.6, -101.5, -8.1), 100.0, 0),
                Sphere::new(Vec3::new(7.4, 3.4, -11.0), 4.7, 1),
                Sphere::new(Vec3::new(1.4, -0.5, -4.8), 1.0, 2),
            ],
        }
    }
}
