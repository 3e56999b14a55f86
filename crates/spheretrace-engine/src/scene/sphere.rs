use super::Vec3;

/// Sphere primitive.
///
/// `material_index` indexes into `SceneState::materials`. The index is not
/// bounds-checked on upload; see [`super::SceneState::out_of_range_spheres`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Sphere {
    pub position: Vec3,
    pub radius: f32,
    pub material_index: u32,
}

impl Sphere {
    #[inline]
    pub const fn new(position: Vec3, radius: f32, material_index: u32) -> Self {
        Self { position, radius, material_index }
    }
}
