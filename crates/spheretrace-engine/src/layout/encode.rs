use bytemuck::Zeroable;

use crate::scene::{Dimensions, SceneState};

use super::gpu::{GpuDimensions, GpuLight, GpuMaterial, GpuSettings, GpuSky, GpuSphere};
use super::BindingSlot;

/// Byte payloads for every binding slot of one frame.
///
/// Produced by [`encode`]; consumed by the resource cache. Payload lengths are
/// always non-zero multiples of the slot granule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedScene {
    dimensions: Vec<u8>,
    settings: Vec<u8>,
    light: Vec<u8>,
    sky: Vec<u8>,
    materials: Vec<u8>,
    spheres: Vec<u8>,
}

impl EncodedScene {
    /// Returns the payload for `slot`.
    pub fn slot(&self, slot: BindingSlot) -> &[u8] {
        match slot {
            BindingSlot::Dimensions => &self.dimensions,
            BindingSlot::Settings => &self.settings,
            BindingSlot::Light => &self.light,
            BindingSlot::Sky => &self.sky,
            BindingSlot::Materials => &self.materials,
            BindingSlot::Spheres => &self.spheres,
        }
    }

    /// Iterates `(slot, payload)` in binding order.
    pub fn iter(&self) -> impl Iterator<Item = (BindingSlot, &[u8])> {
        BindingSlot::ALL.into_iter().map(move |s| (s, self.slot(s)))
    }
}

/// Encodes `scene` and the live drawable size into binding payloads.
///
/// Pure: the same inputs always yield byte-identical output. Empty material or
/// sphere lists encode as one zero-filled element so no binding is undersized.
pub fn encode(scene: &SceneState, dims: Dimensions) -> EncodedScene {
    EncodedScene {
        dimensions: bytemuck::bytes_of(&GpuDimensions::from(dims)).to_vec(),
        settings: bytemuck::bytes_of(&GpuSettings::from(scene.settings)).to_vec(),
        light: bytemuck::bytes_of(&GpuLight::from(scene.light)).to_vec(),
        sky: bytemuck::bytes_of(&GpuSky::from(scene.sky_color)).to_vec(),
        materials: encode_array(scene.materials.iter().map(GpuMaterial::from).collect()),
        spheres: encode_array(scene.spheres.iter().map(GpuSphere::from).collect()),
    }
}

fn encode_array<T: bytemuck::Pod>(mut items: Vec<T>) -> Vec<u8> {
    if items.is_empty() {
        items.push(T::zeroed());
    }
    bytemuck::cast_slice(&items).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{ColorRgb, Light, Material, Settings, Sphere, Vec3};

    fn f32_at(bytes: &[u8], offset: usize) -> f32 {
        f32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    fn u32_at(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    fn two_sphere_scene() -> SceneState {
        SceneState {
            settings: Settings::default(),
            light: None,
            sky_color: ColorRgb::black(),
            materials: vec![Material::new(ColorRgb::new(1.0, 0.0, 0.0), 0.0)],
            spheres: vec![
                Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, 0),
                Sphere::new(Vec3::new(2.0, 0.0, -5.0), 1.0, 0),
            ],
        }
    }

    // ── determinism ───────────────────────────────────────────────────────

    #[test]
    fn encoding_is_deterministic() {
        let scene = SceneState::default();
        let dims = Dimensions::new(1280, 720);
        assert_eq!(encode(&scene, dims), encode(&scene.clone(), dims));
    }

    // ── minimum-size substitution ─────────────────────────────────────────

    #[test]
    fn empty_materials_encode_one_zeroed_granule() {
        let mut scene = SceneState::default();
        scene.materials.clear();
        let enc = encode(&scene, Dimensions::new(1, 1));
        assert_eq!(enc.slot(BindingSlot::Materials), &[0u8; 16][..]);
    }

    #[test]
    fn empty_spheres_encode_one_zeroed_granule() {
        let mut scene = SceneState::default();
        scene.spheres.clear();
        let enc = encode(&scene, Dimensions::new(1, 1));
        assert_eq!(enc.slot(BindingSlot::Spheres), &[0u8; 32][..]);
    }

    #[test]
    fn no_payload_is_empty_or_misaligned() {
        let scene = SceneState {
            materials: vec![],
            spheres: vec![],
            light: None,
            ..SceneState::default()
        };
        let enc = encode(&scene, Dimensions::new(0, 0));
        for (slot, bytes) in enc.iter() {
            assert!(bytes.len() >= slot.granule(), "{slot:?}");
            assert_eq!(bytes.len() % 16, 0, "{slot:?}");
        }
    }

    // ── alignment ─────────────────────────────────────────────────────────

    #[test]
    fn sphere_payload_is_count_times_stride() {
        let stride = BindingSlot::Spheres.granule();
        assert_eq!(stride % 16, 0);
        for n in [1usize, 2, 3, 7, 64] {
            let scene = SceneState {
                spheres: vec![Sphere::new(Vec3::new(1.0, 2.0, 3.0), 0.5, 0); n],
                ..SceneState::default()
            };
            let enc = encode(&scene, Dimensions::new(8, 8));
            assert_eq!(enc.slot(BindingSlot::Spheres).len(), n * stride);
        }
    }

    // ── field placement ───────────────────────────────────────────────────

    #[test]
    fn two_spheres_one_material_scenario() {
        let enc = encode(&two_sphere_scene(), Dimensions::new(640, 480));

        let spheres = enc.slot(BindingSlot::Spheres);
        assert_eq!(spheres.len(), 2 * 32);
        let mut expected = Vec::new();
        for v in [0.0f32, 0.0, -5.0] {
            expected.extend_from_slice(&v.to_le_bytes());
        }
        assert_eq!(&spheres[0..12], &expected[..]);
        assert_eq!(f32_at(spheres, 12), 1.0);
        assert_eq!(u32_at(spheres, 16), 0);
        assert_eq!(f32_at(spheres, 32), 2.0);

        assert_eq!(enc.slot(BindingSlot::Materials).len(), 16);
    }

    #[test]
    fn materials_decode_in_order() {
        let materials = vec![
            Material::new(ColorRgb::from_hex("#212d79").unwrap(), 1.0),
            Material::new(ColorRgb::from_hex("#1a8033").unwrap(), 0.7),
            Material::new(ColorRgb::from_hex("#901b90").unwrap(), 0.19),
        ];
        let scene = SceneState { materials: materials.clone(), ..SceneState::default() };
        let bytes = encode(&scene, Dimensions::new(1, 1)).slot(BindingSlot::Materials).to_vec();
        assert_eq!(bytes.len(), materials.len() * 16);

        for (i, m) in materials.iter().enumerate() {
            let base = i * 16;
            let albedo = ColorRgb::new(f32_at(&bytes, base), f32_at(&bytes, base + 4), f32_at(&bytes, base + 8));
            assert!((albedo.r - m.albedo.r).abs() < 1e-6);
            assert!((albedo.g - m.albedo.g).abs() < 1e-6);
            assert!((albedo.b - m.albedo.b).abs() < 1e-6);
            assert_eq!(f32_at(&bytes, base + 12), m.roughness);
        }
    }

    #[test]
    fn settings_are_native_u32() {
        let scene = SceneState {
            settings: Settings { bounces: 3, samples_per_frame: 16, seed: 0.25 },
            ..SceneState::default()
        };
        let bytes = encode(&scene, Dimensions::new(1, 1)).slot(BindingSlot::Settings).to_vec();
        assert_eq!(u32_at(&bytes, 0), 3);
        assert_eq!(u32_at(&bytes, 4), 16);
        assert_eq!(f32_at(&bytes, 8), 0.25);
        assert_eq!(u32_at(&bytes, 12), 0);
    }

    #[test]
    fn dimensions_follow_the_surface() {
        let enc = encode(&SceneState::default(), Dimensions::new(1920, 1080));
        let bytes = enc.slot(BindingSlot::Dimensions);
        assert_eq!(f32_at(bytes, 0), 1920.0);
        assert_eq!(f32_at(bytes, 4), 1080.0);
        assert_eq!(&bytes[8..16], &[0u8; 8][..]);
    }

    #[test]
    fn light_and_sky_pad_the_fourth_lane() {
        let scene = SceneState {
            light: Some(Light::new(Vec3::new(-4.8, 5.5, 0.0))),
            sky_color: ColorRgb::new(0.1, 0.2, 0.3),
            ..SceneState::default()
        };
        let enc = encode(&scene, Dimensions::new(1, 1));

        let light = enc.slot(BindingSlot::Light);
        assert_eq!(f32_at(light, 0), -4.8);
        assert_eq!(f32_at(light, 4), 5.5);
        assert_eq!(f32_at(light, 12), 0.0);

        let sky = enc.slot(BindingSlot::Sky);
        assert_eq!(f32_at(sky, 8), 0.3);
        assert_eq!(f32_at(sky, 12), 0.0);
    }
}
