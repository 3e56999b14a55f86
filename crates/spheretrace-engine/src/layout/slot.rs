use std::num::NonZeroU64;

use super::gpu::{GpuDimensions, GpuLight, GpuMaterial, GpuSettings, GpuSky, GpuSphere};

/// Binding slots of bind group 0, in shader declaration order.
///
/// The numbering is a contract with `raytrace.wgsl` and must change on both
/// sides together.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BindingSlot {
    Dimensions = 0,
    Settings = 1,
    Light = 2,
    Sky = 3,
    Materials = 4,
    Spheres = 5,
}

/// Buffer binding class of a slot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SlotKind {
    Uniform,
    /// Read-only storage array.
    Storage,
}

impl BindingSlot {
    pub const ALL: [BindingSlot; 6] = [
        BindingSlot::Dimensions,
        BindingSlot::Settings,
        BindingSlot::Light,
        BindingSlot::Sky,
        BindingSlot::Materials,
        BindingSlot::Spheres,
    ];

    #[inline]
    pub const fn index(self) -> u32 {
        self as u32
    }

    pub const fn kind(self) -> SlotKind {
        match self {
            BindingSlot::Materials | BindingSlot::Spheres => SlotKind::Storage,
            _ => SlotKind::Uniform,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            BindingSlot::Dimensions => "spheretrace dimensions ubo",
            BindingSlot::Settings => "spheretrace settings ubo",
            BindingSlot::Light => "spheretrace light ubo",
            BindingSlot::Sky => "spheretrace sky ubo",
            BindingSlot::Materials => "spheretrace materials ssbo",
            BindingSlot::Spheres => "spheretrace spheres ssbo",
        }
    }

    /// Size of one encoded element: the whole struct for uniforms, the array
    /// stride for storage slots. Also the smallest payload the encoder emits.
    pub const fn granule(self) -> usize {
        match self {
            BindingSlot::Dimensions => std::mem::size_of::<GpuDimensions>(),
            BindingSlot::Settings => std::mem::size_of::<GpuSettings>(),
            BindingSlot::Light => std::mem::size_of::<GpuLight>(),
            BindingSlot::Sky => std::mem::size_of::<GpuSky>(),
            BindingSlot::Materials => std::mem::size_of::<GpuMaterial>(),
            BindingSlot::Spheres => std::mem::size_of::<GpuSphere>(),
        }
    }

    /// Minimum binding size declared in the bind group layout.
    pub fn min_binding_size(self) -> NonZeroU64 {
        // Every granule is a non-zero struct size (asserted in gpu.rs tests).
        NonZeroU64::new(self.granule() as u64).unwrap_or(NonZeroU64::MIN)
    }

    pub fn buffer_usage(self) -> wgpu::BufferUsages {
        match self.kind() {
            SlotKind::Uniform => wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            SlotKind::Storage => wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
        }
    }

    pub fn binding_type(self) -> wgpu::BindingType {
        let ty = match self.kind() {
            SlotKind::Uniform => wgpu::BufferBindingType::Uniform,
            SlotKind::Storage => wgpu::BufferBindingType::Storage { read_only: true },
        };
        wgpu::BindingType::Buffer {
            ty,
            has_dynamic_offset: false,
            min_binding_size: Some(self.min_binding_size()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_are_numbered_in_declaration_order() {
        for (i, slot) in BindingSlot::ALL.iter().enumerate() {
            assert_eq!(slot.index() as usize, i);
        }
    }

    #[test]
    fn only_arrays_are_storage() {
        let storage: Vec<_> = BindingSlot::ALL
            .into_iter()
            .filter(|s| s.kind() == SlotKind::Storage)
            .collect();
        assert_eq!(storage, vec![BindingSlot::Materials, BindingSlot::Spheres]);
    }

    #[test]
    fn granules_are_16_byte_aligned() {
        for slot in BindingSlot::ALL {
            assert_eq!(slot.granule() % 16, 0, "{slot:?}");
            assert!(slot.granule() >= 16);
        }
    }
}
