//! Checks that the WGSL program agrees with the encoder's binding layout.

use std::mem::offset_of;

use naga::valid::{Capabilities, ValidationFlags, Validator};
use naga::{AddressSpace, Module, ShaderStage, StorageAccess, TypeInner};
use spheretrace_engine::layout::gpu::{
    GpuDimensions, GpuLight, GpuMaterial, GpuSettings, GpuSky, GpuSphere,
};
use spheretrace_engine::layout::{BindingSlot, SlotKind};
use spheretrace_engine::resources::SHADER_SOURCE;

fn parse() -> Module {
    match naga::front::wgsl::parse_str(SHADER_SOURCE) {
        Ok(module) => module,
        Err(e) => panic!("{}", e.emit_to_string(SHADER_SOURCE)),
    }
}

fn global_at(module: &Module, binding: u32) -> &naga::GlobalVariable {
    module
        .global_variables
        .iter()
        .map(|(_, g)| g)
        .find(|g| {
            g.binding
                .as_ref()
                .is_some_and(|b| b.group == 0 && b.binding == binding)
        })
        .unwrap_or_else(|| panic!("no global at @group(0) @binding({binding})"))
}

/// `(name, offset)` of each member of the struct bound at `slot`, looking
/// through the array for storage slots.
fn wgsl_members(module: &Module, slot: BindingSlot) -> Vec<(String, usize)> {
    let global = global_at(module, slot.index());
    let mut ty = global.ty;
    if let TypeInner::Array { base, .. } = module.types[ty].inner {
        ty = base;
    }
    let TypeInner::Struct { members, .. } = &module.types[ty].inner else {
        panic!("{slot:?}: binding is not a struct");
    };
    members
        .iter()
        .map(|m| (m.name.clone().unwrap_or_default(), m.offset as usize))
        .collect()
}

/// Field layout of the Rust struct the encoder writes for `slot`.
///
/// The shader spells `GpuSphere::_pad` as three scalar fields.
fn encoder_members(slot: BindingSlot) -> Vec<(&'static str, usize)> {
    match slot {
        BindingSlot::Dimensions => vec![
            ("size", offset_of!(GpuDimensions, size)),
            ("_pad", offset_of!(GpuDimensions, _pad)),
        ],
        BindingSlot::Settings => vec![
            ("bounces", offset_of!(GpuSettings, bounces)),
            ("samples_per_frame", offset_of!(GpuSettings, samples_per_frame)),
            ("seed", offset_of!(GpuSettings, seed)),
            ("_pad", offset_of!(GpuSettings, _pad)),
        ],
        BindingSlot::Light => vec![
            ("position", offset_of!(GpuLight, position)),
            ("_pad", offset_of!(GpuLight, _pad)),
        ],
        BindingSlot::Sky => vec![
            ("color", offset_of!(GpuSky, color)),
            ("_pad", offset_of!(GpuSky, _pad)),
        ],
        BindingSlot::Materials => vec![
            ("albedo", offset_of!(GpuMaterial, albedo)),
            ("roughness", offset_of!(GpuMaterial, roughness)),
        ],
        BindingSlot::Spheres => {
            let pad = offset_of!(GpuSphere, _pad);
            vec![
                ("position", offset_of!(GpuSphere, position)),
                ("radius", offset_of!(GpuSphere, radius)),
                ("material_index", offset_of!(GpuSphere, material_index)),
                ("_pad0", pad),
                ("_pad1", pad + 4),
                ("_pad2", pad + 8),
            ]
        }
    }
}

// ── module ────────────────────────────────────────────────────────────────

#[test]
fn shader_validates() {
    let module = parse();
    Validator::new(ValidationFlags::all(), Capabilities::empty())
        .validate(&module)
        .expect("shader failed validation");
}

#[test]
fn exposes_one_vertex_and_one_fragment_entry() {
    let module = parse();
    let mut names: Vec<(ShaderStage, &str)> = module
        .entry_points
        .iter()
        .map(|ep| (ep.stage, ep.name.as_str()))
        .collect();
    names.sort_by_key(|(_, n)| *n);

    assert_eq!(
        names,
        vec![
            (ShaderStage::Fragment, "fragment_main"),
            (ShaderStage::Vertex, "vertex_main"),
        ]
    );
}

#[test]
fn vertex_entry_reads_vec4_at_location_zero() {
    let module = parse();
    let ep = module
        .entry_points
        .iter()
        .find(|ep| ep.stage == ShaderStage::Vertex)
        .unwrap();

    assert_eq!(ep.function.arguments.len(), 1);
    let arg = &ep.function.arguments[0];
    assert!(matches!(
        arg.binding,
        Some(naga::Binding::Location { location: 0, .. })
    ));
    assert!(matches!(
        module.types[arg.ty].inner,
        TypeInner::Vector { size: naga::VectorSize::Quad, scalar } if scalar == naga::Scalar::F32
    ));
}

// ── bindings ──────────────────────────────────────────────────────────────

#[test]
fn binding_slots_match_address_spaces() {
    let module = parse();

    for slot in BindingSlot::ALL {
        let global = global_at(&module, slot.index());
        match slot.kind() {
            SlotKind::Uniform => assert_eq!(global.space, AddressSpace::Uniform, "{slot:?}"),
            SlotKind::Storage => assert_eq!(
                global.space,
                AddressSpace::Storage { access: StorageAccess::LOAD },
                "{slot:?}"
            ),
        }
    }
}

#[test]
fn no_bindings_beyond_the_six_slots() {
    let module = parse();
    let bound = module
        .global_variables
        .iter()
        .filter(|(_, g)| g.binding.is_some())
        .count();
    assert_eq!(bound, BindingSlot::ALL.len());
}

#[test]
fn struct_sizes_match_encoder_granules() {
    let module = parse();

    for slot in BindingSlot::ALL {
        let global = global_at(&module, slot.index());
        let size = match &module.types[global.ty].inner {
            TypeInner::Struct { span, .. } => *span as usize,
            TypeInner::Array { stride, .. } => *stride as usize,
            other => panic!("{slot:?}: unexpected binding type {other:?}"),
        };
        assert_eq!(size, slot.granule(), "{slot:?}");
    }
}

#[test]
fn array_element_strides_are_sixteen_aligned() {
    let module = parse();

    for slot in [BindingSlot::Materials, BindingSlot::Spheres] {
        let global = global_at(&module, slot.index());
        let TypeInner::Array { stride, size, .. } = module.types[global.ty].inner else {
            panic!("{slot:?} is not an array");
        };
        assert_eq!(size, naga::ArraySize::Dynamic);
        assert_eq!(stride % 16, 0, "{slot:?}");
    }
}

#[test]
fn member_offsets_match_encoder_structs() {
    let module = parse();

    for slot in BindingSlot::ALL {
        let wgsl = wgsl_members(&module, slot);
        let expected: Vec<(String, usize)> = encoder_members(slot)
            .into_iter()
            .map(|(name, offset)| (name.to_string(), offset))
            .collect();
        assert_eq!(wgsl, expected, "{slot:?}");
    }
}

#[test]
fn roughness_and_radius_share_the_vec3_lane() {
    let module = parse();

    let material = wgsl_members(&module, BindingSlot::Materials);
    assert_eq!(material[1], ("roughness".to_string(), 12));

    let sphere = wgsl_members(&module, BindingSlot::Spheres);
    assert_eq!(sphere[1], ("radius".to_string(), 12));
    assert_eq!(sphere[2], ("material_index".to_string(), 16));
}
