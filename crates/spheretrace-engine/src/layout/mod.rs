//! Layout encoder.
//!
//! Turns a `SceneState` plus the live drawable size into the byte payloads the
//! shading program decodes. Rules:
//! - each struct is padded to a 16-byte multiple; a trailing scalar may take
//!   the fourth lane of a `vec3`
//! - arrays are array-of-structs, one element after another
//! - an empty array encodes as a single zero-filled element
//! - integers (`bounces`, `samples_per_frame`, `material_index`) travel as `u32`

mod encode;
pub mod gpu;
mod slot;

pub use encode::{encode, EncodedScene};
pub use slot::{BindingSlot, SlotKind};
