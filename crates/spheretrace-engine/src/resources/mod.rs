//! Resource cache/builder.
//!
//! Creates and reuses the device-side objects a frame needs: the raytrace
//! pipeline, the full-screen quad vertex buffer, one buffer per binding slot
//! and the bind group linking them to the shader.

mod cache;
mod plan;

pub use cache::{FrameResources, ResourceCache};
pub use plan::{plan_frame, plan_upload, FramePlan, SlotUpload};

/// WGSL source of the shading program. Compiled against the layouts in
/// [`crate::layout::gpu`].
pub const SHADER_SOURCE: &str = include_str!("shaders/raytrace.wgsl");

/// How slot buffers are managed across frames.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ResourcePolicy {
    /// Reuse buffers whose byte length is unchanged and only rewrite contents.
    #[default]
    Cached,
    /// Recreate every buffer, the pipeline and the bind group each frame.
    RebuildEveryFrame,
}
