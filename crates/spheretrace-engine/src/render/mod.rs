//! Frame driver.
//!
//! `Renderer` owns the device session and resource cache and issues exactly one
//! render pass per `draw`: clear, bind pipeline, vertex buffer and scene bind
//! group, draw six vertices.
//!
//! Convention:
//! - the quad is already in clip space; the fragment stage does all the work
//! - frame dimensions are physical pixels, re-read by the caller every tick

mod renderer;

pub use crate::device::RenderError;
pub use renderer::{FrameStatus, Lifecycle, Renderer, RendererConfig};
