//! Device session.
//!
//! This module is responsible for:
//! - negotiating the wgpu Instance/Adapter/Device/Queue for a window
//! - creating & configuring the Surface (swapchain)
//! - acquiring frames and presenting them

mod error;
mod init;
mod session;
mod surface;

pub use error::{RenderError, SurfaceErrorAction};
pub use init::GpuInit;
pub use session::{DeviceSession, SurfaceFrame};
