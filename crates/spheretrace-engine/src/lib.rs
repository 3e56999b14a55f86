//! Spheretrace engine crate.
//!
//! Owns the scene model, the GPU layout encoder, the resource cache, the frame
//! driver and the platform runtime used by the studio binary.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod layout;
pub mod render;
pub mod resources;
pub mod scene;
