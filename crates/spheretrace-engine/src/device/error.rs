use std::fmt;

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}

/// Errors raised by the device session and the renderer.
///
/// Failures during `init` leave the renderer uninitialized; none of these are
/// retried internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// `draw` was called before `init` completed or after `dispose`.
    NotInitialized,
    /// `init` was called while a session is already held.
    AlreadyInitialized,
    /// The window could not produce a wgpu surface.
    SurfaceUnavailable(String),
    /// No adapter, or the adapter refused to create a device.
    DeviceUnavailable(String),
    /// The surface reports no formats compatible with the adapter.
    UnsupportedSurface,
    /// The window has a zero-sized drawable at init time.
    ZeroSizedSurface,
    /// The surface ran out of memory while acquiring a frame.
    OutOfMemory,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::NotInitialized => {
                write!(f, "renderer is not initialized: no device session (call init first)")
            }
            RenderError::AlreadyInitialized => {
                write!(f, "renderer is already initialized; dispose the current session first")
            }
            RenderError::SurfaceUnavailable(msg) => write!(f, "failed to create surface: {msg}"),
            RenderError::DeviceUnavailable(msg) => write!(f, "no usable GPU device: {msg}"),
            RenderError::UnsupportedSurface => write!(f, "surface exposes no supported formats"),
            RenderError::ZeroSizedSurface => write!(f, "surface has zero size"),
            RenderError::OutOfMemory => write!(f, "surface out of memory"),
        }
    }
}

impl std::error::Error for RenderError {}
