//! The dispatch boundary between the host and the per-pixel kernel.

use crate::records::{GlobalsRecord, LightRecord, ObjectRecord};
use crate::RenderError;

/// One frame's immutable kernel inputs.
///
/// The record slices are borrowed for the duration of a single dispatch; the
/// snapshot is rebuilt from the scene every frame and dropped after readback.
pub struct FrameInput<'a> {
    pub globals: GlobalsRecord,
    pub objects: &'a [ObjectRecord],
    pub lights: &'a [LightRecord],
}

/// A render target that executes the kernel once per output pixel.
///
/// Invocations never communicate: each reads the frame's records and writes
/// exactly one output cell.
pub trait RenderBackend {
    /// Reallocates the output storage for a new resolution.
    ///
    /// This is the only place backing buffers change; it is never called
    /// while a dispatch is in flight.
    fn resize(&mut self, width: u32, height: u32) -> Result<(), RenderError>;

    /// Runs the kernel for every pixel of the frame.
    ///
    /// A full barrier: returns only once every pixel has been written, so
    /// [`RenderBackend::pixels`] always reads a complete frame.
    fn dispatch(&mut self, frame: &FrameInput<'_>) -> Result<(), RenderError>;

    /// The last completed frame: row-major packed RGBA8, `y * width + x`.
    fn pixels(&self) -> &[u32];
}
