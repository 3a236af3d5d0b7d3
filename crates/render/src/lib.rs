//! Sphere-tracing renderer core.
//!
//! Consumes a [`scene::Scene`] and produces a row-major packed RGBA8 pixel
//! buffer by marching one ray per pixel through the scene's signed distance
//! field. The per-pixel algorithm lives in [`kernel`] and is executed by a
//! [`RenderBackend`]: the CPU backend fans pixels out over rayon, the
//! optional `gpu` backend dispatches the mirrored WGSL compute shader via
//! wgpu. Both read the same [`records`], so the host and the device agree on
//! every byte of the frame's inputs.
//!
//! The window, input handling and on-screen presentation are external
//! collaborators; this crate's surface is [`Renderer::set_resolution`],
//! [`Renderer::render`] and [`Renderer::pixels`].

pub mod backend;
#[cfg(feature = "cpu")]
pub mod cpu_backend;
pub mod kernel;
pub mod records;
pub mod renderer;
#[cfg(feature = "gpu")]
pub mod wgpu_backend;

pub use backend::{FrameInput, RenderBackend};
#[cfg(feature = "cpu")]
pub use cpu_backend::CpuBackend;
pub use renderer::{default_backend, FrameStatus, Renderer, SkipReason};
#[cfg(feature = "gpu")]
pub use wgpu_backend::WgpuBackend;

use thiserror::Error;

/// Failures of the render path itself.
///
/// Configuration misuse (empty scene, unsized output) is deliberately not in
/// here; those skip the frame via [`FrameStatus::Skipped`]. An error means
/// the device could not allocate or read back, which nothing upstream can
/// recover from mid-frame.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("device buffer allocation failed: {0}")]
    Allocation(String),
    #[error("frame readback failed: {0}")]
    Readback(String),
}
