//! Frame orchestration: marshalling, configuration guards and dispatch.

use crate::backend::{FrameInput, RenderBackend};
use crate::records::{CameraRecord, GlobalsRecord, LightRecord, ObjectRecord};
use crate::RenderError;
use scene::Scene;

/// Outcome of a [`Renderer::render`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// The kernel ran; [`Renderer::pixels`] holds the new frame.
    Rendered,
    /// The frame was skipped; the previous pixels are retained.
    Skipped(SkipReason),
}

/// Why a frame was skipped instead of dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The object list is empty; there is nothing to march against.
    EmptyObjects,
    /// The light list is empty.
    EmptyLights,
    /// The output buffer is unsized: the resolution was never set, or was
    /// set to a zero-area size.
    ZeroResolution,
}

/// Owns a backend and drives it one frame at a time.
///
/// Per frame, [`Renderer::render`] flattens the scene into device records,
/// checks the configuration guards and dispatches. Configuration misuse is
/// not an error: the frame is skipped and the previous pixels stay readable.
pub struct Renderer {
    backend: Box<dyn RenderBackend>,
    width: u32,
    height: u32,
}

impl Renderer {
    #[must_use]
    pub fn new(backend: Box<dyn RenderBackend>) -> Self {
        Self {
            backend,
            width: 0,
            height: 0,
        }
    }

    /// Resizes the output buffer.
    ///
    /// Reallocation happens here and only here, never while a dispatch is in
    /// flight or a readback is being consumed. A no-op when the resolution
    /// is unchanged.
    pub fn set_resolution(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        if width == self.width && height == self.height {
            return Ok(());
        }
        self.backend.resize(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Flattens `scene` into records and dispatches one frame.
    pub fn render(&mut self, scene: &Scene) -> Result<FrameStatus, RenderError> {
        if self.width == 0 || self.height == 0 {
            tracing::debug!("skipping frame: output buffer is unsized");
            return Ok(FrameStatus::Skipped(SkipReason::ZeroResolution));
        }
        if scene.objects.is_empty() {
            tracing::debug!("skipping frame: no objects");
            return Ok(FrameStatus::Skipped(SkipReason::EmptyObjects));
        }
        if scene.lights.is_empty() {
            tracing::debug!("skipping frame: no lights");
            return Ok(FrameStatus::Skipped(SkipReason::EmptyLights));
        }

        let objects: Vec<ObjectRecord> = scene.objects.iter().map(ObjectRecord::from).collect();
        let lights: Vec<LightRecord> = scene.lights.iter().map(LightRecord::from).collect();
        let globals = GlobalsRecord::new(
            CameraRecord::from(&scene.camera),
            self.width,
            self.height,
            objects.len() as u32,
            lights.len() as u32,
        );

        self.backend.dispatch(&FrameInput {
            globals,
            objects: &objects,
            lights: &lights,
        })?;
        Ok(FrameStatus::Rendered)
    }

    /// The last completed frame, row-major RGBA8, indexed `y * width + x`.
    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        self.backend.pixels()
    }

    #[must_use]
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Returns the best available backend: the GPU when the `gpu` feature is
/// enabled and a device can be acquired, the CPU otherwise.
#[must_use]
pub fn default_backend() -> Box<dyn RenderBackend> {
    #[cfg(feature = "gpu")]
    {
        match crate::wgpu_backend::WgpuBackend::new() {
            Ok(backend) => {
                tracing::info!("using wgpu backend");
                return Box::new(backend);
            }
            Err(error) => {
                tracing::warn!(%error, "wgpu backend unavailable, falling back to cpu");
            }
        }
    }

    #[cfg(feature = "cpu")]
    {
        tracing::info!("using cpu backend");
        return Box::new(crate::cpu_backend::CpuBackend::new());
    }

    #[cfg(not(feature = "cpu"))]
    {
        compile_error!("no render backend available: enable the `cpu` or `gpu` feature");
    }
}
