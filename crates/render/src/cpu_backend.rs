//! CPU implementation of [`RenderBackend`].
//!
//! Runs the same kernel as the WGSL compute shader, fanned out across a
//! rayon scanline split. Useful as the reference implementation and as the
//! fallback when no GPU adapter is available.

use crate::backend::{FrameInput, RenderBackend};
use crate::kernel;
use crate::RenderError;
use rayon::prelude::*;

/// CPU reference backend, one rayon task per scanline.
#[derive(Default, Debug, Clone)]
pub struct CpuBackend {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl CpuBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderBackend for CpuBackend {
    fn resize(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        tracing::debug!(width, height, "reallocating cpu output buffer");
        self.pixels = vec![0; width as usize * height as usize];
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn dispatch(&mut self, frame: &FrameInput<'_>) -> Result<(), RenderError> {
        debug_assert_eq!(frame.globals.width, self.width);
        debug_assert_eq!(frame.globals.height, self.height);

        let width = self.width as usize;
        // par_chunks_mut joins every scanline before returning, which is the
        // dispatch barrier.
        self.pixels
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.iter_mut().enumerate() {
                    *pixel = kernel::render_pixel(
                        x as u32,
                        y as u32,
                        &frame.globals,
                        frame.objects,
                        frame.lights,
                    );
                }
            });
        Ok(())
    }

    fn pixels(&self) -> &[u32] {
        &self.pixels
    }
}
