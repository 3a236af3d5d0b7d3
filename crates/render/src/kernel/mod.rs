//! The per-pixel kernel.
//!
//! Everything under this module executes once per output pixel with no shared
//! mutable state: ray generation, the sphere-tracing march, normal
//! estimation, shading and quantization. The WGSL compute shader in
//! `raymarch.wgsl` mirrors these functions; a change on either side must be
//! made on both.

pub mod march;
pub mod ray;
pub mod sdf;
pub mod shade;
pub mod tonemap;

use crate::records::{GlobalsRecord, LightRecord, ObjectRecord};
use glam::Vec3;

/// Iteration budget for the primary and shadow march loops.
pub const MAX_STEPS: u32 = 256;
/// Hit threshold of the march loops.
pub const EPSILON: f32 = 0.001;
/// Sample offset of the tetrahedron normal estimate.
pub const NORMAL_OFFSET: f32 = 0.001;
/// Edge rounding subtracted from the box distance.
pub const BOX_EDGE_RADIUS: f32 = 0.1;
/// Distance cap for shadow rays.
pub const SHADOW_T_MAX: f32 = 100.0;
/// Unshadowed ambient factor applied to every hit.
pub const AMBIENT: f32 = 0.1;

/// Normalizes `v`, mapping zero-length input to the zero vector instead of
/// NaN. A degenerate direction (for example a light coincident with the
/// shading point) then contributes nothing downstream.
#[must_use]
pub fn safe_normalize(v: Vec3) -> Vec3 {
    let length = v.length();
    if length == 0.0 {
        Vec3::ZERO
    } else {
        v / length
    }
}

/// Runs the whole kernel for one pixel and returns the packed RGBA8 value.
#[must_use]
pub fn render_pixel(
    x: u32,
    y: u32,
    globals: &GlobalsRecord,
    objects: &[ObjectRecord],
    lights: &[LightRecord],
) -> u32 {
    let (origin, dir) = ray::pixel_ray(x, y, &globals.camera, globals.width, globals.height);
    let radiance = match march::march(origin, dir, objects) {
        Some(hit) => {
            let normal = shade::surface_normal(hit.point, objects);
            shade::shade(
                hit.point,
                normal,
                &objects[hit.index],
                Vec3::from(globals.camera.position),
                objects,
                lights,
            )
        }
        None => Vec3::ZERO,
    };
    tonemap::pack_rgba8(tonemap::tone_map(radiance))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_normalize_handles_zero() {
        assert_eq!(safe_normalize(Vec3::ZERO), Vec3::ZERO);
        let n = safe_normalize(Vec3::new(0.0, 3.0, 4.0));
        assert!((n - Vec3::new(0.0, 0.6, 0.8)).length() < 1e-6);
    }
}
