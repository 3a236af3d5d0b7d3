//! Radiance compression and pixel packing.

use glam::Vec3;

/// Steepness of the logistic highlight compression.
pub const SIGMOID_STEEPNESS: f32 = 3.0;

fn compress(channel: f32) -> f32 {
    2.0 / (1.0 + (-SIGMOID_STEEPNESS * channel).exp()) - 1.0
}

/// Compresses unbounded linear radiance into `[-1, 1)` per channel with a
/// rescaled logistic sigmoid, rolling highlights off smoothly instead of
/// clipping them.
#[must_use]
pub fn tone_map(radiance: Vec3) -> Vec3 {
    Vec3::new(
        compress(radiance.x),
        compress(radiance.y),
        compress(radiance.z),
    )
}

/// Packs a tone-mapped color as `A << 24 | B << 16 | G << 8 | R`, alpha 255.
#[must_use]
pub fn pack_rgba8(color: Vec3) -> u32 {
    let r = (color.x * 255.0).clamp(0.0, 255.0) as u32;
    let g = (color.y * 255.0).clamp(0.0, 255.0) as u32;
    let b = (color.z * 255.0).clamp(0.0, 255.0) as u32;
    0xff00_0000 | b << 16 | g << 8 | r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_radiance_is_black() {
        assert_eq!(tone_map(Vec3::ZERO), Vec3::ZERO);
        assert_eq!(pack_rgba8(Vec3::ZERO), 0xff00_0000);
    }

    #[test]
    fn compression_saturates_smoothly() {
        let bright = tone_map(Vec3::splat(10.0));
        assert!(bright.x > 0.99 && bright.x < 1.0);
        // Negative radiance clamps to zero at packing time.
        assert_eq!(pack_rgba8(Vec3::splat(-1.0)), 0xff00_0000);
    }

    #[test]
    fn packs_channels_in_abgr_order() {
        let packed = pack_rgba8(Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(packed, 0xffff_00ff);
    }
}
