//! Axis-aligned bounding boxes.
//!
//! Boxes are exported metadata: the marcher never consults them, but they are
//! part of every object record so downstream consumers (culling, picking) can
//! use them without re-deriving object shapes.

use crate::rotation::rotate_point;
use glam::{Quat, Vec3};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub lower: Vec3,
    pub upper: Vec3,
}

impl Aabb {
    #[must_use]
    pub const fn new(lower: Vec3, upper: Vec3) -> Self {
        Self { lower, upper }
    }

    /// Bounds of an oriented box: the eight corners are rotated into world
    /// space and the component-wise min/max taken.
    #[must_use]
    pub fn from_oriented_box(center: Vec3, rotation: Quat, half_extents: Vec3) -> Self {
        let mut lower = Vec3::splat(f32::INFINITY);
        let mut upper = Vec3::splat(f32::NEG_INFINITY);
        for i in 0..8 {
            let corner = Vec3::new(
                if i & 1 == 0 { -half_extents.x } else { half_extents.x },
                if i & 2 == 0 { -half_extents.y } else { half_extents.y },
                if i & 4 == 0 { -half_extents.z } else { half_extents.z },
            );
            let world = center + rotate_point(corner, rotation);
            lower = lower.min(world);
            upper = upper.max(world);
        }
        Self { lower, upper }
    }

    /// Slab-method ray test.
    ///
    /// Zero direction components divide to infinities, which the min/max
    /// folding handles without special cases.
    #[must_use]
    pub fn ray_intersects(&self, ray_origin: Vec3, ray_dir: Vec3) -> bool {
        let vt1 = (self.lower - ray_origin) / ray_dir;
        let vt2 = (self.upper - ray_origin) / ray_dir;
        let tmin = vt1.min(vt2);
        let tmax = vt1.max(vt2);
        let t0 = tmin.x.max(tmin.y.max(tmin.z));
        let t1 = tmax.x.min(tmax.y.min(tmax.z));
        t0 < t1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb {
        Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0))
    }

    #[test]
    fn ray_down_z_axis_intersects() {
        assert!(unit_box().ray_intersects(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn perpendicular_ray_beside_box_misses() {
        assert!(!unit_box().ray_intersects(Vec3::new(5.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn oriented_box_bounds_cover_rotated_corners() {
        // A unit cube yawed 45 degrees spans sqrt(2) along X and Z.
        let q = Quat::from_axis_angle(Vec3::Y, std::f32::consts::FRAC_PI_4);
        let aabb = Aabb::from_oriented_box(Vec3::ZERO, q, Vec3::ONE);
        let expected = 2.0f32.sqrt();
        assert!((aabb.upper.x - expected).abs() < 1e-5);
        assert!((aabb.upper.z - expected).abs() < 1e-5);
        assert!((aabb.upper.y - 1.0).abs() < 1e-5);
        assert!((aabb.lower.x + expected).abs() < 1e-5);
    }
}
