//! The sphere-tracing march.

use super::{sdf, EPSILON, MAX_STEPS};
use crate::records::ObjectRecord;
use glam::Vec3;

/// A surface hit found by [`march`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Point on (within [`EPSILON`] of) the surface.
    pub point: Vec3,
    /// Index of the hit primitive in the object list.
    pub index: usize,
    /// Ray parameter at the hit.
    pub t: f32,
}

/// Marches `origin + dir * t` until a primitive is within [`EPSILON`] or the
/// step budget runs out.
///
/// Each step advances by the distance to the nearest primitive, which can
/// never overshoot a surface. The strict `<` on the running minimum makes the
/// first object in the list win when two report exactly equal distances. A
/// negative per-object distance (the point is inside that primitive) is
/// treated as a miss so the march never steps backwards; overlapping
/// primitives therefore carve each other out rather than render a true
/// union.
#[must_use]
pub fn march(origin: Vec3, dir: Vec3, objects: &[ObjectRecord]) -> Option<Hit> {
    let mut t = 0.0f32;
    for _ in 0..MAX_STEPS {
        let point = origin + dir * t;

        let mut nearest = sdf::MISS;
        let mut index = 0;
        for (i, object) in objects.iter().enumerate() {
            let distance = sdf::object_sdf(point, object);
            let distance = if distance < 0.0 { sdf::MISS } else { distance };
            if distance < nearest {
                nearest = distance;
                index = i;
            }
        }

        if nearest < EPSILON {
            return Some(Hit { point, index, t });
        }
        if !nearest.is_finite() {
            return None;
        }
        t += nearest;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use scene::{ObjectKind, Rotation, SceneObject};

    fn sphere(position: Vec3, radius: f32) -> crate::records::ObjectRecord {
        crate::records::ObjectRecord::from(&SceneObject::new(
            position,
            Rotation::IDENTITY,
            Vec3::splat(radius),
            ObjectKind::Sphere,
            Vec3::ONE,
        ))
    }

    #[test]
    fn hits_a_sphere_head_on() {
        let objects = [sphere(Vec3::new(0.0, 0.0, -5.0), 1.0)];
        let hit = march(Vec3::ZERO, Vec3::NEG_Z, &objects).expect("hit");
        assert_eq!(hit.index, 0);
        assert!((hit.t - 4.0).abs() < EPSILON * 2.0);
    }

    #[test]
    fn misses_empty_scene() {
        assert!(march(Vec3::ZERO, Vec3::NEG_Z, &[]).is_none());
    }

    #[test]
    fn misses_when_looking_away() {
        let objects = [sphere(Vec3::new(0.0, 0.0, -5.0), 1.0)];
        assert!(march(Vec3::ZERO, Vec3::Z, &objects).is_none());
    }
}
