//! Normal estimation, lighting and soft shadows.
//!
//! This is the dominant per-pixel cost: every hit pays four full-scene SDF
//! evaluations for the normal and, per light, a complete secondary march for
//! the shadow factor.

use super::{safe_normalize, sdf, AMBIENT, EPSILON, MAX_STEPS, NORMAL_OFFSET, SHADOW_T_MAX};
use crate::records::{LightRecord, ObjectRecord, LIGHT_POINT};
use glam::{Quat, Vec3};
use scene::rotate_point;

/// Tetrahedron-offset gradient of the scene SDF at `point`, normalized.
#[must_use]
pub fn surface_normal(point: Vec3, objects: &[ObjectRecord]) -> Vec3 {
    const K1: Vec3 = Vec3::new(1.0, -1.0, -1.0);
    const K2: Vec3 = Vec3::new(-1.0, -1.0, 1.0);
    const K3: Vec3 = Vec3::new(-1.0, 1.0, -1.0);
    const K4: Vec3 = Vec3::new(1.0, 1.0, 1.0);

    let mut normal = Vec3::ZERO;
    normal += K1 * sdf::scene_sdf(point + K1 * NORMAL_OFFSET, objects);
    normal += K2 * sdf::scene_sdf(point + K2 * NORMAL_OFFSET, objects);
    normal += K3 * sdf::scene_sdf(point + K3 * NORMAL_OFFSET, objects);
    normal += K4 * sdf::scene_sdf(point + K4 * NORMAL_OFFSET, objects);
    safe_normalize(normal)
}

/// Soft-shadow factor in `[0, 1]` for a ray from `origin` along `dir`.
///
/// Marches the scene SDF like the primary loop but only tracks the penumbra
/// estimate `sharpness * h / t`; a sample under [`EPSILON`] means a hard
/// occluder and returns 0 outright.
#[must_use]
pub fn shadow(origin: Vec3, dir: Vec3, sharpness: f32, objects: &[ObjectRecord]) -> f32 {
    let mut res = 1.0f32;
    let mut t = 0.0f32;
    for _ in 0..MAX_STEPS {
        if t >= SHADOW_T_MAX {
            break;
        }
        let h = sdf::scene_sdf(origin + dir * t, objects);
        if h < EPSILON {
            return 0.0;
        }
        if t > 0.0 {
            res = res.min(sharpness * h / t);
        }
        t += h;
    }
    res
}

/// Radiance at a hit: per-light diffuse and specular, each attenuated by its
/// own shadow march, plus the unshadowed ambient term.
#[must_use]
pub fn shade(
    point: Vec3,
    normal: Vec3,
    object: &ObjectRecord,
    camera_position: Vec3,
    objects: &[ObjectRecord],
    lights: &[LightRecord],
) -> Vec3 {
    let color = Vec3::from(object.color);
    let mut radiance = Vec3::ZERO;

    for light in lights {
        let light_dir = if light.kind == LIGHT_POINT {
            safe_normalize(Vec3::from(light.position) - point)
        } else {
            rotate_point(Vec3::Z, Quat::from_array(light.rotation))
        };
        // A light coincident with the shading point has no direction.
        if light_dir == Vec3::ZERO {
            continue;
        }

        let diffuse = normal.dot(light_dir).max(0.0);

        let view_dir = safe_normalize(camera_position - point);
        let halfway = safe_normalize(light_dir + view_dir);
        let specular =
            normal.dot(halfway).max(0.0).powf(object.smoothness * 64.0) * object.smoothness;

        let contribution =
            color * Vec3::from(light.color) * (diffuse + specular) * light.intensity;

        let shadow_origin = point + normal * EPSILON;
        radiance += contribution * shadow(shadow_origin, light_dir, light.shadow_sharpness, objects);
    }

    radiance + color * AMBIENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene::{ObjectKind, Rotation, SceneObject};

    fn sphere(position: Vec3, radius: f32) -> ObjectRecord {
        ObjectRecord::from(&SceneObject::new(
            position,
            Rotation::IDENTITY,
            Vec3::splat(radius),
            ObjectKind::Sphere,
            Vec3::ONE,
        ))
    }

    #[test]
    fn normal_points_out_of_a_sphere() {
        let objects = [sphere(Vec3::ZERO, 1.0)];
        let normal = surface_normal(Vec3::new(1.0, 0.0, 0.0), &objects);
        assert!((normal - Vec3::X).length() < 1e-2);
    }

    #[test]
    fn unoccluded_shadow_ray_is_fully_lit() {
        let objects = [sphere(Vec3::new(0.0, -5.0, 0.0), 1.0)];
        let factor = shadow(Vec3::ZERO, Vec3::Y, 32.0, &objects);
        assert_eq!(factor, 1.0);
    }

    #[test]
    fn blocked_shadow_ray_is_dark() {
        let objects = [sphere(Vec3::new(0.0, 3.0, 0.0), 1.0)];
        let factor = shadow(Vec3::ZERO, Vec3::Y, 32.0, &objects);
        assert_eq!(factor, 0.0);
    }
}
