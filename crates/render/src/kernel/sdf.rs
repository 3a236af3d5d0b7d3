//! Signed distance functions for the primitive kinds.
//!
//! Every function takes a world-space point and an [`ObjectRecord`] and
//! returns the signed distance to that primitive's surface, negative inside.
//! Box and plane first map the point into the primitive's local frame by
//! rotating the offset from the center with the conjugate quaternion; the
//! normal estimator and the shadow march reuse the same mapping through
//! [`scene_sdf`].

use super::BOX_EDGE_RADIUS;
use crate::records::{ObjectRecord, KIND_BOX, KIND_PLANE, KIND_SPHERE};
use glam::{Quat, Vec3};
use scene::rotate_point;

/// Distance reported where a primitive has no surface.
pub const MISS: f32 = f32::INFINITY;

/// World to local: rotate the offset from the center by the conjugate of the
/// primitive's rotation.
fn local_point(point: Vec3, object: &ObjectRecord) -> Vec3 {
    let rotation = Quat::from_array(object.rotation);
    rotate_point(point - Vec3::from(object.position), rotation.conjugate())
}

fn sphere_sdf(point: Vec3, object: &ObjectRecord) -> f32 {
    (point - Vec3::from(object.position)).length() - object.scale[0]
}

fn box_sdf(point: Vec3, object: &ObjectRecord) -> f32 {
    let q = local_point(point, object).abs() - Vec3::from(object.scale);
    let d = q.max(Vec3::ZERO).length() + q.x.max(q.y.max(q.z)).min(0.0);
    d - BOX_EDGE_RADIUS
}

/// Bounded quad patch in the local XZ plane, half-extents `scale.x`/`scale.z`.
///
/// A point whose local x/z lie inside the footprint sees no surface at all;
/// without this the finite quad would occlude like an infinite plane.
fn plane_sdf(point: Vec3, object: &ObjectRecord) -> f32 {
    let half_extents = Vec3::new(object.scale[0], 0.0, object.scale[2]);
    let local = local_point(point, object);
    if local.x.abs() <= half_extents.x && local.z.abs() <= half_extents.z {
        return MISS;
    }
    let q = local.abs() - half_extents;
    q.max(Vec3::ZERO).length() + q.x.max(q.y.max(q.z)).min(0.0)
}

/// Distance from `point` to one primitive, dispatched on its kind tag.
#[must_use]
pub fn object_sdf(point: Vec3, object: &ObjectRecord) -> f32 {
    match object.kind {
        KIND_SPHERE => sphere_sdf(point, object),
        KIND_BOX => box_sdf(point, object),
        KIND_PLANE => plane_sdf(point, object),
        _ => MISS,
    }
}

/// Plain minimum over all primitives, negative distances included.
///
/// This is the field the normal estimator and the shadow march sample; the
/// primary march applies its own negative-distance clamp on top.
#[must_use]
pub fn scene_sdf(point: Vec3, objects: &[ObjectRecord]) -> f32 {
    objects
        .iter()
        .map(|object| object_sdf(point, object))
        .fold(MISS, f32::min)
}
