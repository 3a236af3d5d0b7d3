//! Implicit-surface primitives.

use crate::behavior::Behavior;
use crate::bounds::Aabb;
use crate::rotation::Rotation;
use glam::Vec3;

/// Which signed-distance function a [`SceneObject`] contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// Sphere; radius is `scale.x`.
    Sphere,
    /// Rounded box; `scale` are the half-extents.
    Box,
    /// Finite quad patch in the local XZ plane; half-extents are
    /// `scale.x`/`scale.z`, `scale.y` is ignored.
    Plane,
}

/// One primitive in the scene.
///
/// `scale` semantics depend on `kind` (see [`ObjectKind`]). Invariants:
/// `scale` components are non-negative and `rotation` is unit-length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObject {
    pub position: Vec3,
    pub rotation: Rotation,
    pub scale: Vec3,
    pub kind: ObjectKind,
    /// Surface color, each channel normalized to 0..1.
    pub color: Vec3,
    /// Drives both the specular exponent and the specular weight, 0..1.
    pub smoothness: f32,
    pub behavior: Behavior,
}

impl SceneObject {
    #[must_use]
    pub fn new(
        position: Vec3,
        rotation: Rotation,
        scale: Vec3,
        kind: ObjectKind,
        color: Vec3,
    ) -> Self {
        Self {
            position,
            rotation,
            scale,
            kind,
            color,
            smoothness: 0.5,
            behavior: Behavior::Fixed,
        }
    }

    #[must_use]
    pub fn with_smoothness(mut self, smoothness: f32) -> Self {
        self.smoothness = smoothness;
        self
    }

    #[must_use]
    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Conservative world-space bounds: the corners of a box at 1.5x the
    /// object's scale, rotated into place. Exported metadata only; the
    /// marcher tests every object regardless.
    #[must_use]
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_oriented_box(self.position, self.rotation.value, self.scale * 1.5)
    }
}

impl Default for SceneObject {
    fn default() -> Self {
        Self::new(
            Vec3::ZERO,
            Rotation::IDENTITY,
            Vec3::ONE,
            ObjectKind::Sphere,
            Vec3::ONE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_covers_scaled_extents() {
        let object = SceneObject::new(
            Vec3::new(2.0, 0.0, 0.0),
            Rotation::IDENTITY,
            Vec3::ONE,
            ObjectKind::Sphere,
            Vec3::ONE,
        );
        let aabb = object.bounding_box();
        assert_eq!(aabb.lower, Vec3::new(0.5, -1.5, -1.5));
        assert_eq!(aabb.upper, Vec3::new(3.5, 1.5, 1.5));
    }
}
