//! Light sources.

use crate::rotation::{rotate_point, Rotation};
use glam::Vec3;

/// How a [`Light`] illuminates the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    /// Radiates from `position`; direction depends on the shaded point.
    Point,
    /// Parallel rays along the light's rotated +Z axis; position is ignored.
    Directional,
}

/// One light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub rotation: Rotation,
    /// Light color, each channel normalized to 0..1.
    pub color: Vec3,
    pub intensity: f32,
    /// Penumbra steepness of the soft-shadow march; higher is harder-edged.
    pub shadow_sharpness: f32,
    pub kind: LightKind,
}

impl Light {
    #[must_use]
    pub fn point(position: Vec3, color: Vec3, intensity: f32) -> Self {
        Self {
            position,
            rotation: Rotation::IDENTITY,
            color,
            intensity,
            shadow_sharpness: 32.0,
            kind: LightKind::Point,
        }
    }

    #[must_use]
    pub fn directional(rotation: Rotation, color: Vec3, intensity: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation,
            color,
            intensity,
            shadow_sharpness: 32.0,
            kind: LightKind::Directional,
        }
    }

    #[must_use]
    pub fn with_shadow_sharpness(mut self, shadow_sharpness: f32) -> Self {
        self.shadow_sharpness = shadow_sharpness;
        self
    }

    /// Emission direction of a directional light: the rotation applied to +Z.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        rotate_point(Vec3::Z, self.rotation.value)
    }
}

impl Default for Light {
    fn default() -> Self {
        Self::point(Vec3::ZERO, Vec3::ONE, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_directional_light_points_along_z() {
        let light = Light::directional(Rotation::IDENTITY, Vec3::ONE, 1.0);
        assert_eq!(light.direction(), Vec3::Z);
    }

    #[test]
    fn default_shadow_sharpness() {
        assert_eq!(Light::default().shadow_sharpness, 32.0);
    }
}
