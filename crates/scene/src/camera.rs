//! Camera pose.
//!
//! The camera is a position, an orientation and a vertical field of view;
//! all projection math lives in the renderer's ray generator. Movement and
//! input handling belong to the excluded frame driver.

use crate::rotation::Rotation;
use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub rotation: Rotation,
    /// Vertical field of view in degrees.
    pub fov: f32,
}

impl Camera {
    #[must_use]
    pub fn new(position: Vec3, rotation: Rotation, fov: f32) -> Self {
        Self {
            position,
            rotation,
            fov,
        }
    }

    /// The point one unit ahead of the camera.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.position + self.rotation.forward()
    }

    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation.up()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Rotation::IDENTITY, 90.0)
    }
}
