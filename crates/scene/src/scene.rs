//! The scene aggregate.

use crate::camera::Camera;
use crate::light::Light;
use crate::object::SceneObject;

/// Everything the renderer reads for one frame.
///
/// Object and light order is semantically inert except as the deterministic
/// tie-break: when two objects report exactly equal distances during a march,
/// the first one in the list wins. The frame driver mutates this state
/// between frames; the renderer only reads it.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub lights: Vec<Light>,
    pub camera: Camera,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies every object's [`Behavior`](crate::Behavior) for a `dt`-second
    /// step. Called by the frame driver between frames, never mid-render.
    pub fn update(&mut self, dt: f32) {
        for object in &mut self.objects {
            object.update(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::Behavior;
    use crate::object::{ObjectKind, SceneObject};
    use crate::rotation::Rotation;
    use glam::Vec3;

    #[test]
    fn update_advances_every_object() {
        let mut scene = Scene::new();
        scene.objects.push(SceneObject::default());
        scene.objects.push(
            SceneObject::new(
                Vec3::new(0.0, 2.0, 0.0),
                Rotation::IDENTITY,
                Vec3::ONE,
                ObjectKind::Sphere,
                Vec3::ONE,
            )
            .with_behavior(Behavior::Bounce {
                velocity: Vec3::new(0.0, 1.0, 0.0),
                min_y: 0.0,
                max_y: 10.0,
            }),
        );
        scene.update(0.5);
        assert_eq!(scene.objects[0].position, Vec3::ZERO);
        assert_eq!(scene.objects[1].position.y, 2.5);
    }
}
