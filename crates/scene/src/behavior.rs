//! Per-object update policies.
//!
//! Behaviors replace subclass overrides with composition: an object carries a
//! small state blob and a tag, and [`Scene::update`](crate::Scene::update)
//! applies the matching policy each frame.

use crate::object::SceneObject;
use glam::Vec3;

/// Update policy attached to a [`SceneObject`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Behavior {
    /// No per-frame motion.
    Fixed,
    /// Vertical oscillation: the object moves with `velocity` and reflects
    /// its vertical speed when crossing `min_y` or `max_y`.
    Bounce {
        velocity: Vec3,
        min_y: f32,
        max_y: f32,
    },
}

impl SceneObject {
    /// Advances this object's behavior by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        match &mut self.behavior {
            Behavior::Fixed => {}
            Behavior::Bounce {
                velocity,
                min_y,
                max_y,
            } => {
                self.position += *velocity * dt;
                if self.position.y < *min_y {
                    self.position.y = *min_y;
                    velocity.y = -velocity.y;
                } else if self.position.y > *max_y {
                    self.position.y = *max_y;
                    velocity.y = -velocity.y;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ObjectKind;
    use crate::rotation::Rotation;

    fn bouncer() -> SceneObject {
        SceneObject::new(
            Vec3::new(0.0, 2.0, 0.0),
            Rotation::IDENTITY,
            Vec3::ONE,
            ObjectKind::Sphere,
            Vec3::ONE,
        )
        .with_behavior(Behavior::Bounce {
            velocity: Vec3::new(0.0, 4.0, 0.0),
            min_y: 1.0,
            max_y: 4.0,
        })
    }

    #[test]
    fn fixed_objects_do_not_move() {
        let mut object = SceneObject::default();
        object.update(1.0);
        assert_eq!(object.position, Vec3::ZERO);
    }

    #[test]
    fn bounce_reflects_at_upper_bound() {
        let mut object = bouncer();
        object.update(1.0);
        assert_eq!(object.position.y, 4.0);
        match object.behavior {
            Behavior::Bounce { velocity, .. } => assert_eq!(velocity.y, -4.0),
            Behavior::Fixed => panic!("behavior tag must be preserved"),
        }
    }

    #[test]
    fn bounce_reflects_at_lower_bound() {
        let mut object = bouncer().with_behavior(Behavior::Bounce {
            velocity: Vec3::new(0.0, -4.0, 0.0),
            min_y: 1.0,
            max_y: 4.0,
        });
        object.update(1.0);
        assert_eq!(object.position.y, 1.0);
        match object.behavior {
            Behavior::Bounce { velocity, .. } => assert_eq!(velocity.y, 4.0),
            Behavior::Fixed => panic!("behavior tag must be preserved"),
        }
    }
}
