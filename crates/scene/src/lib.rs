#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! Host-side scene state for the sphere-tracing renderer.
//!
//! This crate owns everything the frame driver mutates between frames: the
//! ordered object and light lists, the camera pose, and the small per-object
//! update behaviors. The renderer reads a [`Scene`] once per frame and
//! flattens it into device-transferable records; nothing in here is aware of
//! GPUs, buffers, or pixels.
//!
//! ## Key Components
//!
//! -   **Orientation:** [`Rotation`] wraps a unit quaternion and exposes the
//!     forward/up/right basis the camera and directional lights are built on.
//! -   **Primitives:** [`SceneObject`] is a tagged implicit shape
//!     ([`ObjectKind`]) with a position, rotation, per-kind scale, surface
//!     color and smoothness.
//! -   **Lights:** [`Light`] covers point and directional sources with a
//!     per-light soft-shadow sharpness.
//! -   **Behaviors:** [`Behavior`] attaches a small update policy (currently
//!     vertical bouncing) to an object, applied by [`Scene::update`].

pub mod behavior;
pub mod bounds;
pub mod camera;
pub mod light;
pub mod object;
pub mod rotation;
pub mod scene;

pub use behavior::Behavior;
pub use bounds::Aabb;
pub use camera::Camera;
pub use light::{Light, LightKind};
pub use object::{ObjectKind, SceneObject};
pub use rotation::{rotate_point, Rotation};
pub use scene::Scene;
