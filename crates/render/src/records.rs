//! Device-transferable record types.
//!
//! This module contains the flat structures the per-pixel kernel reads. Field
//! order is load-bearing: the Rust layout and the WGSL storage-buffer layout
//! in `raymarch.wgsl` must agree byte for byte, so every type is `#[repr(C)]`
//! Pod with explicit `_pad` fields filling WGSL's `vec3` alignment holes.
//!
//! Records are a marshalling concern only. The richer host-side types live in
//! the `scene` crate; the `From` impls here are the single place where a
//! scene entity is flattened for the device.

use bytemuck::{Pod, Zeroable};
use scene::{Camera, Light, LightKind, ObjectKind, SceneObject};

/// Object kind tags shared with the kernel.
pub const KIND_SPHERE: i32 = 0;
pub const KIND_BOX: i32 = 1;
pub const KIND_PLANE: i32 = 2;

/// Light kind tags shared with the kernel.
pub const LIGHT_POINT: i32 = 0;
pub const LIGHT_DIRECTIONAL: i32 = 1;

/// Camera pose as the kernel consumes it.
///
/// `target` and `up` are derived from the rotation on the host; the kernel
/// itself only reads `position`, `rotation` and `fov`.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct CameraRecord {
    pub position: [f32; 3],
    pub _pad0: f32,
    pub target: [f32; 3],
    pub _pad1: f32,
    pub up: [f32; 3],
    pub _pad2: f32,
    /// Unit quaternion, xyzw.
    pub rotation: [f32; 4],
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub _pad3: [f32; 3],
}

impl From<&Camera> for CameraRecord {
    fn from(camera: &Camera) -> Self {
        Self {
            position: camera.position.to_array(),
            _pad0: 0.0,
            target: camera.target().to_array(),
            _pad1: 0.0,
            up: camera.up().to_array(),
            _pad2: 0.0,
            rotation: camera.rotation.to_array(),
            fov: camera.fov,
            _pad3: [0.0; 3],
        }
    }
}

/// One primitive as the kernel consumes it.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct ObjectRecord {
    pub position: [f32; 3],
    pub _pad0: f32,
    /// Unit quaternion, xyzw.
    pub rotation: [f32; 4],
    pub scale: [f32; 3],
    /// One of [`KIND_SPHERE`], [`KIND_BOX`], [`KIND_PLANE`].
    pub kind: i32,
    pub color: [f32; 3],
    pub smoothness: f32,
    /// World-space bounds, exported metadata only.
    pub bb_lower: [f32; 3],
    pub _pad1: f32,
    pub bb_upper: [f32; 3],
    pub _pad2: f32,
}

impl From<&SceneObject> for ObjectRecord {
    fn from(object: &SceneObject) -> Self {
        let bounds = object.bounding_box();
        Self {
            position: object.position.to_array(),
            _pad0: 0.0,
            rotation: object.rotation.to_array(),
            scale: object.scale.to_array(),
            kind: match object.kind {
                ObjectKind::Sphere => KIND_SPHERE,
                ObjectKind::Box => KIND_BOX,
                ObjectKind::Plane => KIND_PLANE,
            },
            color: object.color.to_array(),
            smoothness: object.smoothness,
            bb_lower: bounds.lower.to_array(),
            _pad1: 0.0,
            bb_upper: bounds.upper.to_array(),
            _pad2: 0.0,
        }
    }
}

/// One light source as the kernel consumes it.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct LightRecord {
    pub position: [f32; 3],
    pub _pad0: f32,
    pub color: [f32; 3],
    pub _pad1: f32,
    /// Unit quaternion, xyzw. Directional lights emit along the rotated +Z.
    pub rotation: [f32; 4],
    pub intensity: f32,
    pub shadow_sharpness: f32,
    /// One of [`LIGHT_POINT`], [`LIGHT_DIRECTIONAL`].
    pub kind: i32,
    pub _pad2: f32,
}

impl From<&Light> for LightRecord {
    fn from(light: &Light) -> Self {
        Self {
            position: light.position.to_array(),
            _pad0: 0.0,
            color: light.color.to_array(),
            _pad1: 0.0,
            rotation: light.rotation.to_array(),
            intensity: light.intensity,
            shadow_sharpness: light.shadow_sharpness,
            kind: match light.kind {
                LightKind::Point => LIGHT_POINT,
                LightKind::Directional => LIGHT_DIRECTIONAL,
            },
            _pad2: 0.0,
        }
    }
}

/// Per-dispatch uniform: the camera plus the frame dimensions and counts.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct GlobalsRecord {
    pub camera: CameraRecord,
    pub width: u32,
    pub height: u32,
    pub object_count: u32,
    pub light_count: u32,
}

impl GlobalsRecord {
    #[must_use]
    pub fn new(
        camera: CameraRecord,
        width: u32,
        height: u32,
        object_count: u32,
        light_count: u32,
    ) -> Self {
        Self {
            camera,
            width,
            height,
            object_count,
            light_count,
        }
    }
}

// Sizes the WGSL side assumes; a mismatch here corrupts every field after it.
const _: () = assert!(std::mem::size_of::<CameraRecord>() == 80);
const _: () = assert!(std::mem::size_of::<ObjectRecord>() == 96);
const _: () = assert!(std::mem::size_of::<LightRecord>() == 64);
const _: () = assert!(std::mem::size_of::<GlobalsRecord>() == 96);
