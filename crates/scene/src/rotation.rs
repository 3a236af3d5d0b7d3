//! Quaternion orientation wrapper.
//!
//! Both the camera and every primitive carry a [`Rotation`]. The renderer's
//! kernel applies the same scalar-expanded rotation formula as
//! [`rotate_point`], so the conventions here (basis vectors, world-space
//! composition, Euler order) are load-bearing: host and kernel must agree.

use glam::{EulerRot, Quat, Vec3};

/// Unit-quaternion orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    /// The wrapped quaternion. Kept unit-length by construction.
    pub value: Quat,
}

impl Rotation {
    /// The identity orientation (forward is -Z, up is +Y).
    pub const IDENTITY: Self = Self {
        value: Quat::IDENTITY,
    };

    #[must_use]
    pub const fn new(value: Quat) -> Self {
        Self { value }
    }

    /// Builds an orientation from Euler angles in degrees.
    ///
    /// The composition order is yaw (Y), then pitch (X), then roll (Z), so
    /// `euler.x` pitches, `euler.y` yaws and `euler.z` rolls.
    #[must_use]
    pub fn from_euler_degrees(euler: Vec3) -> Self {
        let radians = euler * (std::f32::consts::PI / 180.0);
        Self {
            value: Quat::from_euler(EulerRot::YXZ, radians.y, radians.x, radians.z),
        }
    }

    #[must_use]
    pub fn forward(&self) -> Vec3 {
        rotate_point(Vec3::NEG_Z, self.value)
    }

    #[must_use]
    pub fn up(&self) -> Vec3 {
        rotate_point(Vec3::Y, self.value)
    }

    #[must_use]
    pub fn right(&self) -> Vec3 {
        rotate_point(Vec3::X, self.value)
    }

    /// Composes `delta` on the left, i.e. rotates in world space.
    ///
    /// Quaternion composition is not commutative; the camera and light
    /// direction math depend on this exact convention.
    pub fn rotate(&mut self, delta: Quat) {
        self.value = delta * self.value;
    }

    /// The quaternion as `[x, y, z, w]`, the order the device records use.
    #[must_use]
    pub fn to_array(&self) -> [f32; 4] {
        self.value.to_array()
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Rotates `v` by the unit quaternion `q`.
///
/// The quaternion sandwich expanded into scalar form; no intermediate
/// quaternion products are allocated. The renderer's WGSL kernel carries a
/// line-for-line mirror of this function.
#[must_use]
pub fn rotate_point(v: Vec3, q: Quat) -> Vec3 {
    let x2 = q.x + q.x;
    let y2 = q.y + q.y;
    let z2 = q.z + q.z;

    let wx2 = q.w * x2;
    let wy2 = q.w * y2;
    let wz2 = q.w * z2;
    let xx2 = q.x * x2;
    let xy2 = q.x * y2;
    let xz2 = q.x * z2;
    let yy2 = q.y * y2;
    let yz2 = q.y * z2;
    let zz2 = q.z * z2;

    Vec3::new(
        v.x * (1.0 - yy2 - zz2) + v.y * (xy2 - wz2) + v.z * (xz2 + wy2),
        v.x * (xy2 + wz2) + v.y * (1.0 - xx2 - zz2) + v.z * (yz2 - wx2),
        v.x * (xz2 - wy2) + v.y * (yz2 + wx2) + v.z * (1.0 - xx2 - yy2),
    )
}
