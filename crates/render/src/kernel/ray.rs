//! Pinhole camera ray generation.

use super::safe_normalize;
use crate::records::CameraRecord;
use glam::{Quat, Vec3};
use scene::rotate_point;

/// World-space ray for pixel `(x, y)`.
///
/// Pixel coordinates are rescaled to `[-1, 1]`, scaled by the tangent of the
/// half field of view (horizontally also by the aspect ratio), then the
/// camera-space direction `(u, -v, -1)` is rotated into the world. The
/// returned origin is the camera position.
#[must_use]
pub fn pixel_ray(x: u32, y: u32, camera: &CameraRecord, width: u32, height: u32) -> (Vec3, Vec3) {
    let mut u = (x as f32 / width as f32) * 2.0 - 1.0;
    let mut v = (y as f32 / height as f32) * 2.0 - 1.0;

    let tan_half_fov = (camera.fov.to_radians() / 2.0).tan();
    let aspect_ratio = width as f32 / height as f32;
    u *= tan_half_fov * aspect_ratio;
    v *= tan_half_fov;

    let dir = rotate_point(Vec3::new(u, -v, -1.0), Quat::from_array(camera.rotation));
    (Vec3::from(camera.position), safe_normalize(dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene::{Camera, Rotation};

    fn record(camera: &Camera) -> CameraRecord {
        crate::records::CameraRecord::from(camera)
    }

    #[test]
    fn center_pixel_looks_forward() {
        let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), Rotation::IDENTITY, 60.0);
        let (origin, dir) = pixel_ray(32, 32, &record(&camera), 64, 64);
        assert_eq!(origin, Vec3::new(1.0, 2.0, 3.0));
        assert!((dir - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn top_left_pixel_points_up_and_left() {
        let camera = Camera::new(Vec3::ZERO, Rotation::IDENTITY, 90.0);
        let (_, dir) = pixel_ray(0, 0, &record(&camera), 100, 100);
        // v = -1 flips to +y in camera space; u = -1 stays -x.
        assert!(dir.x < 0.0);
        assert!(dir.y > 0.0);
        assert!(dir.z < 0.0);
        assert!((dir.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn directions_follow_camera_rotation() {
        let yawed = Camera::new(
            Vec3::ZERO,
            Rotation::from_euler_degrees(Vec3::new(0.0, 90.0, 0.0)),
            60.0,
        );
        let (_, dir) = pixel_ray(32, 32, &record(&yawed), 64, 64);
        assert!((dir - Vec3::NEG_X).length() < 1e-5);
    }
}
