//! Renders the demo scene without a window and writes it to `offline.png`.
//!
//! Stands in for the windowed frame driver: builds the bouncing-primitives
//! scene, steps the behaviors for a moment, renders one frame on the default
//! backend and dumps the pixel buffer as a PNG.

use glam::Vec3;
use render::{FrameStatus, Renderer};
use scene::{Behavior, Light, ObjectKind, Rotation, Scene, SceneObject};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 360;

fn demo_scene() -> Scene {
    let mut scene = Scene::new();

    scene.objects.push(
        SceneObject::new(
            Vec3::new(-1.5, 3.0, 0.0),
            Rotation::IDENTITY,
            Vec3::ONE,
            ObjectKind::Sphere,
            Vec3::new(0.9, 0.16, 0.21),
        )
        .with_behavior(Behavior::Bounce {
            velocity: Vec3::new(0.0, 4.0, 0.0),
            min_y: 1.0,
            max_y: 4.0,
        }),
    );
    scene.objects.push(
        SceneObject::new(
            Vec3::new(1.5, 2.0, 0.0),
            Rotation::from_euler_degrees(Vec3::new(0.0, 45.0, 0.0)),
            Vec3::splat(0.75),
            ObjectKind::Box,
            Vec3::new(0.0, 0.47, 0.95),
        )
        .with_behavior(Behavior::Bounce {
            velocity: Vec3::new(0.0, 2.0, 0.0),
            min_y: 1.0,
            max_y: 4.0,
        }),
    );
    scene.objects.push(SceneObject::new(
        Vec3::ZERO,
        Rotation::IDENTITY,
        Vec3::new(10.0, 0.0, 10.0),
        ObjectKind::Plane,
        Vec3::new(0.8, 0.8, 0.8),
    ));

    scene.lights.push(Light::point(
        Vec3::new(4.0, 8.0, 4.0),
        Vec3::ONE,
        1.0,
    ));
    scene.lights.push(
        Light::directional(
            Rotation::from_euler_degrees(Vec3::new(-50.0, 30.0, 0.0)),
            Vec3::new(1.0, 0.95, 0.8),
            0.4,
        )
        .with_shadow_sharpness(16.0),
    );

    scene.camera = scene::Camera::new(
        Vec3::new(0.0, 4.0, 10.0),
        Rotation::from_euler_degrees(Vec3::new(-15.0, 0.0, 0.0)),
        60.0,
    );

    scene
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut scene = demo_scene();
    // Let the bouncers settle somewhere interesting.
    for _ in 0..30 {
        scene.update(1.0 / 60.0);
    }

    let mut renderer = Renderer::new(render::default_backend());
    renderer.set_resolution(WIDTH, HEIGHT)?;
    let status = renderer.render(&scene)?;
    anyhow::ensure!(status == FrameStatus::Rendered, "frame was skipped");

    // Packed A<<24|B<<16|G<<8|R is RGBA byte order on little-endian.
    let bytes: &[u8] = bytemuck::cast_slice(renderer.pixels());
    let image = image::RgbaImage::from_raw(WIDTH, HEIGHT, bytes.to_vec())
        .ok_or_else(|| anyhow::anyhow!("pixel buffer size mismatch"))?;
    image.save("offline.png")?;
    tracing::info!("wrote offline.png");
    Ok(())
}
