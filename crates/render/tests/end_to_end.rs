//! Full-frame scenarios on the CPU backend.

#![cfg(feature = "cpu")]

use glam::Vec3;
use render::{CpuBackend, FrameStatus, Renderer, SkipReason};
use scene::{Camera, Light, ObjectKind, Rotation, Scene, SceneObject};

/// Zero radiance after tone mapping and packing.
const BACKGROUND: u32 = 0xff00_0000;

fn sphere_over_plane() -> Scene {
    let mut scene = Scene::new();
    scene.objects.push(SceneObject::new(
        Vec3::new(0.0, 1.0, 0.0),
        Rotation::IDENTITY,
        Vec3::ONE,
        ObjectKind::Sphere,
        Vec3::ONE,
    ));
    scene.objects.push(SceneObject::new(
        Vec3::ZERO,
        Rotation::IDENTITY,
        Vec3::new(10.0, 0.0, 10.0),
        ObjectKind::Plane,
        Vec3::ONE,
    ));
    scene
        .lights
        .push(Light::point(Vec3::new(2.0, 8.0, 8.0), Vec3::ONE, 1.0));
    scene.camera = Camera::new(
        Vec3::new(0.0, 6.0, 10.0),
        Rotation::from_euler_degrees(Vec3::new(-30.0, 0.0, 0.0)),
        60.0,
    );
    scene
}

fn cpu_renderer() -> Renderer {
    Renderer::new(Box::new(CpuBackend::new()))
}

#[test]
fn sphere_over_plane_scenario() {
    let mut renderer = cpu_renderer();
    renderer.set_resolution(64, 64).unwrap();
    let status = renderer.render(&sphere_over_plane()).unwrap();
    assert_eq!(status, FrameStatus::Rendered);

    let pixels = renderer.pixels();
    assert_eq!(pixels.len(), 64 * 64);

    // The pitched center ray strikes the sphere.
    assert_ne!(pixels[32 * 64 + 32], BACKGROUND);

    // All four corner rays look past the patch's finite footprint.
    for corner in [pixels[0], pixels[63], pixels[63 * 64], pixels[64 * 64 - 1]] {
        assert_eq!(corner, BACKGROUND);
    }
}

#[test]
fn unsized_output_skips_the_frame() {
    let mut renderer = cpu_renderer();
    let status = renderer.render(&sphere_over_plane()).unwrap();
    assert_eq!(
        status,
        FrameStatus::Skipped(SkipReason::ZeroResolution)
    );
    assert!(renderer.pixels().is_empty());
}

#[test]
fn empty_object_list_retains_the_previous_frame() {
    let mut renderer = cpu_renderer();
    renderer.set_resolution(32, 32).unwrap();
    let mut scene = sphere_over_plane();
    assert_eq!(renderer.render(&scene).unwrap(), FrameStatus::Rendered);
    let previous = renderer.pixels().to_vec();

    scene.objects.clear();
    let status = renderer.render(&scene).unwrap();
    assert_eq!(status, FrameStatus::Skipped(SkipReason::EmptyObjects));
    assert_eq!(renderer.pixels(), previous.as_slice());
}

#[test]
fn empty_light_list_skips_the_frame() {
    let mut renderer = cpu_renderer();
    renderer.set_resolution(32, 32).unwrap();
    let mut scene = sphere_over_plane();
    scene.lights.clear();
    let status = renderer.render(&scene).unwrap();
    assert_eq!(status, FrameStatus::Skipped(SkipReason::EmptyLights));
}

#[test]
fn resize_reallocates_only_on_change() {
    let mut renderer = cpu_renderer();
    renderer.set_resolution(16, 16).unwrap();
    assert_eq!(renderer.pixels().len(), 256);
    assert_eq!(renderer.resolution(), (16, 16));

    // Same resolution: the buffer is left alone.
    renderer.set_resolution(16, 16).unwrap();
    assert_eq!(renderer.pixels().len(), 256);

    renderer.set_resolution(32, 8).unwrap();
    assert_eq!(renderer.pixels().len(), 256);
    assert_eq!(renderer.resolution(), (32, 8));

    renderer.set_resolution(64, 64).unwrap();
    assert_eq!(renderer.pixels().len(), 4096);
}

#[test]
fn moving_scene_changes_the_frame() {
    let mut renderer = cpu_renderer();
    renderer.set_resolution(32, 32).unwrap();

    let mut scene = sphere_over_plane();
    assert_eq!(renderer.render(&scene).unwrap(), FrameStatus::Rendered);
    let first = renderer.pixels().to_vec();

    scene.objects[0].position.y += 2.0;
    assert_eq!(renderer.render(&scene).unwrap(), FrameStatus::Rendered);
    assert_ne!(renderer.pixels(), first.as_slice());
}
