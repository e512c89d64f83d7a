// Host-side tests for scene graph state and camera math.
// The main crate is wasm-only, so we pull the pure model tree in by path.

#![allow(dead_code)]
#[path = "../src/model/mod.rs"]
mod model;

use glam::{Mat4, Vec3};
use model::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::FRAC_PI_2;

#[test]
fn transform_scales_then_rotates() {
    let mut t = Transform::with_rotation(Vec3::new(0.0, FRAC_PI_2, 0.0));
    t.set_uniform_scale(2.0);
    let v = t.matrix().transform_point3(Vec3::X);
    assert!((v - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-5);
}

#[test]
fn transform_default_is_identity() {
    let t = Transform::default();
    assert!(t.matrix().abs_diff_eq(Mat4::IDENTITY, 1e-6));
}

#[test]
fn world_matrix_composes_group_first() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut scene = ReactorScene::new(&mut rng);
    scene.group.rotation.y = 0.3;
    scene.core.transform.rotation.z = -0.2;
    let expected = scene.group.matrix() * scene.core.transform.matrix();
    assert!(scene.world_matrix(&scene.core).abs_diff_eq(expected, 1e-6));
}

#[test]
fn initial_scene_layout() {
    let mut rng = StdRng::seed_from_u64(5);
    let scene = ReactorScene::new(&mut rng);
    assert_eq!(scene.time, 0.0);
    assert_eq!(scene.outer_ring.transform.rotation.x, FRAC_PI_2);
    assert_eq!(scene.particles.len(), PARTICLE_COUNT);
    assert_eq!(scene.core.material.rgba(), [0.0, 168.0 / 255.0, 1.0, CORE_OPACITY]);
    assert_eq!(scene.inner_ring.material.opacity, INNER_RING_OPACITY);
    assert_eq!(scene.outer_ring.material.color, COLOR_REACTOR_BLUE);
    assert_eq!(scene.particle_material.opacity, PARTICLE_OPACITY);
    assert_eq!(scene.light.intensity, LIGHT_INTENSITY);
}

#[test]
fn hex_colors_unpack() {
    assert_eq!(hex_to_rgb(0xff4757), [1.0, 71.0 / 255.0, 87.0 / 255.0]);
    assert_eq!(hex_to_rgb(0x000000), [0.0, 0.0, 0.0]);
}

#[test]
fn camera_tracks_viewport_aspect() {
    let mut cam = Camera::reactor_default(1.0);
    assert_eq!(cam.eye, Vec3::new(0.0, 0.0, 5.0));
    assert!((cam.fovy_radians - 75f32.to_radians()).abs() < 1e-6);
    cam.set_viewport(1920, 1080);
    assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    cam.set_viewport(0, 600);
    assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
}

#[test]
fn camera_looks_down_negative_z() {
    let cam = Camera::reactor_default(1.0);
    let origin = cam.view_matrix().transform_point3(Vec3::ZERO);
    assert!((origin - Vec3::new(0.0, 0.0, -5.0)).length() < 1e-5);
}

#[test]
fn pointer_offset_is_centered() {
    let p = PointerOffset::from_client(960.0, 540.0, 1920.0, 1080.0);
    assert_eq!(p, PointerOffset::default());
    let p = PointerOffset::from_client(1920.0, 0.0, 1920.0, 1080.0);
    assert!((p.x - 0.96).abs() < 1e-6);
    assert!((p.y + 0.54).abs() < 1e-6);
}
