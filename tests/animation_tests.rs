// Host-side tests for the per-tick animation step.
// The main crate is wasm-only, so we pull the pure model tree in by path.

#![allow(dead_code)]
#[path = "../src/model/mod.rs"]
mod model;

use model::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const EPS: f32 = 1e-4;

fn make_scene() -> (ReactorScene, StdRng) {
    let mut rng = StdRng::seed_from_u64(11);
    let scene = ReactorScene::new(&mut rng);
    (scene, rng)
}

fn input(listening: bool, speaking: bool) -> FrameInput {
    FrameInput {
        mode: ModeState {
            listening,
            speaking,
        },
        pointer: PointerOffset::default(),
    }
}

fn run(scene: &mut ReactorScene, rng: &mut StdRng, input: &FrameInput, ticks: usize) -> VisualMode {
    let mut mode = VisualMode::Idle;
    for _ in 0..ticks {
        mode = scene.advance(input, rng);
    }
    mode
}

#[test]
fn time_advances_by_fixed_step() {
    let (mut scene, mut rng) = make_scene();
    run(&mut scene, &mut rng, &input(false, false), 100);
    assert!((scene.time - 100.0 * TIME_STEP).abs() < EPS);
}

#[test]
fn parallax_converges_without_overshoot() {
    let (mut scene, mut rng) = make_scene();
    let target = PointerOffset { x: 0.2, y: -0.1 };
    let frame = FrameInput {
        mode: ModeState::default(),
        pointer: target,
    };
    let mut prev = 0.0;
    for _ in 0..90 {
        scene.advance(&frame, &mut rng);
        let y = scene.group.rotation.y;
        assert!(y >= prev && y <= target.x);
        prev = y;
    }
    // 0.95^90 is just under 1%
    assert!((target.x - scene.group.rotation.y).abs() < 0.01 * target.x);
    assert!((target.y - scene.group.rotation.x).abs() < 0.01 * target.y.abs());
}

#[test]
fn ease_toward_applies_factor() {
    assert!((ease_toward(0.0, 1.0, 0.05) - 0.05).abs() < 1e-6);
    assert!((ease_toward(1.0, 1.0, 0.05) - 1.0).abs() < 1e-6);
    assert!((ease_toward(2.0, 0.0, 0.5) - 1.0).abs() < 1e-6);
}

#[test]
fn fixed_spin_increments() {
    let (mut scene, mut rng) = make_scene();
    run(&mut scene, &mut rng, &input(false, false), 50);
    let core = scene.core.transform.rotation;
    assert!((core.y - 50.0 * CORE_SPIN_Y).abs() < EPS);
    assert!((core.z - 50.0 * CORE_SPIN_Z).abs() < EPS);
    let inner = scene.inner_ring.transform.rotation;
    assert!((inner.x - 50.0 * INNER_SPIN_X).abs() < EPS);
    assert!((inner.y - 50.0 * INNER_SPIN_Y).abs() < EPS);
    assert!((scene.outer_ring.transform.rotation.y - 50.0 * OUTER_SPIN_Y).abs() < EPS);
}

#[test]
fn outer_ring_wobbles_around_tilt() {
    let (mut scene, mut rng) = make_scene();
    for _ in 0..300 {
        scene.advance(&input(false, false), &mut rng);
        let expected = OUTER_BASE_TILT + scene.time.sin() * OUTER_WOBBLE_AMPLITUDE;
        assert!((scene.outer_ring.transform.rotation.x - expected).abs() < EPS);
    }
}

#[test]
fn idle_visuals() {
    let (mut scene, mut rng) = make_scene();
    let mode = run(&mut scene, &mut rng, &input(false, false), 5);
    assert_eq!(mode, VisualMode::Idle);
    assert_eq!(scene.core.material.color, COLOR_REACTOR_BLUE);
    assert_eq!(scene.inner_ring.material.color, COLOR_REACTOR_CYAN);
    assert_eq!(scene.core.transform.scale, glam::Vec3::ONE);
}

#[test]
fn listening_visuals() {
    let (mut scene, mut rng) = make_scene();
    let mode = run(&mut scene, &mut rng, &input(true, false), 20);
    assert_eq!(mode, VisualMode::Listening);
    assert_eq!(scene.core.material.color, COLOR_ALERT_RED);
    assert_eq!(scene.inner_ring.material.color, COLOR_ALERT_RED);
    let expected = 1.2 + (scene.time * 10.0).sin() * 0.1;
    assert!((scene.core.transform.scale.x - expected).abs() < EPS);
    let inner_y = 20.0 * (INNER_SPIN_Y + INNER_SPIN_Y_LISTENING_BONUS);
    assert!((scene.inner_ring.transform.rotation.y - inner_y).abs() < EPS);
}

#[test]
fn speaking_visuals() {
    let (mut scene, mut rng) = make_scene();
    let mode = run(&mut scene, &mut rng, &input(false, true), 13);
    assert_eq!(mode, VisualMode::Speaking);
    assert_eq!(scene.core.material.color, COLOR_REACTOR_CYAN);
    assert_eq!(scene.inner_ring.material.color, COLOR_REACTOR_CYAN);
    let expected = 1.0 + (scene.time * 20.0).sin() * 0.2;
    assert!((scene.core.transform.scale.y - expected).abs() < EPS);
    assert!((scene.inner_ring.transform.rotation.y - 13.0 * INNER_SPIN_Y).abs() < EPS);
}

#[test]
fn listening_wins_over_speaking() {
    let (mut scene, mut rng) = make_scene();
    let mode = scene.advance(&input(true, true), &mut rng);
    assert_eq!(mode, VisualMode::Listening);
    assert_eq!(scene.core.material.color, COLOR_ALERT_RED);
}

#[test]
fn returning_to_idle_resets_scale_immediately() {
    let (mut scene, mut rng) = make_scene();
    run(&mut scene, &mut rng, &input(true, false), 7);
    assert!((scene.core.transform.scale.x - 1.0).abs() > 1e-3);
    scene.advance(&input(false, false), &mut rng);
    assert_eq!(scene.core.transform.scale, glam::Vec3::ONE);
    assert_eq!(scene.core.material.color, COLOR_REACTOR_BLUE);
}

#[test]
fn scale_uses_time_after_increment() {
    let (mut scene, mut rng) = make_scene();
    scene.advance(&input(false, true), &mut rng);
    let expected = 1.0 + (TIME_STEP * 20.0).sin() * 0.2;
    assert!((scene.core.transform.scale.x - expected).abs() < 1e-6);
}

#[test]
fn particles_move_every_tick() {
    let (mut scene, mut rng) = make_scene();
    let before = scene.particles.positions().to_vec();
    scene.advance(&input(false, false), &mut rng);
    assert_eq!(scene.particles.len(), before.len());
    assert_ne!(scene.particles.positions(), &before[..]);
}
