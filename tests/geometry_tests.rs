// Host-side tests for procedural mesh generation.
// The main crate is wasm-only, so we pull the pure model tree in by path.

#![allow(dead_code)]
#[path = "../src/model/mod.rs"]
mod model;

use model::*;

fn indices_in_range(mesh: &Mesh) -> bool {
    let n = mesh.positions.len() as u32;
    mesh.indices.iter().all(|&i| i < n)
}

#[test]
fn base_icosahedron_counts() {
    let mesh = icosahedron(1.0, 0);
    assert_eq!(mesh.positions.len(), 12);
    assert_eq!(mesh.triangle_count(), 20);
    assert_eq!(mesh.edges().len(), 30);
}

#[test]
fn core_sphere_counts() {
    let mesh = icosahedron(CORE_RADIUS, CORE_DETAIL);
    assert_eq!(mesh.positions.len(), 92);
    assert_eq!(mesh.triangle_count(), 180);
    assert_eq!(mesh.edges().len(), 270);
    assert!(indices_in_range(&mesh));
}

#[test]
fn core_sphere_vertices_lie_on_radius() {
    let mesh = icosahedron(CORE_RADIUS, CORE_DETAIL);
    for p in &mesh.positions {
        assert!((p.length() - CORE_RADIUS).abs() < 1e-5);
    }
}

#[test]
fn edges_are_unique_and_ordered() {
    let mesh = icosahedron(1.0, 1);
    let edges = mesh.edges();
    let mut sorted = edges.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), edges.len());
    assert!(edges.iter().all(|e| e[0] < e[1]));
    assert_eq!(mesh.line_list().len(), edges.len() * 2);
}

#[test]
fn torus_knot_counts() {
    let mesh = torus_knot(
        INNER_KNOT_RADIUS,
        INNER_KNOT_TUBE,
        INNER_KNOT_TUBULAR_SEGMENTS,
        INNER_KNOT_RADIAL_SEGMENTS,
        INNER_KNOT_P,
        INNER_KNOT_Q,
    );
    assert_eq!(mesh.positions.len(), 101 * 17);
    assert_eq!(mesh.triangle_count(), 100 * 16 * 2);
    assert!(indices_in_range(&mesh));
    assert!(mesh.positions.iter().all(|p| p.is_finite()));
    // the curve peaks at 1.5x its radius, plus the tube
    assert!(mesh.positions.iter().all(|p| p.length() <= INNER_KNOT_RADIUS * 1.5 + INNER_KNOT_TUBE + 1e-4));
}

#[test]
fn torus_lies_in_xy_plane() {
    let mesh = torus(
        OUTER_TORUS_RADIUS,
        OUTER_TORUS_TUBE,
        OUTER_TORUS_RADIAL_SEGMENTS,
        OUTER_TORUS_TUBULAR_SEGMENTS,
    );
    assert_eq!(mesh.positions.len(), 17 * 101);
    assert_eq!(mesh.triangle_count(), 16 * 100 * 2);
    assert!(indices_in_range(&mesh));
    for p in &mesh.positions {
        let ring = (p.x * p.x + p.y * p.y).sqrt();
        assert!((ring - OUTER_TORUS_RADIUS).abs() <= OUTER_TORUS_TUBE + 1e-5);
        assert!(p.z.abs() <= OUTER_TORUS_TUBE + 1e-5);
    }
}

#[test]
fn triangle_list_expands_indices() {
    let mesh = icosahedron(1.0, 0);
    let verts = mesh.triangle_list();
    assert_eq!(verts.len(), 60);
    assert_eq!(verts[0], mesh.positions[mesh.indices[0] as usize].to_array());
}
