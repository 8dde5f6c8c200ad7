//! Integration tests for volura-mesh.

use volura_math::DVec3;
use volura_mesh::generators::{single_tet, tet_box};
use volura_mesh::mesh::TetMesh;
use volura_mesh::topology::{TET_EDGES, Topology};

// ─── TetMesh Tests ────────────────────────────────────────────

#[test]
fn single_tet_counts() {
    let mesh = single_tet();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.tet_count(), 1);
    mesh.validate().unwrap();
}

#[test]
fn from_parts_validates() {
    let positions = vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z];
    let mesh = TetMesh::from_parts(positions, vec![[0, 1, 2, 3]]).unwrap();
    assert_eq!(mesh.tet_count(), 1);
}

#[test]
fn out_of_range_index_rejected() {
    let positions = vec![DVec3::ZERO, DVec3::X, DVec3::Y];
    let result = TetMesh::from_parts(positions, vec![[0, 1, 2, 3]]);
    assert!(result.is_err());
}

#[test]
fn repeated_index_rejected() {
    let positions = vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z];
    let result = TetMesh::from_parts(positions, vec![[0, 1, 2, 2]]);
    assert!(result.is_err());
}

#[test]
fn non_finite_position_rejected() {
    let positions = vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::new(f64::NAN, 0.0, 0.0)];
    let result = TetMesh::from_parts(positions, vec![[0, 1, 2, 3]]);
    assert!(result.is_err());
}

// ─── Topology Tests ───────────────────────────────────────────

#[test]
fn single_tet_has_six_edges() {
    let mesh = single_tet();
    let topo = Topology::build(&mesh);
    assert_eq!(topo.edge_count(), 6);
    assert_eq!(topo.tet_edges.len(), 1);

    // Each local edge slot maps to a distinct global edge.
    let mut slots = topo.tet_edges[0].to_vec();
    slots.sort_unstable();
    slots.dedup();
    assert_eq!(slots.len(), 6);
}

#[test]
fn edges_are_canonicalized() {
    let mesh = single_tet();
    let topo = Topology::build(&mesh);
    for edge in &topo.edges {
        assert!(edge[0] < edge[1], "edge not canonical: {edge:?}");
    }
}

#[test]
fn tet_edge_slots_match_local_pairs() {
    let mesh = single_tet();
    let topo = Topology::build(&mesh);
    let tet = mesh.tets[0];

    for (slot, &(a, b)) in TET_EDGES.iter().enumerate() {
        let edge = topo.edges[topo.tet_edges[0][slot] as usize];
        let (lo, hi) = if tet[a] < tet[b] {
            (tet[a], tet[b])
        } else {
            (tet[b], tet[a])
        };
        assert_eq!(edge, [lo, hi]);
    }
}

#[test]
fn shared_edges_deduplicated() {
    // Two tets glued along a face share three edges:
    // 6 + 6 - 3 = 9 unique edges.
    let positions = vec![
        DVec3::ZERO,
        DVec3::X,
        DVec3::Y,
        DVec3::Z,
        DVec3::new(1.0, 1.0, 1.0),
    ];
    let mesh = TetMesh::from_parts(positions, vec![[0, 1, 2, 3], [1, 2, 3, 4]]).unwrap();
    let topo = Topology::build(&mesh);
    assert_eq!(topo.edge_count(), 9);
}

#[test]
fn vertex_tets_adjacency() {
    let mesh = tet_box(1, 1, 1, 1.0);
    let topo = Topology::build(&mesh);
    assert_eq!(topo.vertex_tets.len(), 8);
    // Every cube corner belongs to at least one tetrahedron.
    for v in 0..8 {
        assert!(!topo.is_isolated(v));
    }
    // Total incidence: 5 tets × 4 vertices.
    let total: usize = topo.vertex_tets.iter().map(Vec::len).sum();
    assert_eq!(total, 20);
}

// ─── Generator Tests ──────────────────────────────────────────

#[test]
fn tet_box_counts() {
    let mesh = tet_box(1, 1, 1, 1.0);
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.tet_count(), 5);
    mesh.validate().unwrap();

    // 12 cube edges + 6 face diagonals.
    let topo = Topology::build(&mesh);
    assert_eq!(topo.edge_count(), 18);
}

#[test]
fn tet_box_fills_the_cell() {
    // The five tets of one unit cell tile it exactly: volumes sum to 1.
    let mesh = tet_box(1, 1, 1, 1.0);
    let total: f64 = mesh
        .tets
        .iter()
        .map(|tet| {
            let p: Vec<DVec3> = tet.iter().map(|&v| mesh.position(v as usize)).collect();
            let m = volura_math::DMat3::from_cols(p[0] - p[3], p[1] - p[3], p[2] - p[3]);
            m.determinant().abs() / 6.0
        })
        .sum();
    assert!((total - 1.0).abs() < 1e-12, "total volume {total}");
}

#[test]
fn tet_box_multi_cell_is_conforming() {
    // Across 2×1×1 cells the shared face must not introduce duplicate
    // edges; counts stay consistent and validation passes.
    let mesh = tet_box(2, 1, 1, 0.5);
    assert_eq!(mesh.vertex_count(), 12);
    assert_eq!(mesh.tet_count(), 10);
    mesh.validate().unwrap();

    let total: f64 = mesh
        .tets
        .iter()
        .map(|tet| {
            let p: Vec<DVec3> = tet.iter().map(|&v| mesh.position(v as usize)).collect();
            let m = volura_math::DMat3::from_cols(p[0] - p[3], p[1] - p[3], p[2] - p[3]);
            m.determinant().abs() / 6.0
        })
        .sum();
    assert!((total - 0.25).abs() < 1e-12, "total volume {total}");
}
