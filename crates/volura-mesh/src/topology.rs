//! Derived mesh topology.
//!
//! The stiffness operator has one scalar per vertex (diagonal) and one
//! per unique mesh edge (off-diagonal coupling), so the edge list *is*
//! the sparsity pattern of the system matrix. It is derived once from
//! the tetrahedron incidence and never changes afterwards.

use std::collections::HashMap;

use crate::mesh::TetMesh;

/// Local vertex-index pairs of a tetrahedron's six edges.
pub const TET_EDGES: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

/// Precomputed topology for a tetrahedral mesh.
///
/// Built once when a mesh is loaded. Provides:
/// - the unique undirected edge list (system-matrix sparsity pattern)
/// - the per-tet map from local edge slot to global edge index
///   (used to scatter element hessians)
/// - vertex → tetrahedron adjacency
#[derive(Debug, Clone)]
pub struct Topology {
    /// Unique edges as `[v_min, v_max]` pairs.
    pub edges: Vec<[u32; 2]>,

    /// For each tetrahedron, the global edge index of each of its six
    /// edges, in [`TET_EDGES`] order.
    pub tet_edges: Vec<[u32; 6]>,

    /// For each vertex, the tetrahedra that contain it.
    pub vertex_tets: Vec<Vec<u32>>,
}

impl Topology {
    /// Build topology from a tetrahedral mesh.
    pub fn build(mesh: &TetMesh) -> Self {
        let vertex_count = mesh.vertex_count();
        let tet_count = mesh.tet_count();

        let mut vertex_tets: Vec<Vec<u32>> = vec![Vec::new(); vertex_count];
        for (t, tet) in mesh.tets.iter().enumerate() {
            for &v in tet {
                vertex_tets[v as usize].push(t as u32);
            }
        }

        // Canonicalize each edge as (min, max) so every tetrahedron
        // sharing it maps to the same slot.
        let mut edge_map: HashMap<(u32, u32), u32> = HashMap::new();
        let mut edges: Vec<[u32; 2]> = Vec::new();
        let mut tet_edges: Vec<[u32; 6]> = Vec::with_capacity(tet_count);

        for tet in &mesh.tets {
            let mut slots = [0_u32; 6];
            for (slot, &(a, b)) in TET_EDGES.iter().enumerate() {
                let (v0, v1) = (tet[a], tet[b]);
                let key = if v0 < v1 { (v0, v1) } else { (v1, v0) };
                let idx = *edge_map.entry(key).or_insert_with(|| {
                    edges.push([key.0, key.1]);
                    (edges.len() - 1) as u32
                });
                slots[slot] = idx;
            }
            tet_edges.push(slots);
        }

        Self {
            edges,
            tet_edges,
            vertex_tets,
        }
    }

    /// Returns the number of unique edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if vertex `v` belongs to no tetrahedron.
    pub fn is_isolated(&self, v: usize) -> bool {
        self.vertex_tets[v].is_empty()
    }
}
