//! Core tetrahedral mesh type.
//!
//! Vertices and tetrahedra are index-addressed arrays; the solver never
//! follows pointers. Topology is immutable once the solver is
//! initialized — there is no remeshing.

use serde::{Deserialize, Serialize};
use volura_math::DVec3;
use volura_types::{VoluraError, VoluraResult};

/// A tetrahedral mesh: vertex positions plus tetrahedron incidence.
///
/// Only the rest-state geometry lives here. Dynamic per-vertex data
/// (current position, velocity, forces) belongs to the solver's
/// simulation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TetMesh {
    /// Vertex positions in the undeformed configuration.
    pub positions: Vec<DVec3>,
    /// Tetrahedron-vertex incidence — four vertex indices per cell.
    pub tets: Vec<[u32; 4]>,
}

impl TetMesh {
    /// Builds a mesh from raw parts and validates it.
    pub fn from_parts(positions: Vec<DVec3>, tets: Vec<[u32; 4]>) -> VoluraResult<Self> {
        let mesh = Self { positions, tets };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of tetrahedra.
    #[inline]
    pub fn tet_count(&self) -> usize {
        self.tets.len()
    }

    /// Returns the position of vertex `i`.
    #[inline]
    pub fn position(&self, i: usize) -> DVec3 {
        self.positions[i]
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - Every position is finite
    /// - Tetrahedron indices are within bounds
    /// - No tetrahedron repeats a vertex index
    pub fn validate(&self) -> VoluraResult<()> {
        let n = self.positions.len();

        for (i, p) in self.positions.iter().enumerate() {
            if !p.is_finite() {
                return Err(VoluraError::InvalidMesh(format!(
                    "Vertex {i} has non-finite position {p:?}"
                )));
            }
        }

        for (t, tet) in self.tets.iter().enumerate() {
            for &v in tet {
                if v as usize >= n {
                    return Err(VoluraError::InvalidMesh(format!(
                        "Tetrahedron {t} references vertex {v} (vertex count: {n})"
                    )));
                }
            }
            for a in 0..4 {
                for b in (a + 1)..4 {
                    if tet[a] == tet[b] {
                        return Err(VoluraError::InvalidMesh(format!(
                            "Tetrahedron {t} has repeated vertex indices: {tet:?}"
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}
