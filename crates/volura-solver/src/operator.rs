//! The implicit system operator `A = M/dt² + H`.
//!
//! The stiffness hessian `H` is scalar per vertex (diagonal) and per
//! edge (off-diagonal), isotropic across the three coordinate axes, so
//! the mesh graph *is* the sparse matrix: a matrix-free product walks
//! vertices and edges. The same data also assembles an explicit N×N
//! CSR matrix for the direct back end; both representations must agree
//! numerically.

use volura_math::sparse::CsrMatrix;
use volura_math::DVec3;
use volura_types::{Real, VoluraError, VoluraResult};

use crate::element::ElementData;
use crate::pinned::PinnedConstraints;
use volura_mesh::Topology;

/// Matrix-free representation of the global-step system matrix.
pub struct SystemOperator {
    /// Per-vertex diagonal: `m/dt² + hessian_diag + k_pin·m`.
    diag: Vec<Real>,
    /// Edge endpoints, mirrored from the topology.
    edges: Vec<[u32; 2]>,
    /// Per-edge off-diagonal coefficient.
    edge_coeff: Vec<Real>,
}

impl SystemOperator {
    /// Builds the operator for a fixed time step.
    ///
    /// Fails with `SingularSystem` if any diagonal entry is
    /// non-positive (a disconnected, massless vertex).
    pub fn build(
        elements: &ElementData,
        topology: &Topology,
        pinned: &PinnedConstraints,
        dt: Real,
    ) -> VoluraResult<Self> {
        let inv_dt2 = 1.0 / (dt * dt);
        let n = elements.vertex_mass.len();

        let mut diag = Vec::with_capacity(n);
        for v in 0..n {
            let mass = elements.vertex_mass[v];
            let entry =
                mass * inv_dt2 + elements.hessian_diag[v] + pinned.diagonal_stiffness(v) * mass;
            if !(entry > 0.0) {
                return Err(VoluraError::SingularSystem(format!(
                    "vertex {v} has non-positive diagonal {entry} \
                     (massless vertex outside every tetrahedron?)"
                )));
            }
            diag.push(entry);
        }

        Ok(Self {
            diag,
            edges: topology.edges.clone(),
            edge_coeff: elements.edge_hessian.clone(),
        })
    }

    /// Number of vertices the operator acts on.
    #[inline]
    pub fn len(&self) -> usize {
        self.diag.len()
    }

    /// Returns true for a zero-vertex operator.
    pub fn is_empty(&self) -> bool {
        self.diag.is_empty()
    }

    /// Matrix-free product `out = A·x` over per-vertex vectors.
    pub fn apply(&self, x: &[DVec3], out: &mut [DVec3]) {
        debug_assert_eq!(x.len(), self.diag.len());
        debug_assert_eq!(out.len(), self.diag.len());

        for ((o, &d), xi) in out.iter_mut().zip(&self.diag).zip(x) {
            *o = d * *xi;
        }
        for (edge, &c) in self.edges.iter().zip(&self.edge_coeff) {
            let (a, b) = (edge[0] as usize, edge[1] as usize);
            out[a] += c * x[b];
            out[b] += c * x[a];
        }
    }

    /// Assembles the explicit per-axis scalar system as an N×N CSR
    /// matrix with the same non-zero pattern: vertices on the diagonal,
    /// mesh edges off it.
    pub fn to_csr(&self) -> CsrMatrix {
        let n = self.diag.len();
        let mut triplets = Vec::with_capacity(n + self.edges.len() * 2);
        for (v, &d) in self.diag.iter().enumerate() {
            triplets.push((v, v, d));
        }
        for (edge, &c) in self.edges.iter().zip(&self.edge_coeff) {
            let (a, b) = (edge[0] as usize, edge[1] as usize);
            triplets.push((a, b, c));
            triplets.push((b, a, c));
        }
        CsrMatrix::from_triplets(n, n, &triplets)
    }
}
