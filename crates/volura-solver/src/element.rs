//! Per-element rest-state precomputation.
//!
//! Runs exactly once after mesh load (or after a material change); the
//! simulation loop never touches it. For each tetrahedron it inverts
//! the rest shape matrix, computes the volume, distributes mass onto
//! the four vertices, and scatters the constant elastic hessian onto
//! vertex diagonals and edge off-diagonals — the implicit sparse
//! stiffness operator the global step solves against.

use volura_math::{DMat3, DVec3};
use volura_mesh::topology::TET_EDGES;
use volura_mesh::{TetMesh, Topology};
use volura_types::constants::DEGENERATE_VOLUME_EPSILON;
use volura_types::{Real, TetId, VoluraError, VoluraResult};

use crate::material::TetMaterial;

/// Precomputed rest-state data for a single tetrahedron.
#[derive(Debug, Clone, Copy)]
pub struct RestTet {
    /// The tetrahedron's four vertex indices.
    pub verts: [u32; 4],
    /// Inverse of the rest shape matrix `(v0-v3, v1-v3, v2-v3)`.
    pub rest_shape_inv: DMat3,
    /// Rest volume, `|det(shape)| / 6`.
    pub volume: Real,
    /// Stiffness scalar for this element.
    pub stiffness: Real,
    /// Clamp range for the deformation gradient's singular values.
    pub strain_limits: [Real; 2],
}

/// All per-element rest-state data plus the accumulated mass and
/// hessian arrays.
pub struct ElementData {
    /// Per-tetrahedron data.
    pub tets: Vec<RestTet>,
    /// Per-vertex mass, `Σ density·volume/4` over incident tets.
    pub vertex_mass: Vec<Real>,
    /// Per-vertex diagonal of the elastic hessian.
    pub hessian_diag: Vec<Real>,
    /// Per-edge off-diagonal coupling of the elastic hessian, indexed
    /// like `Topology::edges`.
    pub edge_hessian: Vec<Real>,
}

/// The shape matrix of a tetrahedron: edge vectors relative to the
/// fourth vertex, as columns.
#[inline]
pub fn shape_matrix(p0: DVec3, p1: DVec3, p2: DVec3, p3: DVec3) -> DMat3 {
    DMat3::from_cols(p0 - p3, p1 - p3, p2 - p3)
}

impl ElementData {
    /// Precomputes rest-state data for every tetrahedron.
    ///
    /// `materials` must have one entry per tetrahedron. Fails with
    /// `DegenerateElement` on a collapsed tetrahedron and commits no
    /// partial state in that case.
    pub fn precompute(
        mesh: &TetMesh,
        topology: &Topology,
        materials: &[TetMaterial],
    ) -> VoluraResult<Self> {
        if materials.len() != mesh.tet_count() {
            return Err(VoluraError::InvalidConfig(format!(
                "Material array length ({}) != tetrahedron count ({})",
                materials.len(),
                mesh.tet_count()
            )));
        }
        for material in materials {
            material.validate()?;
        }

        let n = mesh.vertex_count();
        let mut tets = Vec::with_capacity(mesh.tet_count());
        let mut vertex_mass = vec![0.0; n];
        let mut hessian_diag = vec![0.0; n];
        let mut edge_hessian = vec![0.0; topology.edge_count()];

        for (t, (tet, material)) in mesh.tets.iter().zip(materials).enumerate() {
            let p: [DVec3; 4] = [
                mesh.position(tet[0] as usize),
                mesh.position(tet[1] as usize),
                mesh.position(tet[2] as usize),
                mesh.position(tet[3] as usize),
            ];
            let shape = shape_matrix(p[0], p[1], p[2], p[3]);
            let det = shape.determinant();
            if det.abs() <= DEGENERATE_VOLUME_EPSILON {
                return Err(VoluraError::DegenerateElement {
                    tet: TetId(t as u32),
                    determinant: det,
                });
            }

            let rest_shape_inv = shape.inverse();
            let volume = det.abs() / 6.0;

            for &v in tet {
                vertex_mass[v as usize] += material.mass_density * volume / 4.0;
            }

            // Reduced hessian H = k·V·Dm⁻¹·Dm⁻ᵀ, lifted onto the
            // 4-vertex stencil through the shape-difference trick.
            let h = material.stiffness * volume * (rest_shape_inv * rest_shape_inv.transpose());
            let mut hess = [[0.0_f64; 4]; 4];
            for i in 0..3 {
                for j in 0..3 {
                    let hij = h.col(j)[i];
                    hess[i][j] += hij;
                    hess[i][3] -= hij;
                    hess[3][j] -= hij;
                    hess[3][3] += hij;
                }
            }

            for k in 0..4 {
                hessian_diag[tet[k] as usize] += hess[k][k];
            }
            for (slot, &(a, b)) in TET_EDGES.iter().enumerate() {
                let edge = topology.tet_edges[t][slot] as usize;
                edge_hessian[edge] += hess[a][b];
            }

            tets.push(RestTet {
                verts: *tet,
                rest_shape_inv,
                volume,
                stiffness: material.stiffness,
                strain_limits: material.strain_limits,
            });
        }

        Ok(Self {
            tets,
            vertex_mass,
            hessian_diag,
            edge_hessian,
        })
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.tets.len()
    }

    /// Returns true if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.tets.is_empty()
    }

    /// Total rest volume over all elements.
    pub fn total_volume(&self) -> Real {
        self.tets.iter().map(|t| t.volume).sum()
    }
}
