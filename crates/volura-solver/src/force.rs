//! Force evaluation — the Projective Dynamics local step.
//!
//! Computes per-vertex elastic, gravity, and pinned-constraint forces
//! for the current positions. The elastic term is corotational: the
//! deformation gradient is split by a sign-corrected SVD and the
//! element is pulled toward its nearest pure rotation.

use volura_math::svd::svd3_proper;
use volura_math::DVec3;
use volura_types::Real;

use crate::element::{shape_matrix, ElementData};
use crate::pinned::PinnedConstraints;
use crate::state::SimulationState;

/// Strain-limiting statistics from one force evaluation.
#[derive(Debug, Clone, Copy)]
pub struct ForceStats {
    /// Tetrahedra with at least one singular value outside its limits.
    pub clamped_tets: u32,
    /// Largest pre-clamp singular value.
    pub max_stretch: Real,
    /// Smallest pre-clamp singular value.
    pub min_stretch: Real,
}

impl Default for ForceStats {
    fn default() -> Self {
        Self {
            clamped_tets: 0,
            max_stretch: 1.0,
            min_stretch: 1.0,
        }
    }
}

/// Computes forces for the current `state.position`, overwriting
/// `state.force`.
///
/// Per tetrahedron: deformation gradient `F = shape·Dm⁻¹`, proper SVD
/// `F = U Σ Vᵀ` (rotations, not reflections), singular values clamped
/// to the element's strain limits, elastic force
/// `-k·V·(F − U·Vᵀ)·Dm⁻ᵀ` on the first three vertices and the negated
/// sum on the fourth, so a rigidly moved element feels no net force.
/// Then per vertex: gravity `m·g` and, if pinned, the penalty spring
/// `m·k·(target − p)`.
pub fn accumulate_forces(
    state: &mut SimulationState,
    elements: &ElementData,
    pinned: &PinnedConstraints,
    gravity: DVec3,
) -> ForceStats {
    for f in state.force.iter_mut() {
        *f = DVec3::ZERO;
    }

    let mut stats = ForceStats {
        clamped_tets: 0,
        max_stretch: Real::MIN,
        min_stretch: Real::MAX,
    };

    for tet in &elements.tets {
        let [v0, v1, v2, v3] = tet.verts.map(|v| v as usize);
        let shape = shape_matrix(
            state.position[v0],
            state.position[v1],
            state.position[v2],
            state.position[v3],
        );
        let f = shape * tet.rest_shape_inv;

        let mut svd = svd3_proper(&f);

        // Strain limiting: clamp the singular values to the element's
        // range. The rotation target below depends only on U and V, so
        // the clamp bounds the reported strain rather than the force.
        let [lo, hi] = tet.strain_limits;
        stats.max_stretch = stats.max_stretch.max(svd.sigma.x);
        stats.min_stretch = stats.min_stretch.min(svd.sigma.z);
        let clamped = svd.sigma.clamp(DVec3::splat(lo), DVec3::splat(hi));
        if clamped != svd.sigma {
            stats.clamped_tets += 1;
            svd.sigma = clamped;
        }

        let rotation = svd.u * svd.v.transpose();
        let force = -(tet.stiffness * tet.volume)
            * ((f - rotation) * tet.rest_shape_inv.transpose());

        state.force[v0] += force.x_axis;
        state.force[v1] += force.y_axis;
        state.force[v2] += force.z_axis;
        state.force[v3] -= force.x_axis + force.y_axis + force.z_axis;
    }

    if elements.is_empty() {
        stats.max_stretch = 1.0;
        stats.min_stretch = 1.0;
    }

    for i in 0..state.vertex_count() {
        state.force[i] += state.mass[i] * gravity;
        if let Some(target) = pinned.target(i) {
            state.force[i] +=
                state.mass[i] * pinned.stiffness(i) * (target - state.position[i]);
        }
    }

    stats
}
