//! Sign-corrected 3×3 singular value decomposition.
//!
//! The corotational force model needs the rotation closest to a
//! deformation gradient `F`. It is extracted from `F = U Σ Vᵀ` after
//! forcing `U, V ∈ SO(3)`: a reflection in either factor is folded into
//! the sign of the smallest singular value, so the rotation `U·Vᵀ` is
//! proper even for inverted elements.
//!
//! The decomposition runs a cyclic Jacobi eigensolve on `FᵀF` and
//! reconstructs the left factor column by column, completing it with
//! cross products when `F` is rank deficient.

use glam::{DMat3, DVec3};

/// A 3×3 singular value decomposition `F = U Σ Vᵀ`.
///
/// `sigma` holds the diagonal of `Σ`, sorted in decreasing magnitude.
/// After [`svd3_proper`], the third entry may be negative (inverted
/// element) while `U` and `V` are guaranteed proper rotations.
#[derive(Debug, Clone, Copy)]
pub struct Svd3 {
    /// Left orthonormal factor.
    pub u: DMat3,
    /// Singular values (diagonal of `Σ`).
    pub sigma: DVec3,
    /// Right orthonormal factor.
    pub v: DMat3,
}

const JACOBI_SWEEPS: usize = 24;
const RANK_CUTOFF: f64 = 1.0e-12;

/// Computes the SVD of `f` with non-negative singular values.
///
/// `U` and `V` have orthonormal columns; `det(U)` or `det(V)` may be
/// negative. Use [`svd3_proper`] when proper rotations are required.
pub fn svd3(f: &DMat3) -> Svd3 {
    let gram = f.transpose() * *f;
    let a = [
        [gram.x_axis.x, gram.y_axis.x, gram.z_axis.x],
        [gram.x_axis.y, gram.y_axis.y, gram.z_axis.y],
        [gram.x_axis.z, gram.y_axis.z, gram.z_axis.z],
    ];
    let (eig, vecs) = jacobi_eigen(a);

    // Sort eigenpairs by decreasing eigenvalue.
    let mut order = [0_usize, 1, 2];
    order.sort_by(|&i, &j| eig[j].total_cmp(&eig[i]));

    let v_cols = [
        DVec3::new(vecs[0][order[0]], vecs[1][order[0]], vecs[2][order[0]]),
        DVec3::new(vecs[0][order[1]], vecs[1][order[1]], vecs[2][order[1]]),
        DVec3::new(vecs[0][order[2]], vecs[1][order[2]], vecs[2][order[2]]),
    ];
    let sigma = DVec3::new(
        eig[order[0]].max(0.0).sqrt(),
        eig[order[1]].max(0.0).sqrt(),
        eig[order[2]].max(0.0).sqrt(),
    );
    let v = DMat3::from_cols(v_cols[0], v_cols[1], v_cols[2]);

    if sigma.x <= f64::MIN_POSITIVE {
        // F ≈ 0: any orthonormal pair works.
        return Svd3 {
            u: DMat3::IDENTITY,
            sigma: DVec3::ZERO,
            v,
        };
    }

    // u_i = F v_i / σ_i while σ_i is meaningful; complete the basis
    // with cross products otherwise.
    let cutoff = sigma.x * RANK_CUTOFF;

    let u0 = (*f * v_cols[0] / sigma.x).normalize();
    let u1 = if sigma.y > cutoff {
        let raw = *f * v_cols[1] / sigma.y;
        (raw - raw.dot(u0) * u0).normalize()
    } else {
        orthonormal_to(u0)
    };
    let u2 = if sigma.z > cutoff {
        let raw = *f * v_cols[2] / sigma.z;
        (raw - raw.dot(u0) * u0 - raw.dot(u1) * u1).normalize()
    } else {
        u0.cross(u1)
    };

    Svd3 {
        u: DMat3::from_cols(u0, u1, u2),
        sigma,
        v,
    }
}

/// Computes the SVD of `f` with `U, V ∈ SO(3)`.
///
/// If `det(U) < 0`, U's third column and `Σ`'s last entry are negated;
/// the same for `V`. The product `U Σ Vᵀ` is unchanged, and only the
/// smallest singular value can come out negative.
pub fn svd3_proper(f: &DMat3) -> Svd3 {
    let mut s = svd3(f);
    if s.u.determinant() < 0.0 {
        s.u.z_axis = -s.u.z_axis;
        s.sigma.z = -s.sigma.z;
    }
    if s.v.determinant() < 0.0 {
        s.v.z_axis = -s.v.z_axis;
        s.sigma.z = -s.sigma.z;
    }
    s
}

/// Extracts the proper rotation factor of the polar decomposition of `f`.
pub fn polar_rotation(f: &DMat3) -> DMat3 {
    let s = svd3_proper(f);
    s.u * s.v.transpose()
}

/// Eigendecomposition of a symmetric 3×3 matrix by cyclic Jacobi.
///
/// Returns `(eigenvalues, eigenvectors)` with eigenvectors as the
/// columns of the returned array (`vecs[row][col]`).
fn jacobi_eigen(mut a: [[f64; 3]; 3]) -> ([f64; 3], [[f64; 3]; 3]) {
    const PAIRS: [(usize, usize); 3] = [(0, 1), (0, 2), (1, 2)];

    let mut v = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

    for _ in 0..JACOBI_SWEEPS {
        let off = a[0][1] * a[0][1] + a[0][2] * a[0][2] + a[1][2] * a[1][2];
        let diag = a[0][0] * a[0][0] + a[1][1] * a[1][1] + a[2][2] * a[2][2];
        if off == 0.0 || off <= f64::EPSILON * f64::EPSILON * diag {
            break;
        }
        for &(p, q) in &PAIRS {
            let apq = a[p][q];
            if apq == 0.0 {
                continue;
            }
            let theta = (a[q][q] - a[p][p]) / (2.0 * apq);
            let t = theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt());
            let c = 1.0 / (t * t + 1.0).sqrt();
            let s = t * c;

            // A ← Gᵀ A G for the Givens rotation G in the (p, q) plane.
            for k in 0..3 {
                let apk = a[p][k];
                let aqk = a[q][k];
                a[p][k] = c * apk - s * aqk;
                a[q][k] = s * apk + c * aqk;
            }
            for k in 0..3 {
                let akp = a[k][p];
                let akq = a[k][q];
                a[k][p] = c * akp - s * akq;
                a[k][q] = s * akp + c * akq;
            }
            // V ← V G
            for k in 0..3 {
                let vkp = v[k][p];
                let vkq = v[k][q];
                v[k][p] = c * vkp - s * vkq;
                v[k][q] = s * vkp + c * vkq;
            }
        }
    }

    ([a[0][0], a[1][1], a[2][2]], v)
}

/// Returns a unit vector orthogonal to `u`.
fn orthonormal_to(u: DVec3) -> DVec3 {
    let axis = if u.x.abs() < 0.5 { DVec3::X } else { DVec3::Y };
    u.cross(axis).normalize()
}
