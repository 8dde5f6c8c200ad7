//! Matrix-free conjugate gradient over the system operator.
//!
//! Restarted from `x = 0` on every call; the Projective Dynamics loop
//! solves for a position *delta*, so there is no warm start to carry.
//! Exhausting the iteration budget is reported, not fatal: the partial
//! solution is still useful to an approximate method.

use volura_math::DVec3;
use volura_types::Real;

use crate::operator::SystemOperator;

/// Outcome of one conjugate gradient solve.
#[derive(Debug, Clone, Copy)]
pub struct CgReport {
    /// Iterations actually performed.
    pub iterations: u32,
    /// Relative residual `‖r‖/‖r₀‖` at termination.
    pub residual: Real,
    /// Whether the tolerance was met within the budget.
    pub converged: bool,
}

fn dot(a: &[DVec3], b: &[DVec3]) -> Real {
    a.iter().zip(b).map(|(x, y)| x.dot(*y)).sum()
}

/// Solves `A·x = b` by conjugate gradient, writing the solution into
/// `x` (which is reset to zero first).
///
/// Terminates when `‖r‖² < tolerance·‖r₀‖²` or after `n_iter`
/// iterations, whichever comes first.
pub fn conjugate_gradient(
    op: &SystemOperator,
    b: &[DVec3],
    x: &mut [DVec3],
    n_iter: u32,
    tolerance: Real,
) -> CgReport {
    let n = b.len();
    debug_assert_eq!(op.len(), n);
    debug_assert_eq!(x.len(), n);

    for xi in x.iter_mut() {
        *xi = DVec3::ZERO;
    }

    let mut r = b.to_vec();
    let mut p = r.clone();
    let mut ap = vec![DVec3::ZERO; n];

    let r_norm_init = dot(&r, &r);
    if r_norm_init <= Real::MIN_POSITIVE {
        // Zero right-hand side: x = 0 is exact.
        return CgReport {
            iterations: 0,
            residual: 0.0,
            converged: true,
        };
    }

    let mut r_norm = r_norm_init;
    let mut iterations = 0_u32;
    let mut converged = false;

    for _ in 0..n_iter {
        op.apply(&p, &mut ap);
        let p_ap = dot(&p, &ap);
        if p_ap <= 0.0 {
            // Lost positive definiteness to round-off; stop with what
            // we have.
            break;
        }
        let alpha = r_norm / p_ap;
        for i in 0..n {
            x[i] += alpha * p[i];
            r[i] -= alpha * ap[i];
        }
        iterations += 1;

        let r_norm_new = dot(&r, &r);
        if r_norm_new < tolerance * r_norm_init {
            r_norm = r_norm_new;
            converged = true;
            break;
        }
        let beta = r_norm_new / r_norm;
        r_norm = r_norm_new;
        for i in 0..n {
            p[i] = r[i] + beta * p[i];
        }
    }

    let residual = (r_norm / r_norm_init).sqrt();
    if !converged {
        tracing::warn!(
            iterations,
            residual,
            "conjugate gradient exhausted its iteration budget"
        );
    }

    CgReport {
        iterations,
        residual,
        converged,
    }
}
