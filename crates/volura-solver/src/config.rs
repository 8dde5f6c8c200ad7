//! Solver configuration.
//!
//! Process-wide simulation constants plus the knobs that control the
//! local/global iteration: iteration counts and the linear-solve back
//! end. Set once at solver construction, read-only afterwards.

use serde::{Deserialize, Serialize};
use volura_math::DVec3;
use volura_types::constants;
use volura_types::{Real, VoluraError, VoluraResult};

/// Which linear solver backs the global step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveMethod {
    /// Matrix-free conjugate gradient over the implicit operator.
    ConjugateGradient,
    /// Prebuilt sparse Cholesky factorization, one triangular solve
    /// per axis per iteration.
    Direct,
}

/// Process-wide physical constants, fixed for the solver's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConstants {
    /// Gravity vector [gx, gy, gz] in m/s².
    pub gravity: [Real; 3],

    /// Time step in seconds.
    pub time_step: Real,

    /// Conjugate gradient tolerance, applied as
    /// `‖r‖² < tolerance · ‖r₀‖²`.
    pub tolerance: Real,

    /// Stiffness used for pinned vertices that don't specify their own.
    pub pinned_stiffness_default: Real,
}

impl Default for SimulationConstants {
    fn default() -> Self {
        Self {
            gravity: [0.0, -constants::GRAVITY, 0.0],
            time_step: constants::DEFAULT_TIME_STEP,
            tolerance: constants::DEFAULT_TOLERANCE,
            pinned_stiffness_default: constants::DEFAULT_PINNED_STIFFNESS,
        }
    }
}

impl SimulationConstants {
    /// The gravity vector as a `DVec3`.
    #[inline]
    pub fn gravity_vec(&self) -> DVec3 {
        DVec3::from_array(self.gravity)
    }
}

/// Configuration for the Projective Dynamics solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Number of local/global iterations per time step. This is a fixed
    /// count, not a convergence loop.
    pub n_projective_dynamics_iter: u32,

    /// Conjugate gradient iteration budget per global step.
    pub n_conjugate_gradient_iter: u32,

    /// Linear-solve back end for the global step.
    pub method: SolveMethod,

    /// Physical constants.
    pub constants: SimulationConstants,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            n_projective_dynamics_iter: constants::DEFAULT_PD_ITERATIONS,
            n_conjugate_gradient_iter: constants::DEFAULT_CG_ITERATIONS,
            method: SolveMethod::ConjugateGradient,
            constants: SimulationConstants::default(),
        }
    }
}

impl SolverConfig {
    /// Config for debugging: fewer iterations, same tolerances.
    pub fn debug() -> Self {
        Self {
            n_projective_dynamics_iter: 2,
            n_conjugate_gradient_iter: 10,
            ..Default::default()
        }
    }

    /// High-quality config: more local/global iterations and a larger
    /// CG budget.
    pub fn high_quality() -> Self {
        Self {
            n_projective_dynamics_iter: 8,
            n_conjugate_gradient_iter: 120,
            ..Default::default()
        }
    }

    /// Quasi-static config: a large CG budget for settling a
    /// configuration rather than animating it.
    pub fn quasi_static() -> Self {
        Self {
            n_conjugate_gradient_iter: constants::QUASI_STATIC_CG_ITERATIONS,
            ..Default::default()
        }
    }

    /// Validates the configuration. Called once at solver `init`.
    pub fn validate(&self) -> VoluraResult<()> {
        if !(self.constants.time_step > 0.0) {
            return Err(VoluraError::InvalidConfig(format!(
                "time_step must be positive, got {}",
                self.constants.time_step
            )));
        }
        if !(self.constants.tolerance > 0.0) {
            return Err(VoluraError::InvalidConfig(format!(
                "tolerance must be positive, got {}",
                self.constants.tolerance
            )));
        }
        if self.constants.pinned_stiffness_default < 0.0 {
            return Err(VoluraError::InvalidConfig(format!(
                "pinned_stiffness_default must be non-negative, got {}",
                self.constants.pinned_stiffness_default
            )));
        }
        if !self.constants.gravity_vec().is_finite() {
            return Err(VoluraError::InvalidConfig(format!(
                "gravity must be finite, got {:?}",
                self.constants.gravity
            )));
        }
        if self.n_projective_dynamics_iter == 0 {
            return Err(VoluraError::InvalidConfig(
                "n_projective_dynamics_iter must be at least 1".into(),
            ));
        }
        if self.n_conjugate_gradient_iter == 0 && self.method == SolveMethod::ConjugateGradient {
            return Err(VoluraError::InvalidConfig(
                "n_conjugate_gradient_iter must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
