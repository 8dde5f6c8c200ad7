//! Physical constants and simulation defaults.

use crate::scalar::Real;

/// Gravitational acceleration magnitude (m/s²).
pub const GRAVITY: Real = 9.81;

/// Default simulation time step (seconds). 1/30th of a second.
pub const DEFAULT_TIME_STEP: Real = 1.0 / 30.0;

/// Default convergence tolerance for the conjugate gradient solve,
/// applied to the squared residual norm relative to its initial value.
pub const DEFAULT_TOLERANCE: Real = 1.0e-6;

/// Default Young's modulus (Pa) for the elastic material.
pub const YOUNG_MODULUS: Real = 1.0e5;

/// Default Poisson's ratio.
pub const POISSON_RATIO: Real = 0.0;

/// Default shear modulus derived from Young's modulus and Poisson's ratio.
pub const SHEAR_MODULUS: Real = YOUNG_MODULUS / (2.0 * (1.0 + POISSON_RATIO));

/// Default mass density (kg/m³). Water-like soft tissue.
pub const DEFAULT_MASS_DENSITY: Real = 1000.0;

/// Default stiffness of the soft pinned-vertex penalty spring.
pub const DEFAULT_PINNED_STIFFNESS: Real = 1.0e4;

/// Default strain limits: singular values of the deformation gradient
/// are clamped to this range.
pub const DEFAULT_STRAIN_LIMITS: [Real; 2] = [0.1, 10.0];

/// Default number of Projective Dynamics (local/global) iterations
/// per time step.
pub const DEFAULT_PD_ITERATIONS: u32 = 5;

/// Default conjugate gradient iteration budget for dynamic frames.
pub const DEFAULT_CG_ITERATIONS: u32 = 30;

/// Conjugate gradient iteration budget for quasi-static solves.
pub const QUASI_STATIC_CG_ITERATIONS: u32 = 1024;

/// Shape determinants with absolute value at or below this threshold
/// mark a tetrahedron as degenerate.
pub const DEGENERATE_VOLUME_EPSILON: Real = 1.0e-12;
