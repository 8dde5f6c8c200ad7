//! Scalar type alias for the simulation.
//!
//! Volura runs in `f64`: the sparse Cholesky factorization and the
//! singular-value algebra in the force evaluator are both noticeably
//! more robust in double precision, and the engine is CPU-bound.

/// The floating-point type used throughout the simulation.
pub type Real = f64;
