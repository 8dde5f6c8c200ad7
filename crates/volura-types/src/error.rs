//! Error types for the Volura engine.
//!
//! All crates return `VoluraResult<T>` from fallible operations.
//! Non-convergence of the iterative solver is deliberately *not* an
//! error variant: a partially converged step is still applied and the
//! condition is reported through telemetry instead.

use thiserror::Error;

use crate::ids::TetId;

/// Unified error type for the Volura engine.
#[derive(Debug, Error)]
pub enum VoluraError {
    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Configuration or supplied attribute data is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A tetrahedron has a (near-)zero shape determinant, so its rest
    /// shape cannot be inverted. Fatal at precomputation time.
    #[error("Degenerate element {tet}: shape determinant {determinant:.3e}")]
    DegenerateElement {
        /// The offending tetrahedron.
        tet: TetId,
        /// The shape-matrix determinant that failed the volume check.
        determinant: f64,
    },

    /// The system matrix is singular or not positive definite
    /// (e.g. a disconnected, unconstrained, massless vertex).
    #[error("Singular system: {0}")]
    SingularSystem(String),
}

/// Convenience alias for `Result<T, VoluraError>`.
pub type VoluraResult<T> = Result<T, VoluraError>;
