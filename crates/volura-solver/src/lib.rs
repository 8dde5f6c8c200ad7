//! # volura-solver
//!
//! The Projective Dynamics solver for tetrahedral solids.
//!
//! ## Key Types
//!
//! - [`SimulationState`] — per-vertex buffers for positions, velocities, forces
//! - [`SolverStrategy`] — pluggable solver trait
//! - [`ProjectiveDynamicsSolver`] — the local/global solver with CG and
//!   prebuilt-factorization back ends
//! - [`SolverConfig`] / [`SimulationConstants`] — serializable configuration
//! - [`TetMaterial`] — per-tetrahedron material parameters
//! - [`PinnedConstraints`] — soft pinned-vertex targets
//! - [`element::ElementData`] — per-element rest-state precomputation

pub mod cg;
pub mod config;
pub mod element;
pub mod force;
pub mod material;
pub mod operator;
pub mod pd_solver;
pub mod pinned;
pub mod state;
pub mod strategy;

pub use config::{SimulationConstants, SolveMethod, SolverConfig};
pub use material::TetMaterial;
pub use pd_solver::ProjectiveDynamicsSolver;
pub use pinned::PinnedConstraints;
pub use state::SimulationState;
pub use strategy::{SolverStrategy, StepResult};
