//! Solver strategy trait — the core abstraction for time integration.
//!
//! The simulation pipeline talks to solvers through this trait so a
//! quasi-static settle, the dynamic Projective Dynamics solver, or a
//! future integrator can be swapped without touching callers.

use volura_mesh::{TetMesh, Topology};
use volura_types::{Real, VoluraResult};

use crate::config::SolverConfig;
use crate::material::TetMaterial;
use crate::pinned::PinnedConstraints;
use crate::state::SimulationState;

/// Result of one solver step.
#[derive(Debug, Clone, Copy)]
pub struct StepResult {
    /// Local/global iterations performed.
    pub iterations: u32,
    /// Relative residual of the last global solve
    /// (0 for the direct back end).
    pub final_residual: Real,
    /// Whether the last global solve met its tolerance.
    pub converged: bool,
    /// Wall-clock time for this step (seconds).
    pub wall_time: f64,
}

/// Trait for time integration solvers.
///
/// ```text
/// solver.init(&mesh, &topology, &materials, &pinned, &config)?;
/// let mut state = SimulationState::from_mesh(&mesh, solver_masses)?;
/// loop {
///     solver.step(&mut state, dt)?;
/// }
/// ```
pub trait SolverStrategy: Send {
    /// Initializes the solver: element precomputation, operator
    /// construction, and (for the direct back end) factorization.
    ///
    /// Called once, or again after a material or pinning change.
    fn init(
        &mut self,
        mesh: &TetMesh,
        topology: &Topology,
        materials: &[TetMaterial],
        pinned: &PinnedConstraints,
        config: &SolverConfig,
    ) -> VoluraResult<()>;

    /// Advances the simulation by one time step, mutating
    /// `state.position` and `state.velocity` in place.
    fn step(&mut self, state: &mut SimulationState, dt: Real) -> VoluraResult<StepResult>;

    /// Per-vertex masses from element precomputation, available after
    /// `init`. Used to build the matching [`SimulationState`].
    fn vertex_masses(&self) -> Option<&[Real]>;

    /// Returns the solver's name.
    fn name(&self) -> &str;
}
