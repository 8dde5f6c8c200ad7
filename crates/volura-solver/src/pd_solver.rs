//! Projective Dynamics solver — the core local/global loop.
//!
//! Each step:
//! 1. **Predict** — inertial position from the current velocity
//! 2. **Local step** — per-element rotation fit and force evaluation
//! 3. **Global step** — solve `A·delta = b` for a position correction
//! 4. **Repeat** 2–3 a fixed number of times
//! 5. **Finalize** — reconstruct velocities from the position change
//!
//! The system matrix is constant, so the global step is either a
//! matrix-free conjugate gradient over the mesh graph or a triangular
//! solve against a Cholesky factorization built once at `init`.

use std::time::Instant;

use volura_math::faer_solver::FaerSolver;
use volura_math::sparse::SparseSolver;
use volura_math::DVec3;
use volura_mesh::{TetMesh, Topology};
use volura_telemetry::{EventBus, EventKind, SimulationEvent};
use volura_types::{Real, VoluraError, VoluraResult};

use crate::cg::{conjugate_gradient, CgReport};
use crate::config::{SolveMethod, SolverConfig};
use crate::element::ElementData;
use crate::force::{accumulate_forces, ForceStats};
use crate::material::TetMaterial;
use crate::operator::SystemOperator;
use crate::pinned::PinnedConstraints;
use crate::state::SimulationState;
use crate::strategy::{SolverStrategy, StepResult};

/// Projective Dynamics solver for tetrahedral solids with a
/// corotational constitutive model.
pub struct ProjectiveDynamicsSolver {
    /// Precomputed element data.
    elements: Option<ElementData>,
    /// Matrix-free system operator (also feeds the explicit assembly).
    operator: Option<SystemOperator>,
    /// Cholesky factorization for the direct back end.
    direct: Option<FaerSolver>,
    /// Pinned-vertex constraints, snapshotted at init().
    pinned: PinnedConstraints,
    /// Configuration snapshot from init().
    config: SolverConfig,
    /// Optional telemetry bus.
    telemetry: Option<EventBus>,
    /// Frame counter for telemetry tagging.
    frame: u32,
    /// Number of vertices.
    n: usize,
    /// Whether init() has completed successfully.
    initialized: bool,
}

impl ProjectiveDynamicsSolver {
    /// Creates a new solver (uninitialized).
    pub fn new() -> Self {
        Self {
            elements: None,
            operator: None,
            direct: None,
            pinned: PinnedConstraints::empty(),
            config: SolverConfig::default(),
            telemetry: None,
            frame: 0,
            n: 0,
            initialized: false,
        }
    }

    /// Attaches a telemetry bus; events are emitted and flushed once
    /// per step.
    pub fn attach_telemetry(&mut self, bus: EventBus) {
        self.telemetry = Some(bus);
    }

    /// The attached telemetry bus, if any.
    pub fn telemetry_mut(&mut self) -> Option<&mut EventBus> {
        self.telemetry.as_mut()
    }

    fn emit(&self, kind: EventKind) {
        if let Some(bus) = &self.telemetry {
            bus.emit(SimulationEvent::new(self.frame, kind));
        }
    }

    /// Solves `A·delta = b` with the configured back end.
    fn global_solve(
        &self,
        b: &[DVec3],
        delta: &mut [DVec3],
        scratch: &mut [f64],
    ) -> VoluraResult<CgReport> {
        match self.config.method {
            SolveMethod::ConjugateGradient => {
                let operator = self.operator.as_ref().unwrap();
                Ok(conjugate_gradient(
                    operator,
                    b,
                    delta,
                    self.config.n_conjugate_gradient_iter,
                    self.config.constants.tolerance,
                ))
            }
            SolveMethod::Direct => {
                let solver = self.direct.as_ref().unwrap();
                let (rhs, sol) = scratch.split_at_mut(self.n);
                for axis in 0..3 {
                    for (i, bi) in b.iter().enumerate() {
                        rhs[i] = bi[axis];
                    }
                    solver
                        .solve(rhs, sol)
                        .map_err(|e| VoluraError::InvalidConfig(format!("solve failed: {e}")))?;
                    for (i, di) in delta.iter_mut().enumerate() {
                        di[axis] = sol[i];
                    }
                }
                Ok(CgReport {
                    iterations: 0,
                    residual: 0.0,
                    converged: true,
                })
            }
        }
    }
}

impl Default for ProjectiveDynamicsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverStrategy for ProjectiveDynamicsSolver {
    fn init(
        &mut self,
        mesh: &TetMesh,
        topology: &Topology,
        materials: &[TetMaterial],
        pinned: &PinnedConstraints,
        config: &SolverConfig,
    ) -> VoluraResult<()> {
        config.validate()?;
        mesh.validate()?;

        let n = mesh.vertex_count();
        if pinned.vertex_count() != n {
            return Err(VoluraError::InvalidConfig(format!(
                "Pinned-constraint length ({}) != vertex count ({n})",
                pinned.vertex_count()
            )));
        }

        let elements = ElementData::precompute(mesh, topology, materials)?;
        let operator =
            SystemOperator::build(&elements, topology, pinned, config.constants.time_step)?;

        self.direct = match config.method {
            SolveMethod::ConjugateGradient => None,
            SolveMethod::Direct => {
                // Assemble and factorize once; every step is then a
                // triangular solve per axis.
                let mut solver = FaerSolver::new();
                solver
                    .factorize(&operator.to_csr())
                    .map_err(VoluraError::SingularSystem)?;
                Some(solver)
            }
        };

        self.n = n;
        self.elements = Some(elements);
        self.operator = Some(operator);
        self.pinned = pinned.clone();
        self.config = config.clone();
        self.frame = 0;
        self.initialized = true;
        Ok(())
    }

    fn step(&mut self, state: &mut SimulationState, dt: Real) -> VoluraResult<StepResult> {
        if !self.initialized {
            return Err(VoluraError::InvalidConfig(
                "Solver not initialized. Call init() first.".into(),
            ));
        }
        if state.vertex_count() != self.n {
            return Err(VoluraError::InvalidConfig(format!(
                "State vertex count ({}) != solver vertex count ({})",
                state.vertex_count(),
                self.n
            )));
        }
        // The operator (and any factorization) bakes in 1/dt².
        let time_step = self.config.constants.time_step;
        if (dt - time_step).abs() > Real::EPSILON * time_step.abs() {
            return Err(VoluraError::InvalidConfig(format!(
                "Solver initialized for time_step {time_step}, stepped with {dt}"
            )));
        }

        let start = Instant::now();
        self.emit(EventKind::FrameBegin {
            sim_time: self.frame as f64 * dt,
        });

        let elements = self.elements.as_ref().unwrap();
        let gravity = self.config.constants.gravity_vec();
        let inv_dt2 = 1.0 / (dt * dt);

        state.predict(dt);
        state.save_previous();

        let mut b = vec![DVec3::ZERO; self.n];
        let mut delta = vec![DVec3::ZERO; self.n];
        let mut scratch = vec![0.0_f64; self.n * 2];

        let mut report = CgReport {
            iterations: 0,
            residual: 0.0,
            converged: true,
        };
        let mut stats = ForceStats::default();

        for _ in 0..self.config.n_projective_dynamics_iter {
            stats = accumulate_forces(state, elements, &self.pinned, gravity);

            for i in 0..self.n {
                b[i] = -inv_dt2
                    * state.mass[i]
                    * (state.position[i] - state.position_predicted[i])
                    + state.force[i];
            }

            report = self.global_solve(&b, &mut delta, &mut scratch)?;

            for i in 0..self.n {
                state.position[i] += delta[i];
            }
        }

        state.update_velocities(dt);

        let wall_time = start.elapsed().as_secs_f64();
        self.emit(EventKind::Convergence {
            iterations: report.iterations,
            residual: report.residual,
            converged: report.converged,
        });
        self.emit(EventKind::StrainLimiting {
            clamped_tets: stats.clamped_tets,
            max_stretch: stats.max_stretch,
            min_stretch: stats.min_stretch,
        });
        self.emit(EventKind::Energy {
            kinetic: state.kinetic_energy(),
        });
        self.emit(EventKind::FrameEnd { wall_time });
        if let Some(bus) = self.telemetry.as_mut() {
            bus.flush();
        }

        self.frame += 1;

        Ok(StepResult {
            iterations: self.config.n_projective_dynamics_iter,
            final_residual: report.residual,
            converged: report.converged,
            wall_time,
        })
    }

    fn vertex_masses(&self) -> Option<&[Real]> {
        self.elements.as_ref().map(|e| e.vertex_mass.as_slice())
    }

    fn name(&self) -> &str {
        "ProjectiveDynamics"
    }
}
