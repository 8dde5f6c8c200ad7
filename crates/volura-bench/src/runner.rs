//! Benchmark runner — executes scenarios and collects metrics.

use std::time::Instant;

use volura_mesh::Topology;
use volura_solver::{SimulationState, SolverStrategy, StepResult};
use volura_types::{VoluraError, VoluraResult};

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind};

/// Runs benchmark scenarios with a solver and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario with the given solver.
    pub fn run(
        scenario: &Scenario,
        solver: &mut dyn SolverStrategy,
    ) -> VoluraResult<BenchmarkMetrics> {
        let topology = Topology::build(&scenario.mesh);

        solver.init(
            &scenario.mesh,
            &topology,
            &scenario.materials,
            &scenario.pinned,
            &scenario.config,
        )?;

        let masses = solver
            .vertex_masses()
            .ok_or_else(|| VoluraError::InvalidConfig("solver has no masses after init".into()))?
            .to_vec();
        let mut state = SimulationState::from_mesh(&scenario.mesh, &masses)?;

        let dt = scenario.time_step();
        let mut step_times: Vec<f64> = Vec::with_capacity(scenario.frames as usize);

        let total_start = Instant::now();
        for _ in 0..scenario.frames {
            let result: StepResult = solver.step(&mut state, dt)?;
            if !result.wall_time.is_finite() {
                return Err(VoluraError::InvalidConfig(
                    "step reported a non-finite wall time".into(),
                ));
            }
            step_times.push(result.wall_time);
        }
        let total_wall_time = total_start.elapsed().as_secs_f64();

        let max_displacement = state
            .position
            .iter()
            .zip(&scenario.mesh.positions)
            .map(|(p, rest)| (*p - *rest).length())
            .fold(0.0_f64, f64::max);

        let avg_step = if step_times.is_empty() {
            0.0
        } else {
            step_times.iter().sum::<f64>() / step_times.len() as f64
        };
        let min_step = step_times.iter().copied().fold(f64::MAX, f64::min);
        let max_step = step_times.iter().copied().fold(0.0, f64::max);

        Ok(BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            total_wall_time,
            frames: scenario.frames,
            avg_step_time: avg_step,
            min_step_time: min_step,
            max_step_time: max_step,
            final_kinetic_energy: state.kinetic_energy(),
            max_displacement,
            vertex_count: scenario.mesh.vertex_count(),
            tet_count: scenario.mesh.tet_count(),
        })
    }

    /// Run every scenario and return metrics for each.
    pub fn run_all(solver: &mut dyn SolverStrategy) -> VoluraResult<Vec<BenchmarkMetrics>> {
        let mut results = Vec::new();
        for &kind in ScenarioKind::all() {
            let scenario = Scenario::from_kind(kind);
            let metrics = Self::run(&scenario, solver)?;
            results.push(metrics);
        }
        Ok(results)
    }
}
