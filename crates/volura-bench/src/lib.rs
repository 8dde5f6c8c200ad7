//! # volura-bench
//!
//! Benchmark scenarios and a runner for the Volura solver. Each
//! scenario bundles a procedural mesh, materials, pinning, and a solver
//! configuration; the runner steps a [`volura_solver::SolverStrategy`]
//! through it and collects timing and physical metrics for regression
//! tracking.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::BenchmarkMetrics;
pub use runner::BenchmarkRunner;
pub use scenarios::{Scenario, ScenarioKind};
