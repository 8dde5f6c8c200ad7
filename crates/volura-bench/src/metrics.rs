//! Benchmark metrics — serializable results of one scenario run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a completed scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Total wall-clock time for the run (seconds).
    pub total_wall_time: f64,
    /// Number of frames simulated.
    pub frames: u32,
    /// Average wall-clock time per frame (seconds).
    pub avg_step_time: f64,
    /// Fastest frame (seconds).
    pub min_step_time: f64,
    /// Slowest frame (seconds).
    pub max_step_time: f64,
    /// Kinetic energy at the end of the run.
    pub final_kinetic_energy: f64,
    /// Largest vertex displacement from the rest configuration.
    pub max_displacement: f64,
    /// Vertex count of the scenario mesh.
    pub vertex_count: usize,
    /// Tetrahedron count of the scenario mesh.
    pub tet_count: usize,
}
