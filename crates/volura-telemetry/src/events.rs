//! Simulation event types.
//!
//! Events are value types tagged with the frame they belong to. They
//! carry just enough data to monitor a running simulation without
//! copying any per-vertex state.

use serde::{Deserialize, Serialize};

/// A telemetry event emitted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Frame number (0-indexed).
    pub frame: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// A simulation frame started.
    FrameBegin {
        /// Simulation time at the start of the frame (seconds).
        sim_time: f64,
    },

    /// A simulation frame completed.
    FrameEnd {
        /// Wall-clock time spent on the frame (seconds).
        wall_time: f64,
    },

    /// Linear-solve convergence report for the frame's final
    /// Projective Dynamics iteration.
    Convergence {
        /// Conjugate gradient iterations used (0 for the direct back end).
        iterations: u32,
        /// Relative residual at termination.
        residual: f64,
        /// Whether the tolerance was met within the iteration budget.
        converged: bool,
    },

    /// Strain-limiting activity in the force evaluator.
    StrainLimiting {
        /// Number of tetrahedra with at least one clamped singular value.
        clamped_tets: u32,
        /// Largest pre-clamp singular value seen this frame.
        max_stretch: f64,
        /// Smallest pre-clamp singular value seen this frame.
        min_stretch: f64,
    },

    /// Energy snapshot after the frame.
    Energy {
        /// Kinetic energy, `0.5 · Σ mᵢ‖vᵢ‖²`.
        kinetic: f64,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given frame.
    pub fn new(frame: u32, kind: EventKind) -> Self {
        Self { frame, kind }
    }
}
