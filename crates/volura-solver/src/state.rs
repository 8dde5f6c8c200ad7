//! Simulation state — per-vertex buffers mutated every frame.
//!
//! This is the primary mutable data structure during simulation. It is
//! owned exclusively by the caller and handed to the solver each step;
//! the rest-state mesh stays immutable on the side.

use volura_math::DVec3;
use volura_mesh::TetMesh;
use volura_types::{Real, VoluraError, VoluraResult};

/// Per-vertex simulation buffers.
///
/// All vectors have length `vertex_count`. Positions start at the mesh's
/// rest configuration; velocities start at zero. Masses come from the
/// solver's element precomputation and are never mutated afterwards.
pub struct SimulationState {
    /// Current positions.
    pub position: Vec<DVec3>,
    /// Current velocities.
    pub velocity: Vec<DVec3>,
    /// Positions at the start of the frame (velocity reconstruction).
    pub position_previous: Vec<DVec3>,
    /// Inertial prediction for the frame.
    pub position_predicted: Vec<DVec3>,
    /// Force accumulator, overwritten by each force-evaluation pass.
    pub force: Vec<DVec3>,
    /// Per-vertex mass.
    pub mass: Vec<Real>,
}

impl SimulationState {
    /// Initializes the state at the mesh's rest configuration.
    ///
    /// `mass` is the per-vertex mass produced by element
    /// precomputation; its length must match the mesh.
    pub fn from_mesh(mesh: &TetMesh, mass: &[Real]) -> VoluraResult<Self> {
        let n = mesh.vertex_count();
        if mass.len() != n {
            return Err(VoluraError::InvalidConfig(format!(
                "Mass array length ({}) != vertex count ({n})",
                mass.len()
            )));
        }
        if let Some(m) = mass.iter().find(|m| !(**m >= 0.0)) {
            return Err(VoluraError::InvalidConfig(format!(
                "Vertex masses must be non-negative, got {m}"
            )));
        }

        Ok(Self {
            position: mesh.positions.clone(),
            velocity: vec![DVec3::ZERO; n],
            position_previous: mesh.positions.clone(),
            position_predicted: vec![DVec3::ZERO; n],
            force: vec![DVec3::ZERO; n],
            mass: mass.to_vec(),
        })
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.position.len()
    }

    /// Computes the inertial prediction `p + dt·v`.
    ///
    /// Gravity is not part of the prediction; it enters through the
    /// force evaluator.
    pub fn predict(&mut self, dt: Real) {
        for i in 0..self.position.len() {
            self.position_predicted[i] = self.position[i] + dt * self.velocity[i];
        }
    }

    /// Snapshots current positions as "previous" for the frame.
    pub fn save_previous(&mut self) {
        self.position_previous.copy_from_slice(&self.position);
    }

    /// Reconstructs velocities from the frame's position change:
    /// `v = (p - p_previous) / dt`.
    pub fn update_velocities(&mut self, dt: Real) {
        let inv_dt = 1.0 / dt;
        for i in 0..self.position.len() {
            self.velocity[i] = (self.position[i] - self.position_previous[i]) * inv_dt;
        }
    }

    /// Total kinetic energy `0.5 · Σ mᵢ‖vᵢ‖²`.
    pub fn kinetic_energy(&self) -> Real {
        self.velocity
            .iter()
            .zip(&self.mass)
            .map(|(v, m)| 0.5 * m * v.length_squared())
            .sum()
    }
}
