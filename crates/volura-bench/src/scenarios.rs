//! Benchmark scenarios — procedural mesh + materials + pinning + config.
//!
//! Three canonical scenarios for regression testing:
//! 1. **Falling block** — an unconstrained block in free fall
//! 2. **Cantilever** — a bar pinned at one end, sagging under gravity
//! 3. **Single tet** — the minimal element, pinned at one vertex

use serde::{Deserialize, Serialize};

use volura_mesh::generators::{single_tet, tet_box};
use volura_mesh::TetMesh;
use volura_solver::{PinnedConstraints, SolverConfig, TetMaterial};
use volura_types::{Real, VertexId};

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// Unconstrained block in free fall.
    FallingBlock,
    /// Bar pinned across one end face, sagging under gravity.
    Cantilever,
    /// A single tetrahedron pinned at one vertex.
    SingleTet,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::FallingBlock,
            ScenarioKind::Cantilever,
            ScenarioKind::SingleTet,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::FallingBlock => "falling_block",
            ScenarioKind::Cantilever => "cantilever",
            ScenarioKind::SingleTet => "single_tet",
        }
    }
}

/// A fully specified benchmark scenario.
pub struct Scenario {
    /// Scenario type.
    pub kind: ScenarioKind,
    /// The body being simulated.
    pub mesh: TetMesh,
    /// Per-tetrahedron materials.
    pub materials: Vec<TetMaterial>,
    /// Pinned-vertex constraints.
    pub pinned: PinnedConstraints,
    /// Solver configuration (time step included).
    pub config: SolverConfig,
    /// Number of frames to simulate.
    pub frames: u32,
}

impl Scenario {
    /// A 20cm soft block, 2×2×2 cells, free falling for one second.
    pub fn falling_block() -> Self {
        let mesh = tet_box(2, 2, 2, 0.1);
        let materials = TetMaterial::uniform(
            mesh.tet_count(),
            TetMaterial {
                stiffness: 5.0e4,
                mass_density: 1000.0,
                strain_limits: [0.1, 10.0],
            },
        );
        let pinned = PinnedConstraints::new(mesh.vertex_count(), 1.0e4)
            .expect("non-negative stiffness");
        let mut config = SolverConfig::default();
        config.constants.gravity = [0.0, -9.81, 0.0];

        Self {
            kind: ScenarioKind::FallingBlock,
            mesh,
            materials,
            pinned,
            config,
            frames: 30,
        }
    }

    /// A 40cm bar, 4×1×1 cells, pinned across the x = 0 face.
    pub fn cantilever() -> Self {
        let mesh = tet_box(4, 1, 1, 0.1);
        let materials = TetMaterial::uniform(
            mesh.tet_count(),
            TetMaterial {
                stiffness: 5.0e5,
                mass_density: 1000.0,
                strain_limits: [0.1, 10.0],
            },
        );
        let mut pinned = PinnedConstraints::new(mesh.vertex_count(), 1.0e5)
            .expect("non-negative stiffness");
        for (i, p) in mesh.positions.iter().enumerate() {
            if p.x.abs() < 1e-9 {
                pinned.pin(VertexId(i as u32), *p);
            }
        }
        let mut config = SolverConfig::default();
        config.constants.gravity = [0.0, -9.81, 0.0];

        Self {
            kind: ScenarioKind::Cantilever,
            mesh,
            materials,
            pinned,
            config,
            frames: 30,
        }
    }

    /// The minimal element, pinned at its origin vertex.
    pub fn single_tet_drop() -> Self {
        let mesh = single_tet();
        let materials = TetMaterial::uniform(
            mesh.tet_count(),
            TetMaterial {
                stiffness: 100.0,
                mass_density: 1.0,
                strain_limits: [0.1, 10.0],
            },
        );
        let mut pinned = PinnedConstraints::new(mesh.vertex_count(), 1.0e5)
            .expect("non-negative stiffness");
        pinned.pin(VertexId(0), mesh.position(0));
        let mut config = SolverConfig::default();
        config.constants.gravity = [0.0, -9.8, 0.0];

        Self {
            kind: ScenarioKind::SingleTet,
            mesh,
            materials,
            pinned,
            config,
            frames: 60,
        }
    }

    /// Create a scenario by kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::FallingBlock => Self::falling_block(),
            ScenarioKind::Cantilever => Self::cantilever(),
            ScenarioKind::SingleTet => Self::single_tet_drop(),
        }
    }

    /// The scenario's time step.
    pub fn time_step(&self) -> Real {
        self.config.constants.time_step
    }
}
