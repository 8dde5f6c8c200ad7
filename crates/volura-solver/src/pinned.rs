//! Soft pinned-vertex constraints.
//!
//! Pure data: an optional target position and a penalty stiffness per
//! vertex. A pinned vertex is pulled toward its target by a spring
//! force `m·k·(target − p)`; infinite stiffness is never used, to keep
//! the system well conditioned.

use volura_math::DVec3;
use volura_types::{Real, VertexId, VoluraError, VoluraResult};

/// Per-vertex pinned-constraint data.
#[derive(Debug, Clone)]
pub struct PinnedConstraints {
    targets: Vec<Option<DVec3>>,
    stiffness: Vec<Real>,
}

impl PinnedConstraints {
    /// An empty constraint set (zero vertices).
    pub fn empty() -> Self {
        Self {
            targets: Vec::new(),
            stiffness: Vec::new(),
        }
    }

    /// Creates an all-unconstrained set for `vertex_count` vertices.
    ///
    /// `default_stiffness` applies to vertices pinned later without an
    /// explicit stiffness.
    pub fn new(vertex_count: usize, default_stiffness: Real) -> VoluraResult<Self> {
        if default_stiffness < 0.0 {
            return Err(VoluraError::InvalidConfig(format!(
                "pinned stiffness must be non-negative, got {default_stiffness}"
            )));
        }
        Ok(Self {
            targets: vec![None; vertex_count],
            stiffness: vec![default_stiffness; vertex_count],
        })
    }

    /// Builds constraints from a full per-vertex target array, where a
    /// target with any NaN component means "unconstrained".
    ///
    /// This is the interchange form used by external registration
    /// tooling, which marks free vertices with NaN.
    pub fn from_targets(targets: &[DVec3], stiffness: Real) -> VoluraResult<Self> {
        let mut pinned = Self::new(targets.len(), stiffness)?;
        for (i, target) in targets.iter().enumerate() {
            if target.is_finite() {
                pinned.targets[i] = Some(*target);
            }
        }
        Ok(pinned)
    }

    /// Pins `vertex` to `target` with the default stiffness.
    pub fn pin(&mut self, vertex: VertexId, target: DVec3) {
        self.targets[vertex.index()] = Some(target);
    }

    /// Pins `vertex` to `target` with an explicit stiffness.
    pub fn pin_with_stiffness(
        &mut self,
        vertex: VertexId,
        target: DVec3,
        stiffness: Real,
    ) -> VoluraResult<()> {
        if stiffness < 0.0 {
            return Err(VoluraError::InvalidConfig(format!(
                "pinned stiffness must be non-negative, got {stiffness}"
            )));
        }
        self.targets[vertex.index()] = Some(target);
        self.stiffness[vertex.index()] = stiffness;
        Ok(())
    }

    /// Releases a previously pinned vertex.
    pub fn release(&mut self, vertex: VertexId) {
        self.targets[vertex.index()] = None;
    }

    /// The target of vertex `i`, if pinned.
    #[inline]
    pub fn target(&self, i: usize) -> Option<DVec3> {
        self.targets[i]
    }

    /// The penalty stiffness of vertex `i`.
    #[inline]
    pub fn stiffness(&self, i: usize) -> Real {
        self.stiffness[i]
    }

    /// The stiffness contribution of vertex `i` to the system diagonal:
    /// its penalty stiffness if pinned, zero otherwise.
    #[inline]
    pub fn diagonal_stiffness(&self, i: usize) -> Real {
        if self.targets[i].is_some() {
            self.stiffness[i]
        } else {
            0.0
        }
    }

    /// Number of vertices covered by this constraint set.
    pub fn vertex_count(&self) -> usize {
        self.targets.len()
    }

    /// Number of pinned vertices.
    pub fn pinned_count(&self) -> usize {
        self.targets.iter().filter(|t| t.is_some()).count()
    }
}
