//! Per-tetrahedron material parameters.

use serde::{Deserialize, Serialize};
use volura_types::constants;
use volura_types::{Real, VoluraError, VoluraResult};

/// Material parameters for one tetrahedron.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TetMaterial {
    /// Shear-modulus-like stiffness scalar (Pa).
    pub stiffness: Real,

    /// Mass density (kg/m³).
    pub mass_density: Real,

    /// Singular values of the deformation gradient are clamped to
    /// `[strain_limits[0], strain_limits[1]]`.
    pub strain_limits: [Real; 2],
}

impl Default for TetMaterial {
    fn default() -> Self {
        Self {
            stiffness: constants::SHEAR_MODULUS,
            mass_density: constants::DEFAULT_MASS_DENSITY,
            strain_limits: constants::DEFAULT_STRAIN_LIMITS,
        }
    }
}

impl TetMaterial {
    /// A uniform material array for `tet_count` tetrahedra.
    pub fn uniform(tet_count: usize, material: TetMaterial) -> Vec<TetMaterial> {
        vec![material; tet_count]
    }

    /// Validates the parameters.
    pub fn validate(&self) -> VoluraResult<()> {
        if !(self.stiffness >= 0.0) {
            return Err(VoluraError::InvalidConfig(format!(
                "stiffness must be non-negative, got {}",
                self.stiffness
            )));
        }
        if !(self.mass_density > 0.0) {
            return Err(VoluraError::InvalidConfig(format!(
                "mass_density must be positive, got {}",
                self.mass_density
            )));
        }
        let [lo, hi] = self.strain_limits;
        if !(lo >= 0.0 && lo <= hi) {
            return Err(VoluraError::InvalidConfig(format!(
                "strain_limits must satisfy 0 <= lo <= hi, got [{lo}, {hi}]"
            )));
        }
        Ok(())
    }
}
