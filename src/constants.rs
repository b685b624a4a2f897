//! Physical constants and evaluation defaults.
//!
//! ## Accuracy
//!
//! The Coulomb constant is carried with 11 significant figures, the value most
//! references quote for k = 1/(4πε₀). It agrees with [`VACUUM_PERMITTIVITY`] to
//! about one part in 10¹⁰, which is below anything the visualizer can resolve.
//!
//! ## References
//!
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>
//! - CODATA 2018 values published May 20, 2019 (following 2019 SI redefinition)

use std::f64::consts::PI;

use crate::math::Scalar;

/// Coulomb's constant k in N·m²/C².
/// Value used by both the field and the potential evaluators: 8.9875517923 × 10⁹.
pub const COULOMB_CONSTANT: Scalar = 8.987_551_792_3e9;
/// Vacuum permittivity ε₀ in farads per meter (F/m).
/// Approximate value: 8.8541878128 × 10⁻¹² F/m (11 significant figures).
pub const VACUUM_PERMITTIVITY: Scalar = 8.854_187_812_8e-12;

/// Softening used for grid evaluations when the caller does not supply one.
pub const DEFAULT_GRID_SOFTENING: Scalar = 1.0e-3;
/// Softening used for single-point queries when the caller does not supply one.
///
/// Smaller than [`DEFAULT_GRID_SOFTENING`]: a hand-picked query point rarely lands on a charge.
pub const DEFAULT_POINT_SOFTENING: Scalar = 1.0e-6;
/// Samples per axis for grid evaluations when the caller does not supply a resolution.
pub const DEFAULT_RESOLUTION: usize = 50;
/// Largest accepted sample count along either grid axis.
pub const MAX_RESOLUTION: usize = 2048;
/// Half-width of the default square bounding box `[-2, 2] × [-2, 2]`.
pub const DEFAULT_HALF_EXTENT: Scalar = 2.0;

/// Coulomb constant derived from ε₀ as 1/(4πε₀).
#[inline]
#[must_use]
pub fn coulomb_constant_from_permittivity(permittivity: Scalar) -> Scalar {
    1.0 / (4.0 * PI * permittivity)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn coulomb_constant_matches_vacuum_permittivity() {
        let derived = coulomb_constant_from_permittivity(VACUUM_PERMITTIVITY);
        assert_relative_eq!(derived, COULOMB_CONSTANT, max_relative = 1.0e-9);
    }

    #[test]
    fn point_softening_is_finer_than_grid_softening() {
        assert!(DEFAULT_POINT_SOFTENING < DEFAULT_GRID_SOFTENING);
    }
}
