use crate::math::{R2, Scalar};

/// Point charge in the plane.
///
/// Any magnitude is accepted, zero included, and a charge may coincide with an
/// evaluation point; softening in the evaluators handles that case.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Charge {
    /// Signed charge in coulombs.
    pub q: Scalar,
    /// Horizontal position in meters.
    pub x: Scalar,
    /// Vertical position in meters.
    pub y: Scalar,
}

impl Charge {
    /// Creates a charge of magnitude `q` at `(x, y)`.
    #[must_use]
    pub const fn new(q: Scalar, x: Scalar, y: Scalar) -> Self {
        Self { q, x, y }
    }

    /// Position as a vector.
    #[inline]
    #[must_use]
    pub fn position(&self) -> R2 {
        R2::new(self.x, self.y)
    }
}
