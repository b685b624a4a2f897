//! Shared error types used across submodules.

use thiserror::Error;

use crate::constants::MAX_RESOLUTION;

/// Input-validation failures raised by the evaluators and the grid builder.
///
/// Numeric degeneracy (a point sitting on a charge with zero softening) is not an
/// error; it propagates as infinities or NaN in the returned samples.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The charge list was empty.
    #[error("no charges provided")]
    NoCharges,
    /// A grid was requested with zero columns or rows, or more than `MAX_RESOLUTION` of either.
    #[error("grid resolution must be between 1x1 and {}x{}, got {nx}x{ny}", MAX_RESOLUTION, MAX_RESOLUTION)]
    InvalidResolution {
        /// Requested column count.
        nx: usize,
        /// Requested row count.
        ny: usize,
    },
    /// A flat result could not be reshaped onto the grid.
    #[error("expected {expected} values to fill the grid, got {actual}")]
    ShapeMismatch {
        /// Number of grid points.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },
}

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum ChargeFieldError {
    /// Wraps evaluation and grid errors.
    #[error(transparent)]
    Field(#[from] FieldError),
    /// Raised when exporting results fails.
    #[error("export failed: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_charges_message_is_actionable() {
        assert_eq!(FieldError::NoCharges.to_string(), "no charges provided");
    }

    #[test]
    fn field_errors_pass_through_transparently() {
        let err: ChargeFieldError = FieldError::InvalidResolution { nx: 0, ny: 3 }.into();
        assert_eq!(err.to_string(), "grid resolution must be between 1x1 and 2048x2048, got 0x3");
    }
}
