use crate::constants::COULOMB_CONSTANT;
use crate::errors::FieldError;
use crate::fields::Charge;
use crate::math::{magnitude, R2, Scalar};

/// Field vector and potential sampled at one point.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    /// Electric field E in V/m.
    pub e: R2,
    /// Electric potential V in volts.
    pub v: Scalar,
}

impl FieldSample {
    /// Euclidean norm of the field vector.
    #[must_use]
    pub fn magnitude(&self) -> Scalar {
        magnitude(&self.e)
    }
}

#[inline]
fn ensure_charges(charges: &[Charge]) -> Result<(), FieldError> {
    if charges.is_empty() {
        Err(FieldError::NoCharges)
    } else {
        Ok(())
    }
}

// Softened squared distance |p - pos|² + eps².
#[inline]
fn softened_r2(offset: &R2, eps: Scalar) -> Scalar {
    offset.norm_squared() + eps * eps
}

fn field_sum(point: R2, charges: &[Charge], eps: Scalar) -> R2 {
    charges.iter().fold(R2::zeros(), |acc, c| {
        let offset = point - c.position();
        let r3 = softened_r2(&offset, eps).powf(1.5);
        acc + offset * (COULOMB_CONSTANT * c.q) / r3
    })
}

fn potential_sum(point: R2, charges: &[Charge], eps: Scalar) -> Scalar {
    charges.iter().fold(0.0, |acc, c| {
        let offset = point - c.position();
        acc + COULOMB_CONSTANT * c.q / softened_r2(&offset, eps).sqrt()
    })
}

/// Electric field E at each of `points`, superposed over `charges`.
///
/// Each charge contributes `k q (p - pos) / (|p - pos|² + eps²)^(3/2)`. With
/// `eps = 0` a point on top of a charge yields NaN components rather than an error.
/// Results are in the order of `points`; an empty `points` slice yields an empty vector.
///
/// # Errors
///
/// Returns [`FieldError::NoCharges`] when `charges` is empty.
pub fn electric_field(points: &[R2], charges: &[Charge], eps: Scalar) -> Result<Vec<R2>, FieldError> {
    ensure_charges(charges)?;
    Ok(points.iter().map(|&p| field_sum(p, charges, eps)).collect())
}

/// Electric potential V at each of `points`, superposed over `charges`.
///
/// Each charge contributes `k q / (|p - pos|² + eps²)^(1/2)`.
///
/// # Errors
///
/// Returns [`FieldError::NoCharges`] when `charges` is empty.
pub fn potential(points: &[R2], charges: &[Charge], eps: Scalar) -> Result<Vec<Scalar>, FieldError> {
    ensure_charges(charges)?;
    Ok(points.iter().map(|&p| potential_sum(p, charges, eps)).collect())
}

/// Electric field E at a single `point`.
///
/// # Errors
///
/// Returns [`FieldError::NoCharges`] when `charges` is empty.
pub fn electric_field_at(point: R2, charges: &[Charge], eps: Scalar) -> Result<R2, FieldError> {
    ensure_charges(charges)?;
    Ok(field_sum(point, charges, eps))
}

/// Electric potential V at a single `point`.
///
/// # Errors
///
/// Returns [`FieldError::NoCharges`] when `charges` is empty.
pub fn potential_at(point: R2, charges: &[Charge], eps: Scalar) -> Result<Scalar, FieldError> {
    ensure_charges(charges)?;
    Ok(potential_sum(point, charges, eps))
}

/// Field and potential at each of `points` with a shared softening.
///
/// # Errors
///
/// Returns [`FieldError::NoCharges`] when `charges` is empty.
pub fn evaluate(points: &[R2], charges: &[Charge], eps: Scalar) -> Result<Vec<FieldSample>, FieldError> {
    ensure_charges(charges)?;
    Ok(points
        .iter()
        .map(|&p| FieldSample {
            e: field_sum(p, charges, eps),
            v: potential_sum(p, charges, eps),
        })
        .collect())
}
