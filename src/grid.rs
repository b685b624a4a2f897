//! Regular sampling lattices and mesh-shaped results.

use tracing::debug;

use crate::constants::MAX_RESOLUTION;
use crate::errors::FieldError;
use crate::fields::{evaluate, Charge};
use crate::math::{Mesh, R2, Scalar};

/// Generates `n` linearly spaced samples in [start, stop], both endpoints included.
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            let mut samples: Vec<Scalar> = (0..n).map(|i| start + step * i as Scalar).collect();
            // Pin the far endpoint so accumulated rounding never shifts it.
            samples[n - 1] = stop;
            samples
        }
    }
}

/// Rectangular lattice of evaluation points.
///
/// `x` and `y` are `ny × nx` meshes (X varies along columns, Y along rows) and
/// `points` lists the same coordinates flattened in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// X coordinate of every lattice node.
    pub x: Mesh,
    /// Y coordinate of every lattice node.
    pub y: Mesh,
    /// Row-major flattening of `(x, y)`, ready for the evaluators.
    pub points: Vec<R2>,
}

impl Grid {
    /// Number of columns (samples along X).
    #[must_use]
    pub fn nx(&self) -> usize {
        self.x.ncols()
    }

    /// Number of rows (samples along Y).
    #[must_use]
    pub fn ny(&self) -> usize {
        self.x.nrows()
    }

    /// Total number of lattice nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the lattice has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Folds a flat row-major sequence back into an `ny × nx` mesh.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::ShapeMismatch`] unless `values` holds exactly one entry per node.
    pub fn reshape(&self, values: &[Scalar]) -> Result<Mesh, FieldError> {
        if values.len() != self.len() {
            return Err(FieldError::ShapeMismatch {
                expected: self.len(),
                actual: values.len(),
            });
        }
        Ok(Mesh::from_row_slice(self.ny(), self.nx(), values))
    }
}

/// Builds an `nx × ny` lattice spanning `[xmin, xmax] × [ymin, ymax]` inclusive.
///
/// The box is not validated: an inverted box yields a mirrored lattice and a
/// degenerate one repeats the same coordinate.
///
/// # Errors
///
/// Returns [`FieldError::InvalidResolution`] when `nx` or `ny` is zero or exceeds
/// [`MAX_RESOLUTION`].
pub fn compute_grid(
    xmin: Scalar,
    xmax: Scalar,
    ymin: Scalar,
    ymax: Scalar,
    nx: usize,
    ny: usize,
) -> Result<Grid, FieldError> {
    if !(1..=MAX_RESOLUTION).contains(&nx) || !(1..=MAX_RESOLUTION).contains(&ny) {
        return Err(FieldError::InvalidResolution { nx, ny });
    }
    let xs = linspace(xmin, xmax, nx);
    let ys = linspace(ymin, ymax, ny);

    let x = Mesh::from_fn(ny, nx, |_, col| xs[col]);
    let y = Mesh::from_fn(ny, nx, |row, _| ys[row]);
    let points = ys
        .iter()
        .flat_map(|&py| xs.iter().map(move |&px| R2::new(px, py)))
        .collect();

    Ok(Grid { x, y, points })
}

/// A grid together with the field and potential evaluated on it.
#[derive(Debug, Clone, PartialEq)]
pub struct GridField {
    /// Sampling lattice.
    pub grid: Grid,
    /// X component of E per node.
    pub ex: Mesh,
    /// Y component of E per node.
    pub ey: Mesh,
    /// Potential per node.
    pub v: Mesh,
}

/// Evaluates field and potential over every node of `grid`.
///
/// # Errors
///
/// Returns [`FieldError::NoCharges`] when `charges` is empty.
pub fn evaluate_grid(grid: Grid, charges: &[Charge], eps: Scalar) -> Result<GridField, FieldError> {
    debug!(nx = grid.nx(), ny = grid.ny(), charges = charges.len(), eps, "evaluating grid");
    let samples = evaluate(&grid.points, charges, eps)?;

    let ex: Vec<Scalar> = samples.iter().map(|s| s.e.x).collect();
    let ey: Vec<Scalar> = samples.iter().map(|s| s.e.y).collect();
    let v: Vec<Scalar> = samples.iter().map(|s| s.v).collect();

    Ok(GridField {
        ex: grid.reshape(&ex)?,
        ey: grid.reshape(&ey)?,
        v: grid.reshape(&v)?,
        grid,
    })
}
