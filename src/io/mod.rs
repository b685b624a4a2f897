//! Export helpers for evaluated grids.

pub mod csv;
pub mod vtk;

pub use csv::write_grid_csv;
pub use vtk::write_grid_vtk;

use std::io::Write;

use crate::errors::ChargeFieldError;
use crate::fields::Charge;
use crate::grid::{evaluate_grid, Grid, GridField};
use crate::math::Scalar;

/// On-disk layout for [`export_grid`].
#[cfg_attr(feature = "server", derive(clap::ValueEnum))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// One `x,y,ex,ey,v` row per node.
    #[default]
    Csv,
    /// Legacy VTK ASCII structured points.
    Vtk,
}

/// Evaluates `charges` over `grid` and writes the result to `writer`.
///
/// # Errors
///
/// Fails on an empty charge list or when the writer fails.
pub fn export_grid<W: Write>(
    writer: W,
    grid: Grid,
    charges: &[Charge],
    eps: Scalar,
    format: ExportFormat,
) -> Result<(), ChargeFieldError> {
    let field = evaluate_grid(grid, charges, eps)?;
    write_field(writer, &field, format)?;
    Ok(())
}

/// Writes an already evaluated `field` to `writer` in `format`.
///
/// # Errors
///
/// Fails when the writer fails.
pub fn write_field<W: Write>(
    writer: W,
    field: &GridField,
    format: ExportFormat,
) -> std::io::Result<()> {
    match format {
        ExportFormat::Csv => write_grid_csv(writer, field),
        ExportFormat::Vtk => write_grid_vtk(writer, field, "point charge field"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FieldError;
    use crate::grid::compute_grid;

    #[test]
    fn export_without_charges_reports_field_error() {
        let grid = compute_grid(-1.0, 1.0, -1.0, 1.0, 2, 2).unwrap();
        let err = export_grid(Vec::new(), grid, &[], 1.0e-3, ExportFormat::Csv).unwrap_err();
        assert!(matches!(err, ChargeFieldError::Field(FieldError::NoCharges)));
    }

    #[test]
    fn failed_evaluation_writes_nothing() {
        let grid = compute_grid(-1.0, 1.0, -1.0, 1.0, 2, 2).unwrap();
        let mut buf = Vec::new();
        assert!(export_grid(&mut buf, grid, &[], 1.0e-3, ExportFormat::Vtk).is_err());
        assert!(buf.is_empty());
    }

    #[test]
    fn write_field_emits_csv_rows() {
        let grid = compute_grid(-1.0, 1.0, -1.0, 1.0, 2, 2).unwrap();
        let field = evaluate_grid(grid, &[Charge::new(1.0e-9, 0.0, 0.0)], 1.0e-3).unwrap();
        let mut buf = Vec::new();
        write_field(&mut buf, &field, ExportFormat::Csv).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 5);
    }

    #[test]
    fn export_writes_requested_format() {
        let grid = compute_grid(-1.0, 1.0, -1.0, 1.0, 2, 2).unwrap();
        let mut buf = Vec::new();
        let charges = [Charge::new(1.0e-9, 0.0, 0.0)];
        export_grid(&mut buf, grid, &charges, 1.0e-3, ExportFormat::Vtk).unwrap();
        assert!(String::from_utf8(buf).unwrap().starts_with("# vtk DataFile"));
    }
}
