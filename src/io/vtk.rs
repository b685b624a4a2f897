//! Legacy VTK ASCII export.
//!
//! Writes an evaluated grid as `STRUCTURED_POINTS` with the potential as a scalar
//! field and E as a vector field, readable by ParaView and other VTK tools.
//! Node order is X fastest, which is exactly the row-major order of the grid.

use std::io::{self, Write};

use crate::grid::GridField;
use crate::math::{Mesh, Scalar};

// Lattice spacing along one axis; single-sample axes get unit spacing.
fn spacing(first: Scalar, second: Option<Scalar>) -> Scalar {
    second.map_or(1.0, |s| s - first)
}

fn axis_step(mesh: &Mesh, along_cols: bool) -> Scalar {
    let origin = mesh[(0, 0)];
    let next = if along_cols {
        (mesh.ncols() > 1).then(|| mesh[(0, 1)])
    } else {
        (mesh.nrows() > 1).then(|| mesh[(1, 0)])
    };
    spacing(origin, next)
}

/// Writes `field` as a legacy VTK ASCII dataset titled `title`.
pub fn write_grid_vtk<W: Write>(mut writer: W, field: &GridField, title: &str) -> io::Result<()> {
    let grid = &field.grid;
    writeln!(writer, "# vtk DataFile Version 3.0")?;
    writeln!(writer, "{}", title)?;
    writeln!(writer, "ASCII")?;
    writeln!(writer, "DATASET STRUCTURED_POINTS")?;
    writeln!(writer, "DIMENSIONS {} {} 1", grid.nx(), grid.ny())?;
    writeln!(writer, "ORIGIN {:e} {:e} 0", grid.x[(0, 0)], grid.y[(0, 0)])?;
    writeln!(
        writer,
        "SPACING {:e} {:e} 1",
        axis_step(&grid.x, true),
        axis_step(&grid.y, false)
    )?;

    writeln!(writer, "POINT_DATA {}", grid.len())?;
    writeln!(writer, "SCALARS V double 1")?;
    writeln!(writer, "LOOKUP_TABLE default")?;
    for row in field.v.row_iter() {
        for v in row.iter() {
            writeln!(writer, "{:.16e}", v)?;
        }
    }

    writeln!(writer, "VECTORS E double")?;
    for (row_x, row_y) in field.ex.row_iter().zip(field.ey.row_iter()) {
        for (ex, ey) in row_x.iter().zip(row_y.iter()) {
            writeln!(writer, "{:.16e} {:.16e} 0", ex, ey)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Charge;
    use crate::grid::{compute_grid, evaluate_grid};

    fn render(nx: usize, ny: usize) -> String {
        let grid = compute_grid(-2.0, 2.0, -1.0, 1.0, nx, ny).unwrap();
        let field = evaluate_grid(grid, &[Charge::new(1.0e-9, 0.0, 0.0)], 1.0e-3).unwrap();
        let mut buf = Vec::new();
        write_grid_vtk(&mut buf, &field, "dipole").unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_describes_structured_points() {
        let text = render(5, 3);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "# vtk DataFile Version 3.0");
        assert_eq!(lines[1], "dipole");
        assert_eq!(lines[4], "DIMENSIONS 5 3 1");
        assert_eq!(lines[5], "ORIGIN -2e0 -1e0 0");
        assert_eq!(lines[6], "SPACING 1e0 1e0 1");
        assert_eq!(lines[7], "POINT_DATA 15");
        // Header, 15 scalars, vector header, 15 vectors.
        assert_eq!(lines.len(), 10 + 15 + 1 + 15);
    }

    #[test]
    fn single_column_grid_uses_unit_spacing() {
        let text = render(1, 2);
        assert!(text.lines().any(|l| l == "SPACING 1e0 2e0 1"));
    }
}
