//! Plain CSV export, one row per lattice node.

use std::io::{self, Write};

use crate::grid::GridField;

/// Writes `x,y,ex,ey,v` for every node of `field` in row-major order.
pub fn write_grid_csv<W: Write>(mut w: W, field: &GridField) -> io::Result<()> {
    writeln!(w, "x,y,ex,ey,v")?;
    let nx = field.grid.nx();
    for (idx, p) in field.grid.points.iter().enumerate() {
        let cell = (idx / nx, idx % nx);
        writeln!(
            w,
            "{:.16e},{:.16e},{:.16e},{:.16e},{:.16e}",
            p.x, p.y, field.ex[cell], field.ey[cell], field.v[cell]
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Charge;
    use crate::grid::{compute_grid, evaluate_grid};

    #[test]
    fn writes_header_and_one_line_per_node() {
        let grid = compute_grid(-1.0, 1.0, -1.0, 1.0, 3, 2).unwrap();
        let field = evaluate_grid(grid, &[Charge::new(1.0e-9, 0.0, 0.0)], 1.0e-3).unwrap();
        let mut buf = Vec::new();
        write_grid_csv(&mut buf, &field).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "x,y,ex,ey,v");
        assert_eq!(lines.len(), 7);
        assert!(lines[1].starts_with("-1.0000000000000000e0,-1.0000000000000000e0,"));
    }
}
