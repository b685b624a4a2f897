//! Convenience re-exports for evaluating point-charge fields.

pub use crate::constants::*;
pub use crate::errors::{ChargeFieldError, FieldError};
pub use crate::fields::{
    electric_field, electric_field_at, evaluate, potential, potential_at, Charge, FieldSample,
};
pub use crate::grid::{compute_grid, evaluate_grid, linspace, Grid, GridField};
pub use crate::io::{export_grid, write_field, write_grid_csv, write_grid_vtk, ExportFormat};
pub use crate::math::{magnitude, Mesh, R2, Scalar};
