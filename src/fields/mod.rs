//! Point-charge models and electrostatic field evaluation.

mod charge;
mod electrostatic;

pub use charge::Charge;
pub use electrostatic::{
    electric_field, electric_field_at, evaluate, potential, potential_at, FieldSample,
};
