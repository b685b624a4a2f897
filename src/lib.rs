#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants and evaluation defaults.
pub mod constants;
/// Shared vector and mesh aliases.
pub mod math;
/// Point charges and the field/potential evaluators.
pub mod fields;
/// Sampling lattices and mesh-shaped results.
pub mod grid;
/// CSV and VTK export of evaluated grids.
pub mod io;
/// Error types shared between modules.
pub mod errors;
/// JSON API served over HTTP.
#[cfg(feature = "server")]
pub mod api;

/// Common exports for downstream crates.
pub mod prelude;
